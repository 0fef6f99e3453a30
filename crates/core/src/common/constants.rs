//! Common constants used throughout the virtual CPU.

/// Number of bytes packed into one memory word by the program loader.
pub const WORD_BYTES: usize = 4;

/// Memory allocation granularity in words (4 KiB of 32-bit words).
///
/// The loader's backing buffer starts at one chunk and grows by whole
/// chunks whenever the program plus the requested stack region would no
/// longer fit. Newly grown regions are zero-filled.
pub const MEMORY_CHUNK_WORDS: usize = 1024;

/// Number of general-purpose registers (A, B, C, D).
pub const REGISTER_COUNT: usize = 4;
