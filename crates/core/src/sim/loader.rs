//! Program loader.
//!
//! Turns a binary byte stream into a word-addressed memory buffer sized to
//! hold both the program and the requested stack region, and reports the
//! stack's fixed bottom boundary. It performs:
//! 1. **Word packing:** Bytes are consumed in groups of 4, first byte least
//!    significant (little-endian within each group).
//! 2. **Incremental growth:** The buffer starts at one chunk and grows by
//!    zero-filled chunks so the stack region always fits behind the code.
//! 3. **Placement:** The stack bottom is the last word of the final buffer;
//!    the stack grows downward from there into the allocated space.

use std::io::Read;

use tracing::debug;

use crate::common::LoadError;
use crate::common::constants::WORD_BYTES;
use crate::memory::WordBuffer;

/// A loaded program: the memory buffer and the stack's bottom boundary index.
///
/// Feed both to [`crate::Machine::new`] together with the same stack capacity
/// the image was loaded with.
#[derive(Clone, Debug)]
pub struct LoadedProgram {
    /// Memory holding the program words at the low end.
    pub memory: WordBuffer,
    /// Index of the last word of the buffer, where the stack begins.
    pub stack_bottom: usize,
}

/// Loads a program image from a byte stream.
///
/// # Arguments
///
/// * `reader` - The binary program stream; consumed to the end.
/// * `stack_capacity` - Stack region to reserve behind the program, in words.
///
/// # Errors
///
/// [`LoadError::TruncatedWord`] when the stream length is not a multiple of
/// 4 bytes, or [`LoadError::Io`] when the stream fails to read.
pub fn load_program<R: Read>(
    mut reader: R,
    stack_capacity: usize,
) -> Result<LoadedProgram, LoadError> {
    let mut bytes = Vec::new();
    let _ = reader.read_to_end(&mut bytes)?;
    if bytes.len() % WORD_BYTES != 0 {
        return Err(LoadError::TruncatedWord { len: bytes.len() });
    }

    let mut memory = WordBuffer::new();
    let mut code_words = 0;
    for chunk in bytes.chunks_exact(WORD_BYTES) {
        memory.reserve_tail(code_words, stack_capacity);
        memory.set(
            code_words,
            i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]),
        );
        code_words += 1;
    }
    // An empty or tiny program still needs the full stack region resident.
    memory.reserve_tail(code_words, stack_capacity);

    let stack_bottom = memory.len() - 1;
    debug!(
        code_words,
        memory_words = memory.len(),
        stack_bottom,
        "program loaded"
    );
    Ok(LoadedProgram {
        memory,
        stack_bottom,
    })
}
