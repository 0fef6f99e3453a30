//! Simulation utilities and program loading.
//!
//! Provides the loader that turns binary program images into machine memory
//! with a reserved stack region.

/// Byte stream to word-addressed memory loader.
pub mod loader;

pub use loader::{LoadedProgram, load_program};
