//! Register-based virtual CPU library.
//!
//! This crate implements a word-addressed register machine with the following:
//! 1. **Loader:** Packs a binary byte stream into a flat 32-bit word memory
//!    sized to hold both the program and a caller-specified stack region.
//! 2. **Machine:** Four general-purpose registers, a program counter, a
//!    downward-growing stack window, and a sticky status model for halts and
//!    faults.
//! 3. **ISA:** A fixed 19-opcode instruction set decoded into a closed enum
//!    and dispatched exhaustively.
//! 4. **Execution:** A single-stepping dispatcher and a bounded-run driver
//!    with a signed step-count contract.
//! 5. **I/O:** A console abstraction behind the four I/O instructions,
//!    pluggable for tests and embedders.

/// Common types and constants (registers, status, faults, load errors).
pub mod common;
/// Machine configuration (defaults, JSON deserialization).
pub mod config;
/// Console abstraction for the I/O instructions.
pub mod io;
/// Instruction set (opcodes, instruction type, decoder).
pub mod isa;
/// Machine state, stack window, dispatcher, and run driver.
pub mod machine;
/// Growable word-addressed memory buffer.
pub mod memory;
/// Program loading.
pub mod sim;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Register identifiers and status observed through the machine accessors.
pub use crate::common::{LoadError, Register, Status};
/// Console trait for wiring the I/O instructions.
pub use crate::io::Console;
/// Main machine type; construct with `Machine::new` from a loaded program.
pub use crate::machine::Machine;
/// Owned machine memory.
pub use crate::memory::WordBuffer;
/// Program loading entry point.
pub use crate::sim::{LoadedProgram, load_program};
