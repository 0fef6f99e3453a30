//! Common types and constants used throughout the virtual CPU.
//!
//! This module provides the fundamental building blocks shared across all
//! components of the machine. It includes:
//! 1. **Constants:** Word packing, allocation granularity, register count.
//! 2. **Registers:** The four symbolic register identifiers and the register file.
//! 3. **Error Handling:** Machine status, per-step faults, and load errors.

/// Common constants used throughout the machine.
pub mod constants;

/// Status, fault, and load-error types.
pub mod error;

/// Register identifiers and the register file.
pub mod reg;

pub use error::{Fault, LoadError, Status};
pub use reg::{Register, RegisterFile};
