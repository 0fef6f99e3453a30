//! Status and fault definitions.
//!
//! This module defines the error handling model of the virtual CPU. It provides:
//! 1. **Machine Status:** The closed set of states a machine can be in,
//!    including the terminal halt and fault states.
//! 2. **Faults:** The per-step fault causes raised by the dispatcher and the
//!    instruction handlers.
//! 3. **Load Errors:** Failures of the program loader, integrated with the
//!    standard Rust error traits via `thiserror`.

use std::fmt;

use thiserror::Error;

/// Machine status, observed through [`crate::Machine::status`].
///
/// `Ok` is the only state from which stepping proceeds. `Halted` and every
/// fault state are terminal and sticky: once set, each subsequent step is a
/// no-op that reports "not executed" until an explicit reset.
///
/// The status set is closed; a Rust `enum` cannot hold a value outside it, so
/// the original defensive clamp of unknown status values to
/// `IllegalInstruction` is unrepresentable here and intentionally absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    /// Runnable; the initial state and the only one from which steps execute.
    #[default]
    Ok,
    /// Graceful termination via the HALT instruction. Terminal, not a fault.
    Halted,
    /// Opcode word outside the instruction set.
    IllegalInstruction,
    /// Register operand outside A-D, or a character output outside 0-255.
    IllegalOperand,
    /// Program counter left the code region.
    InvalidAddress,
    /// Push on a full stack, pop or windowed access on an empty stack, or an
    /// effective address outside the current stack window.
    InvalidStackOperation,
    /// Division by a register holding zero.
    DivByZero,
    /// Malformed or out-of-32-bit-range numeric input, or a failed host write.
    IoError,
}

impl Status {
    /// Returns `true` for every state other than `Ok`.
    ///
    /// Terminal states are sticky until [`crate::Machine::reset`].
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Ok)
    }

    /// Returns `true` for the fault states (terminal states other than `Halted`).
    pub const fn is_fault(self) -> bool {
        !matches!(self, Self::Ok | Self::Halted)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ok => "ok",
            Self::Halted => "halted",
            Self::IllegalInstruction => "illegal instruction",
            Self::IllegalOperand => "illegal operand",
            Self::InvalidAddress => "invalid address",
            Self::InvalidStackOperation => "invalid stack operation",
            Self::DivByZero => "division by zero",
            Self::IoError => "I/O error",
        };
        f.write_str(name)
    }
}

/// Fault cause raised during a single step.
///
/// Faults are recorded in the machine's status field, never propagated as
/// panics; `step` and `run` signal failure only through their return values
/// plus the status field for the cause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// Opcode word outside `[0, 18]`, fetched by the dispatcher.
    #[error("illegal instruction")]
    IllegalInstruction,
    /// Register operand outside A-D, or a PUTC value outside 0-255.
    #[error("illegal operand")]
    IllegalOperand,
    /// Instruction fetch from outside the code region.
    #[error("invalid address")]
    InvalidAddress,
    /// Stack capacity or window violation.
    #[error("invalid stack operation")]
    InvalidStackOperation,
    /// DIV with a zero-valued register operand.
    #[error("division by zero")]
    DivByZero,
    /// Unusable numeric input or failed host output.
    #[error("I/O error")]
    Io,
}

impl From<Fault> for Status {
    fn from(fault: Fault) -> Self {
        match fault {
            Fault::IllegalInstruction => Self::IllegalInstruction,
            Fault::IllegalOperand => Self::IllegalOperand,
            Fault::InvalidAddress => Self::InvalidAddress,
            Fault::InvalidStackOperation => Self::InvalidStackOperation,
            Fault::DivByZero => Self::DivByZero,
            Fault::Io => Self::IoError,
        }
    }
}

/// Program loading failure.
///
/// Raised before any machine exists; once a machine is constructed, all
/// failures are reported through [`Status`] instead.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The byte stream's length is not a multiple of one word (4 bytes).
    #[error("program image length {len} is not a multiple of 4 bytes")]
    TruncatedWord {
        /// Total number of bytes read from the stream.
        len: usize,
    },
    /// The underlying byte stream failed to read.
    #[error("failed to read program image")]
    Io(#[from] std::io::Error),
}
