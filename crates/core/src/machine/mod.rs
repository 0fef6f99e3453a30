//! Machine state: registers, program counter, stack window, and status.
//!
//! This module ties the leaf components together into the machine the caller
//! owns and drives. It performs the following:
//! 1. **Construction:** Builds a runnable machine from loaded memory and a
//!    stack-capacity request.
//! 2. **Accessors:** Register, status, stack-size, and program-counter
//!    observers used by embedders and tests.
//! 3. **Lifecycle:** `reset` back to the initial runnable state; teardown is
//!    plain `Drop`, which releases the owned memory exactly once.
//!
//! Stepping and the bounded-run driver live in [`execution`].

use std::fmt;

use tracing::debug;

use crate::common::{Register, RegisterFile, Status};
use crate::io::{self, Console};
use crate::memory::WordBuffer;

/// Single-step dispatcher and bounded-run driver.
pub mod execution;

/// Downward-growing stack-window bookkeeping.
pub mod stack;

use stack::StackWindow;

/// The virtual CPU: the entire mutable state of one execution context.
///
/// A machine exclusively owns its memory; embedding it in a concurrent host
/// requires external synchronization (one machine per worker, or a mutex
/// around a shared instance). Every step runs to completion, so no
/// partial-instruction state is observable between steps.
pub struct Machine {
    regs: RegisterFile,
    next_instr: i64,
    memory: WordBuffer,
    stack: StackWindow,
    status: Status,
    console: Box<dyn Console>,
}

impl Machine {
    /// Creates a machine over loaded memory, wired to the process standard
    /// streams.
    ///
    /// # Arguments
    ///
    /// * `memory` - The memory buffer produced by the loader.
    /// * `stack_bottom` - Index of the stack's fixed bottom boundary word,
    ///   as reported by the loader.
    /// * `stack_capacity` - Stack window size in words.
    ///
    /// # Panics
    ///
    /// Panics if the stack window does not fit inside `memory` below
    /// `stack_bottom`.
    pub fn new(memory: WordBuffer, stack_bottom: usize, stack_capacity: usize) -> Self {
        Self::with_console(memory, stack_bottom, stack_capacity, Box::new(io::stdio()))
    }

    /// Creates a machine with a caller-supplied console.
    ///
    /// # Panics
    ///
    /// Panics if the stack window does not fit inside `memory` below
    /// `stack_bottom`.
    pub fn with_console(
        memory: WordBuffer,
        stack_bottom: usize,
        stack_capacity: usize,
        console: Box<dyn Console>,
    ) -> Self {
        assert!(
            stack_bottom < memory.len(),
            "stack bottom {stack_bottom} outside memory of {} words",
            memory.len()
        );
        let stack = StackWindow::new(stack_bottom, stack_capacity);
        debug!(
            memory_words = memory.len(),
            stack_bottom, stack_capacity, "machine created"
        );
        Self {
            regs: RegisterFile::new(),
            next_instr: 0,
            memory,
            stack,
            status: Status::Ok,
            console,
        }
    }

    /// Reads one register.
    pub const fn register(&self, reg: Register) -> i32 {
        self.regs.read(reg)
    }

    /// Writes one register.
    pub const fn set_register(&mut self, reg: Register, value: i32) {
        self.regs.write(reg, value);
    }

    /// Returns the current machine status.
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the number of words currently pushed on the stack.
    pub fn stack_size(&self) -> i32 {
        self.stack.depth() as i32
    }

    /// Returns the program counter (the word index of the next instruction).
    pub const fn program_counter(&self) -> i64 {
        self.next_instr
    }

    /// Returns a view of machine memory.
    pub const fn memory(&self) -> &WordBuffer {
        &self.memory
    }

    /// Dumps the register file to stderr.
    pub fn dump_registers(&self) {
        self.regs.dump();
    }

    /// Rewinds the machine to its initial runnable state.
    ///
    /// Zero-fills the stack window and zeroes registers, program counter,
    /// stack bookkeeping, and status. Program words and the window boundary
    /// are preserved, so the loaded program re-executes identically.
    pub fn reset(&mut self) {
        self.stack.reset(&mut self.memory);
        self.regs.clear();
        self.next_instr = 0;
        self.status = Status::Ok;
        debug!("machine reset");
    }

    /// First word index past the code region; instruction fetches at or
    /// beyond it are invalid-address faults (the stack is not executable).
    pub(crate) const fn code_limit(&self) -> i64 {
        self.stack.end_index() as i64
    }
}

impl fmt::Debug for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("regs", &self.regs)
            .field("next_instr", &self.next_instr)
            .field("stack", &self.stack)
            .field("status", &self.status)
            .field("memory_words", &self.memory.len())
            .finish_non_exhaustive()
    }
}
