//! General-Purpose Register File.
//!
//! This module implements the register identifiers and the register file of
//! the virtual CPU. It performs the following:
//! 1. **Identification:** The four symbolic register names `A`-`D` and their
//!    decoding from raw operand words.
//! 2. **Storage:** Maintains the four 32-bit signed registers.
//! 3. **Debugging:** Provides a utility for dumping the complete register state.

use crate::common::constants::REGISTER_COUNT;

/// Identifier of one of the four general-purpose registers.
///
/// Ordinal values 0-3 match the operand encoding in the instruction stream;
/// any other operand word is an illegal-operand fault at decode time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Register {
    /// Register A (ordinal 0), the implicit accumulator of ADD/SUB/MUL/DIV.
    A = 0,
    /// Register B (ordinal 1).
    B = 1,
    /// Register C (ordinal 2), the implicit loop counter of LOOP and the
    /// end-of-input flag target of IN/GETC.
    C = 2,
    /// Register D (ordinal 3), the implicit base offset of LOAD/STORE.
    D = 3,
}

impl Register {
    /// Decodes a raw operand word into a register identifier.
    ///
    /// # Arguments
    ///
    /// * `word` - The operand word fetched from the instruction stream.
    ///
    /// # Returns
    ///
    /// The matching register, or `None` if the word is outside 0-3.
    pub const fn from_word(word: i32) -> Option<Self> {
        match word {
            0 => Some(Self::A),
            1 => Some(Self::B),
            2 => Some(Self::C),
            3 => Some(Self::D),
            _ => None,
        }
    }

    /// Returns the register's index into the register file (0-3).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the register's symbolic name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl std::fmt::Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Register file containing the four general-purpose registers.
///
/// All registers hold 32-bit signed words and are initialized to zero.
/// Arithmetic on register values uses two's-complement wraparound semantics
/// throughout the instruction set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [i32; REGISTER_COUNT],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; REGISTER_COUNT],
        }
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `reg` - The register to read.
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the specified register.
    pub const fn read(&self, reg: Register) -> i32 {
        self.regs[reg.index()]
    }

    /// Writes a value to a register.
    ///
    /// # Arguments
    ///
    /// * `reg` - The register to write.
    /// * `val` - The 32-bit value to write.
    pub const fn write(&mut self, reg: Register, val: i32) {
        self.regs[reg.index()] = val;
    }

    /// Zeroes all four registers.
    pub const fn clear(&mut self) {
        self.regs = [0; REGISTER_COUNT];
    }

    /// Dumps the contents of all registers to stderr.
    ///
    /// Useful for debugging and tracing machine state between runs.
    pub fn dump(&self) {
        eprintln!(
            "A={:#010x} B={:#010x} C={:#010x} D={:#010x}",
            self.regs[0], self.regs[1], self.regs[2], self.regs[3]
        );
    }
}
