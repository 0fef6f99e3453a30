//! Raw opcode words of the instruction set.
//!
//! Each constant is the first word of an instruction encoding; operand words
//! follow it in the instruction stream. The set is contiguous, `[NOP, POP]`.

/// No operation; advances past itself.
pub const NOP: i32 = 0;
/// Graceful termination; sets the halted status.
pub const HALT: i32 = 1;
/// `A += reg` with wraparound.
pub const ADD: i32 = 2;
/// `A -= reg` with wraparound.
pub const SUB: i32 = 3;
/// `A *= reg` with wraparound.
pub const MUL: i32 = 4;
/// `A /= reg`; faults on a zero divisor.
pub const DIV: i32 = 5;
/// `reg += 1` with wraparound.
pub const INC: i32 = 6;
/// `reg -= 1` with wraparound.
pub const DEC: i32 = 7;
/// Jump to an absolute word index when register C is nonzero.
pub const LOOP: i32 = 8;
/// `reg = immediate`.
pub const MOV: i32 = 9;
/// Windowed stack read into a register.
pub const LOAD: i32 = 10;
/// Windowed stack write from a register.
pub const STORE: i32 = 11;
/// Read one textual integer from the input stream.
pub const IN: i32 = 12;
/// Read one raw byte from the input stream.
pub const GETC: i32 = 13;
/// Write a register as a decimal integer to the output stream.
pub const OUT: i32 = 14;
/// Write a register as one raw byte to the output stream.
pub const PUTC: i32 = 15;
/// Exchange two registers.
pub const SWAP: i32 = 16;
/// Push a register onto the stack.
pub const PUSH: i32 = 17;
/// Pop the top of the stack into a register.
pub const POP: i32 = 18;

/// Highest valid opcode word; anything above is an illegal instruction.
pub const MAX: i32 = POP;
