//! Decoded instruction representation.
//!
//! The instruction set is a closed tagged-variant type: one variant per
//! opcode, decoded once from the raw word stream and matched exhaustively by
//! the dispatcher. Adding or auditing an opcode is a compile-time-checked
//! change rather than a manual range check.

use crate::common::Register;

/// One decoded instruction of the 19-opcode set.
///
/// Each instruction occupies one to three consecutive memory words (opcode
/// plus operands); [`Instruction::width`] reports the encoded width used to
/// advance the program counter on success.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Opcode 0: no operation.
    Nop,
    /// Opcode 1: halt the machine.
    Halt,
    /// Opcode 2: `A += reg`.
    Add(Register),
    /// Opcode 3: `A -= reg`.
    Sub(Register),
    /// Opcode 4: `A *= reg`.
    Mul(Register),
    /// Opcode 5: `A /= reg`; faults when `reg` holds zero.
    Div(Register),
    /// Opcode 6: `reg += 1`.
    Inc(Register),
    /// Opcode 7: `reg -= 1`.
    Dec(Register),
    /// Opcode 8: jump to the absolute word index when register C is nonzero.
    ///
    /// The target is taken verbatim from the instruction stream; an invalid
    /// target is caught by the dispatcher's next fetch, not at decode time.
    Loop(i32),
    /// Opcode 9: `reg = immediate`.
    Mov(Register, i32),
    /// Opcode 10: `reg = memory[top + D + offset]` within the stack window.
    Load(Register, i32),
    /// Opcode 11: `memory[top + D + offset] = reg` within the stack window.
    Store(Register, i32),
    /// Opcode 12: read one textual integer into `reg`.
    In(Register),
    /// Opcode 13: read one raw input byte into `reg`.
    Getc(Register),
    /// Opcode 14: write `reg` as a decimal integer.
    Out(Register),
    /// Opcode 15: write `reg` as one character; `reg` must be in 0-255.
    Putc(Register),
    /// Opcode 16: exchange two registers.
    Swap(Register, Register),
    /// Opcode 17: push `reg` onto the stack.
    Push(Register),
    /// Opcode 18: pop the top of the stack into `reg`, zeroing the cell.
    Pop(Register),
}

impl Instruction {
    /// Returns the encoded width of the instruction in words (1 to 3).
    pub const fn width(self) -> i64 {
        match self {
            Self::Nop | Self::Halt => 1,
            Self::Add(_)
            | Self::Sub(_)
            | Self::Mul(_)
            | Self::Div(_)
            | Self::Inc(_)
            | Self::Dec(_)
            | Self::Loop(_)
            | Self::In(_)
            | Self::Getc(_)
            | Self::Out(_)
            | Self::Putc(_)
            | Self::Push(_)
            | Self::Pop(_) => 2,
            Self::Mov(..) | Self::Load(..) | Self::Store(..) | Self::Swap(..) => 3,
        }
    }
}
