//! Instruction decoder.
//!
//! Turns raw words starting at the program counter into one [`Instruction`].
//! The decoder performs the per-instruction operand validation of the fault
//! model: opcode words outside the instruction set are illegal instructions,
//! register operand words outside A-D are illegal operands, and operand reads
//! past the end of memory are invalid addresses. A decode fault leaves the
//! program counter untouched at the opcode word.

use crate::common::{Fault, Register};
use crate::isa::instruction::Instruction;
use crate::isa::opcodes;
use crate::memory::WordBuffer;

/// Decodes the instruction whose opcode word sits at `pc`.
///
/// The caller has already validated that `pc` lies inside the code region;
/// operand words may legitimately extend past it (the final instruction of a
/// program touches the first stack-window words) but never past memory.
///
/// # Arguments
///
/// * `memory` - The machine memory holding the instruction stream.
/// * `pc` - Word index of the opcode word.
///
/// # Errors
///
/// Returns the fault to record when the opcode, an operand, or an operand
/// address is invalid.
pub fn decode(memory: &WordBuffer, pc: usize) -> Result<Instruction, Fault> {
    let opcode = memory.get(pc).ok_or(Fault::InvalidAddress)?;

    let inst = match opcode {
        opcodes::NOP => Instruction::Nop,
        opcodes::HALT => Instruction::Halt,
        opcodes::ADD => Instruction::Add(register(memory, pc + 1)?),
        opcodes::SUB => Instruction::Sub(register(memory, pc + 1)?),
        opcodes::MUL => Instruction::Mul(register(memory, pc + 1)?),
        opcodes::DIV => Instruction::Div(register(memory, pc + 1)?),
        opcodes::INC => Instruction::Inc(register(memory, pc + 1)?),
        opcodes::DEC => Instruction::Dec(register(memory, pc + 1)?),
        opcodes::LOOP => Instruction::Loop(operand(memory, pc + 1)?),
        opcodes::MOV => Instruction::Mov(register(memory, pc + 1)?, operand(memory, pc + 2)?),
        opcodes::LOAD => Instruction::Load(register(memory, pc + 1)?, operand(memory, pc + 2)?),
        opcodes::STORE => Instruction::Store(register(memory, pc + 1)?, operand(memory, pc + 2)?),
        opcodes::IN => Instruction::In(register(memory, pc + 1)?),
        opcodes::GETC => Instruction::Getc(register(memory, pc + 1)?),
        opcodes::OUT => Instruction::Out(register(memory, pc + 1)?),
        opcodes::PUTC => Instruction::Putc(register(memory, pc + 1)?),
        opcodes::SWAP => {
            Instruction::Swap(register(memory, pc + 1)?, register(memory, pc + 2)?)
        }
        opcodes::PUSH => Instruction::Push(register(memory, pc + 1)?),
        opcodes::POP => Instruction::Pop(register(memory, pc + 1)?),
        _ => return Err(Fault::IllegalInstruction),
    };
    Ok(inst)
}

/// Fetches a raw operand word.
fn operand(memory: &WordBuffer, index: usize) -> Result<i32, Fault> {
    memory.get(index).ok_or(Fault::InvalidAddress)
}

/// Fetches an operand word and decodes it as a register identifier.
fn register(memory: &WordBuffer, index: usize) -> Result<Register, Fault> {
    Register::from_word(operand(memory, index)?).ok_or(Fault::IllegalOperand)
}
