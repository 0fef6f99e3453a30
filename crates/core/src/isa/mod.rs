//! Instruction set: raw opcodes, the decoded instruction type, and the decoder.

/// Word-stream decoder with operand validation.
pub mod decode;

/// Closed tagged-variant instruction type.
pub mod instruction;

/// Raw opcode word constants.
pub mod opcodes;

pub use decode::decode;
pub use instruction::Instruction;
