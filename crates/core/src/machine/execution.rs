//! Single-step dispatcher and bounded-run driver.
//!
//! This module implements the execution cycle of the machine. It performs:
//! 1. **Status gating:** Terminal statuses are sticky; stepping a non-OK
//!    machine is a cheap no-op reported as "not executed."
//! 2. **Fetch validation:** The program counter must stay inside the code
//!    region; the stack window is not executable.
//! 3. **Dispatch:** One decode per step, then an exhaustive match over the
//!    closed instruction set.
//! 4. **Driving:** A bounded run loop with a signed step-count contract.
//!
//! Fault paths never advance the program counter: the decode-first structure
//! leaves it at the opcode word, which subsumes the original's explicit
//! rollback (inert anyway once the status turns sticky).

use tracing::trace;

use crate::common::{Fault, Register, Status};
use crate::io::InputInt;
use crate::isa::{Instruction, decode};
use crate::machine::Machine;

/// Control-flow outcome of one successfully executed instruction.
enum Flow {
    /// Advance the program counter by the instruction width.
    Advance(i64),
    /// Jump to an absolute word index (LOOP with C nonzero).
    Jump(i64),
    /// Enter the halted state.
    Halt,
}

impl Machine {
    /// Executes at most one instruction.
    ///
    /// # Returns
    ///
    /// `true` if an instruction executed and the machine remains runnable;
    /// `false` if nothing executed, because the status was already terminal
    /// or this step halted or faulted. Inspect [`Machine::status`] for the
    /// cause.
    pub fn step(&mut self) -> bool {
        if self.status != Status::Ok {
            return false;
        }

        if self.next_instr < 0 || self.next_instr >= self.code_limit() {
            self.fault(Fault::InvalidAddress);
            return false;
        }

        let inst = match decode(&self.memory, self.next_instr as usize) {
            Ok(inst) => inst,
            Err(fault) => {
                self.fault(fault);
                return false;
            }
        };

        match self.execute(inst) {
            Ok(Flow::Advance(width)) => {
                self.next_instr += width;
                true
            }
            Ok(Flow::Jump(target)) => {
                self.next_instr = target;
                true
            }
            Ok(Flow::Halt) => {
                self.status = Status::Halted;
                false
            }
            Err(fault) => {
                self.fault(fault);
                false
            }
        }
    }

    /// Executes up to `step_budget` instructions, stopping at the first step
    /// that reports "not executed."
    ///
    /// # Returns
    ///
    /// `step_budget` if every step executed; `+i` if execution stopped at
    /// step `i` (1-indexed) because the machine halted; `-i` if it stopped at
    /// step `i` on a fault; `0` if the status was already terminal at entry.
    pub fn run(&mut self, step_budget: u64) -> i64 {
        if self.status != Status::Ok {
            return 0;
        }

        for i in 1..=step_budget {
            if !self.step() {
                let i = i as i64;
                return if self.status == Status::Halted { i } else { -i };
            }
        }
        step_budget as i64
    }

    /// Records a fault as the sticky machine status.
    fn fault(&mut self, fault: Fault) {
        trace!(pc = self.next_instr, %fault, "execution fault");
        self.status = fault.into();
    }

    fn execute(&mut self, inst: Instruction) -> Result<Flow, Fault> {
        let width = inst.width();
        match inst {
            Instruction::Nop => {}
            Instruction::Halt => return Ok(Flow::Halt),
            Instruction::Add(reg) => self.accumulate(reg, i32::wrapping_add),
            Instruction::Sub(reg) => self.accumulate(reg, i32::wrapping_sub),
            Instruction::Mul(reg) => self.accumulate(reg, i32::wrapping_mul),
            Instruction::Div(reg) => {
                if self.regs.read(reg) == 0 {
                    return Err(Fault::DivByZero);
                }
                self.accumulate(reg, i32::wrapping_div);
            }
            Instruction::Inc(reg) => {
                self.regs.write(reg, self.regs.read(reg).wrapping_add(1));
            }
            Instruction::Dec(reg) => {
                self.regs.write(reg, self.regs.read(reg).wrapping_sub(1));
            }
            Instruction::Loop(target) => {
                if self.regs.read(Register::C) != 0 {
                    return Ok(Flow::Jump(i64::from(target)));
                }
            }
            Instruction::Mov(reg, value) => self.regs.write(reg, value),
            Instruction::Load(reg, offset) => {
                let index = self
                    .stack
                    .effective_index(self.regs.read(Register::D), offset)?;
                self.regs.write(reg, self.memory.get(index).unwrap_or(0));
            }
            Instruction::Store(reg, offset) => {
                let index = self
                    .stack
                    .effective_index(self.regs.read(Register::D), offset)?;
                self.memory.set(index, self.regs.read(reg));
            }
            Instruction::In(reg) => match self.console.read_int() {
                InputInt::Value(value) => {
                    let value = i32::try_from(value).map_err(|_| Fault::Io)?;
                    self.regs.write(reg, value);
                }
                InputInt::Eof => self.end_of_input(reg),
                InputInt::Malformed => return Err(Fault::Io),
            },
            Instruction::Getc(reg) => match self.console.read_byte() {
                Some(byte) => self.regs.write(reg, i32::from(byte)),
                None => self.end_of_input(reg),
            },
            Instruction::Out(reg) => {
                let value = self.regs.read(reg);
                self.console.write_int(value).map_err(|_| Fault::Io)?;
            }
            Instruction::Putc(reg) => {
                let byte =
                    u8::try_from(self.regs.read(reg)).map_err(|_| Fault::IllegalOperand)?;
                self.console.write_byte(byte).map_err(|_| Fault::Io)?;
            }
            Instruction::Swap(first, second) => {
                let tmp = self.regs.read(first);
                self.regs.write(first, self.regs.read(second));
                self.regs.write(second, tmp);
            }
            Instruction::Push(reg) => {
                let value = self.regs.read(reg);
                self.stack.push(&mut self.memory, value)?;
            }
            Instruction::Pop(reg) => {
                let value = self.stack.pop(&mut self.memory)?;
                self.regs.write(reg, value);
            }
        }
        Ok(Flow::Advance(width))
    }

    /// Applies one accumulator operation: `A = op(A, reg)`.
    fn accumulate(&mut self, reg: Register, op: fn(i32, i32) -> i32) {
        let result = op(self.regs.read(Register::A), self.regs.read(reg));
        self.regs.write(Register::A, result);
    }

    /// End-of-input sentinel shared by IN and GETC: clear the loop counter
    /// and hand the target register -1, then continue executing.
    fn end_of_input(&mut self, reg: Register) {
        self.regs.write(Register::C, 0);
        self.regs.write(reg, -1);
    }
}
