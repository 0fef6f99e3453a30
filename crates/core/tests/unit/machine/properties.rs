//! # Machine Property Tests
//!
//! Property-based tests for wraparound arithmetic, PUSH/POP inverses, and
//! the run driver's signed step-count contract.

use proptest::prelude::*;
use tinycpu_core::isa::opcodes;
use tinycpu_core::{Register, Status};

use crate::common::program::boot;

proptest! {
    #[test]
    fn prop_add_wraps_two_complement(a in any::<i32>(), b in any::<i32>()) {
        let mut machine = boot(
            &[opcodes::MOV, 0, a, opcodes::MOV, 1, b, opcodes::ADD, 1, opcodes::HALT],
            16,
        );
        prop_assert_eq!(machine.run(100), 4);
        prop_assert_eq!(machine.register(Register::A), a.wrapping_add(b));
    }

    #[test]
    fn prop_sub_wraps_two_complement(a in any::<i32>(), b in any::<i32>()) {
        let mut machine = boot(
            &[opcodes::MOV, 0, a, opcodes::MOV, 1, b, opcodes::SUB, 1, opcodes::HALT],
            16,
        );
        prop_assert_eq!(machine.run(100), 4);
        prop_assert_eq!(machine.register(Register::A), a.wrapping_sub(b));
    }

    #[test]
    fn prop_mul_wraps_two_complement(a in any::<i32>(), b in any::<i32>()) {
        let mut machine = boot(
            &[opcodes::MOV, 0, a, opcodes::MOV, 1, b, opcodes::MUL, 1, opcodes::HALT],
            16,
        );
        prop_assert_eq!(machine.run(100), 4);
        prop_assert_eq!(machine.register(Register::A), a.wrapping_mul(b));
    }

    #[test]
    fn prop_push_pop_is_identity(value in any::<i32>(), src in 0..4i32, dst in 0..4i32) {
        let mut machine = boot(
            &[
                opcodes::MOV, src, value,
                opcodes::PUSH, src,
                opcodes::POP, dst,
                opcodes::HALT,
            ],
            16,
        );
        prop_assert_eq!(machine.run(100), 4);
        prop_assert_eq!(machine.stack_size(), 0);
        let dst = Register::from_word(dst).unwrap();
        prop_assert_eq!(machine.register(dst), value);
    }

    #[test]
    fn prop_run_budget_contract(nops in 0usize..40, budget in 0u64..64) {
        let mut words = vec![opcodes::NOP; nops];
        words.push(opcodes::HALT);
        let mut machine = boot(&words, 16);

        let executed = machine.run(budget);
        let halt_step = nops as i64 + 1;
        if i64::try_from(budget).unwrap() < halt_step {
            // Budget ran out first: every step executed.
            prop_assert_eq!(executed, i64::try_from(budget).unwrap());
            prop_assert_eq!(machine.status(), Status::Ok);
        } else {
            // Halted at the HALT step, reported positively.
            prop_assert_eq!(executed, halt_step);
            prop_assert_eq!(machine.status(), Status::Halted);
        }
    }

    #[test]
    fn prop_faulted_machines_stay_frozen(budget in 1u64..16) {
        let mut machine = boot(&[opcodes::DIV, 2, opcodes::HALT], 16);
        prop_assert_eq!(machine.run(budget), -1);
        prop_assert_eq!(machine.status(), Status::DivByZero);
        // Further runs never execute anything.
        prop_assert_eq!(machine.run(budget), 0);
        prop_assert!(!machine.step());
        prop_assert_eq!(machine.status(), Status::DivByZero);
    }
}
