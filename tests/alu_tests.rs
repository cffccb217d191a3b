//! Integration tests for the ALU and arithmetic instructions.

use proptest::prelude::*;
use riscv_interpreter::core::units::alu::{Alu, AluOp};
use riscv_interpreter::core::Cpu;

/// Tests basic ALU addition.
#[test]
fn test_alu_add() {
    assert_eq!(Alu::execute(AluOp::Add, 10, 20), 30);
    assert_eq!(Alu::execute(AluOp::Add, -5, 3), -2);
}

/// Tests ALU subtraction.
#[test]
fn test_alu_sub() {
    assert_eq!(Alu::execute(AluOp::Sub, 20, 5), 15);
    assert_eq!(Alu::execute(AluOp::Sub, 0, 1), -1);
}

/// Tests two's-complement wraparound at the 32-bit boundary.
#[test]
fn test_alu_wraparound() {
    assert_eq!(Alu::execute(AluOp::Add, i32::MAX, 1), i32::MIN);
    assert_eq!(Alu::execute(AluOp::Sub, i32::MIN, 1), i32::MAX);
}

/// Tests effective address computation with negative offsets.
#[test]
fn test_effective_address() {
    assert_eq!(Alu::effective_address(100, -4), 96);
    assert_eq!(Alu::effective_address(0, 0), 0);
    assert_eq!(Alu::effective_address(-8, 4), -4);
}

/// Tests ADDI with a negative immediate through the engine.
#[test]
fn test_addi_negative_immediate() {
    let mut cpu = Cpu::from_lines(&["li x1, 10", "addi x2, x1, -15"]).unwrap();
    cpu.run();
    assert_eq!(cpu.regs.read(2), -5);
}

/// Tests SUB operand order.
#[test]
fn test_sub_operand_order() {
    let mut cpu = Cpu::from_lines(&["li x1, 3", "li x2, 10", "sub x3, x2, x1"]).unwrap();
    cpu.run();
    assert_eq!(cpu.regs.read(3), 7);
}

proptest! {
    /// ADD yields the wrapped sum of its source registers.
    #[test]
    fn prop_add_wraps(a in any::<i32>(), b in any::<i32>()) {
        let mut cpu = Cpu::from_lines(&["add x7, x5, x6"]).unwrap();
        cpu.regs.write(5, a);
        cpu.regs.write(6, b);
        cpu.step();
        prop_assert_eq!(cpu.regs.read(7), a.wrapping_add(b));
    }

    /// SUB yields the wrapped difference of its source registers.
    #[test]
    fn prop_sub_wraps(a in any::<i32>(), b in any::<i32>()) {
        let mut cpu = Cpu::from_lines(&["sub x7, x5, x6"]).unwrap();
        cpu.regs.write(5, a);
        cpu.regs.write(6, b);
        cpu.step();
        prop_assert_eq!(cpu.regs.read(7), a.wrapping_sub(b));
    }

    /// ADDI adds a decoded immediate to the source register.
    #[test]
    fn prop_addi(a in any::<i32>(), imm in any::<i32>()) {
        let line = format!("addi x2, x1, {}", imm);
        let mut cpu = Cpu::from_lines(&[line]).unwrap();
        cpu.regs.write(1, a);
        cpu.step();
        prop_assert_eq!(cpu.regs.read(2), a.wrapping_add(imm));
    }
}
