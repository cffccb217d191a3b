//! Stress tests, non-terminating programs, and property tests.

use proptest::prelude::*;
use riscv_interpreter::core::{Cpu, RunOutcome};

/// Two labels jumping to each other never halt.
#[test]
fn test_ping_pong_never_halts() {
    let mut cpu = Cpu::from_lines(&["a:", "j b", "b:", "j a"]).unwrap();
    assert_eq!(cpu.run_for(10_000), RunOutcome::StepLimit { steps: 10_000 });
    assert!(!cpu.is_halted());
    assert!(cpu.diagnostics().is_empty());
}

/// A branch to itself never halts and keeps counting cycles.
#[test]
fn test_self_loop_never_halts() {
    let mut cpu = Cpu::from_lines(&["here:", "beq x0 x0 here"]).unwrap();
    assert_eq!(cpu.run_for(1_001), RunOutcome::StepLimit { steps: 1_001 });
    // 1001 steps: 501 label skips, 500 branches.
    assert_eq!(cpu.metrics().cycle_count, 500);
}

/// Stress test writing and reading many memory words.
#[test]
fn test_memory_stress() {
    let mut lines = vec!["li x1 0".to_string()];
    for i in 0..256 {
        lines.push(format!("li x2 {}", i * 3));
        lines.push(format!("sw x2 {} x1", i * 4));
    }
    for i in 0..256 {
        lines.push(format!("lw x3 {} x1", i * 4));
        lines.push("add x4 x4 x3".to_string());
    }
    let mut cpu = Cpu::from_lines(&lines).unwrap();
    cpu.run();

    let expected: i32 = (0..256).map(|i| i * 3).sum();
    assert_eq!(cpu.regs.read(4), expected);
    assert_eq!(cpu.memory().len(), 256);
    assert_eq!(cpu.metrics().memory_accesses, 512);
}

/// Stress test for wraparound in a long accumulation.
#[test]
fn test_overflow_accumulation() {
    let mut cpu = Cpu::from_lines(&[
        "li x1 0x7FFFFFFF",
        "li x2 0",
        "li x3 1000",
        "loop:",
        "beq x2 x3 done",
        "add x4 x4 x1",
        "addi x2 x2 1",
        "j loop",
        "done:",
    ])
    .unwrap();
    cpu.run();
    assert_eq!(cpu.regs.read(4), i32::MAX.wrapping_mul(1000));
}

#[derive(Clone, Copy, Debug)]
enum Op {
    Li,
    Addi,
    Sub,
    Lw,
    Sw,
}

fn render(op: Op, val: i32) -> String {
    match op {
        Op::Li => format!("li x1 {}", val),
        Op::Addi => format!("addi x2 x1 {}", val),
        Op::Sub => "sub x3 x2 x1".to_string(),
        Op::Lw => format!("lw x4 {} x0", val),
        Op::Sw => format!("sw x2 {} x0", val),
    }
}

fn any_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Li),
        Just(Op::Addi),
        Just(Op::Sub),
        Just(Op::Lw),
        Just(Op::Sw),
    ]
}

proptest! {
    /// SW followed by LW at the same address returns the stored value.
    #[test]
    fn prop_store_load_round_trip(
        base in -100_000i32..100_000,
        offset in -2048i32..2048,
        value in any::<i32>(),
    ) {
        let lines = [
            format!("li x1 {}", base),
            format!("li x2 {}", value),
            format!("sw x2 {} x1", offset),
            format!("lw x3 {} x1", offset),
        ];
        let mut cpu = Cpu::from_lines(&lines).unwrap();
        cpu.run();
        prop_assert_eq!(cpu.regs.read(3), value);
        prop_assert_eq!(cpu.memory(), vec![(base + offset, value)]);
        prop_assert_eq!(cpu.metrics().memory_accesses, 2);
    }

    /// BEQ jumps to its target when equal and falls through otherwise.
    #[test]
    fn prop_beq(a in -4i32..4, b in -4i32..4) {
        let lines = [
            format!("li x1 {}", a),
            format!("li x2 {}", b),
            "beq x1 x2 target".to_string(),
            "li x5 1".to_string(),
            "target:".to_string(),
        ];
        let mut cpu = Cpu::from_lines(&lines).unwrap();
        cpu.step();
        cpu.step();
        cpu.step();
        prop_assert_eq!(cpu.pc(), if a == b { 4 } else { 3 });
    }

    /// Straight-line code: cycles == instructions == N, and memory accesses
    /// equal the number of loads and stores.
    #[test]
    fn prop_straight_line_metrics(
        ops in proptest::collection::vec((any_op(), -64i32..64), 0..64),
    ) {
        let lines: Vec<String> = ops.iter().map(|&(op, v)| render(op, v)).collect();
        let mut cpu = Cpu::from_lines(&lines).unwrap();
        cpu.run();

        let n = ops.len() as u64;
        let mem = ops
            .iter()
            .filter(|(op, _)| matches!(op, Op::Lw | Op::Sw))
            .count() as u64;
        let metrics = cpu.metrics();
        prop_assert_eq!(metrics.instruction_count, n);
        prop_assert_eq!(metrics.cycle_count, n);
        prop_assert_eq!(metrics.memory_accesses, mem);
    }
}
