//! Integration tests for the register file and data memory.

use pretty_assertions::assert_eq;
use riscv_interpreter::core::arch::gpr::Gpr;
use riscv_interpreter::core::memory::Memory;
use riscv_interpreter::isa::abi;

/// Tests that every register, including x0, stores what is written.
#[test]
fn test_gpr_read_write() {
    let mut gpr = Gpr::new();

    gpr.write(0, 42);
    assert_eq!(gpr.read(0), 42);

    for i in 1..32 {
        let val = (i as i32) * -1_111;
        gpr.write(i, val);
        assert_eq!(gpr.read(i), val);
    }
}

/// Tests that a fresh register file reads as zero.
#[test]
fn test_gpr_initial_state() {
    let gpr = Gpr::new();
    assert_eq!(gpr.snapshot(), [0; 32]);
}

/// Tests that the register snapshot is in index order.
#[test]
fn test_gpr_snapshot_order() {
    let mut gpr = Gpr::new();
    for i in 0..32 {
        gpr.write(i, i as i32);
    }
    let snap = gpr.snapshot();
    for (i, val) in snap.iter().enumerate() {
        assert_eq!(*val, i as i32);
    }
}

/// Tests that unwritten memory reads as zero.
#[test]
fn test_memory_default_zero() {
    let mem = Memory::new();
    assert_eq!(mem.read(0), 0);
    assert_eq!(mem.read(-12), 0);
    assert!(mem.is_empty());
}

/// Tests that reads never populate memory.
#[test]
fn test_memory_read_does_not_allocate() {
    let mem = Memory::new();
    let _ = mem.read(64);
    assert_eq!(mem.len(), 0);
}

/// Tests write and overwrite at the same address.
#[test]
fn test_memory_overwrite() {
    let mut mem = Memory::new();
    mem.write(4, 1);
    mem.write(4, 2);
    assert_eq!(mem.read(4), 2);
    assert_eq!(mem.len(), 1);
}

/// Tests that the memory snapshot is sorted by address.
#[test]
fn test_memory_snapshot_order() {
    let mut mem = Memory::new();
    mem.write(8, 1);
    mem.write(-4, 2);
    mem.write(0, 3);
    assert_eq!(mem.snapshot(), vec![(-4, 2), (0, 3), (8, 1)]);
}

/// Tests ABI register name lookup.
#[test]
fn test_abi_names() {
    assert_eq!(abi::index_of("zero"), Some(abi::REG_ZERO));
    assert_eq!(abi::index_of("ra"), Some(abi::REG_RA));
    assert_eq!(abi::index_of("SP"), Some(abi::REG_SP));
    assert_eq!(abi::index_of("fp"), Some(abi::REG_FP));
    assert_eq!(abi::index_of("s0"), Some(8));
    assert_eq!(abi::index_of("a0"), Some(abi::REG_A0));
    assert_eq!(abi::index_of("t6"), Some(31));
    assert_eq!(abi::index_of("bogus"), None);
}
