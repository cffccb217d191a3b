//! RISC-V ABI register names.
//!
//! Maps the standard calling-convention names (`zero`, `ra`, `sp`, `a0`, ...)
//! to architectural register indices.

/// Hard-wired zero in the ABI. Writable in this interpreter.
pub const REG_ZERO: usize = 0;
/// Return address; the default link register for `jal label`.
pub const REG_RA: usize = 1;
/// Stack pointer.
pub const REG_SP: usize = 2;
/// Frame pointer, alias of `s0`.
pub const REG_FP: usize = 8;
/// First argument / return value register.
pub const REG_A0: usize = 10;

/// ABI names indexed by register number.
pub const ABI_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Looks up a register index by ABI name (case-insensitive).
///
/// `fp` is accepted as an alias of `s0`.
pub fn index_of(name: &str) -> Option<usize> {
    let name = name.to_ascii_lowercase();
    if name == "fp" {
        return Some(REG_FP);
    }
    ABI_NAMES.iter().position(|&n| n == name)
}
