//! Arithmetic Logic Unit (ALU).
//!
//! Integer arithmetic for the Execute step. All operations are 32-bit
//! two's-complement with wraparound.

/// ALU operation selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
}

/// Arithmetic Logic Unit for integer operations.
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a` - First operand
    /// * `b` - Second operand
    ///
    /// # Returns
    ///
    /// The wrapped 32-bit result.
    pub fn execute(op: AluOp, a: i32, b: i32) -> i32 {
        match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
        }
    }

    /// Effective address `base + offset`, wrapping at 32 bits.
    pub fn effective_address(base: i32, offset: i32) -> i32 {
        Self::execute(AluOp::Add, base, offset)
    }
}
