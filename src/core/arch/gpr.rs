//! General-Purpose Register File.
//!
//! Implements the 32 integer registers (x0-x31). Unlike the hardware ISA,
//! x0 is an ordinary storage slot here: writes to it stick and reads
//! return the stored value.

use crate::common::NUM_REGS;

/// General-purpose register file holding 32-bit two's-complement values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [i32; NUM_REGS],
}

impl Gpr {
    /// Creates a register file with every register set to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). The decoder guarantees the range.
    pub fn read(&self, idx: usize) -> i32 {
        self.regs[idx]
    }

    /// Writes a register. Register 0 is writable.
    pub fn write(&mut self, idx: usize, val: i32) {
        self.regs[idx] = val;
    }

    /// Copy of all 32 registers in index order.
    pub fn snapshot(&self) -> [i32; NUM_REGS] {
        self.regs
    }
}
