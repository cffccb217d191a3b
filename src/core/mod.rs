//! Interpreter core.
//!
//! Architectural state (registers, memory), the ALU, and the
//! fetch-decode-execute engine.

/// Register file.
pub mod arch;

/// Execution engine.
pub mod cpu;

/// Sparse data memory.
pub mod memory;

/// Execution units.
pub mod units;

pub use cpu::{Cpu, RunOutcome, Step};
