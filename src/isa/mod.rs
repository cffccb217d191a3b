//! Instruction set definitions.
//!
//! Covers the supported RV32I subset (`add addi sub li lw sw beq jal j`),
//! its textual decoder, and label resolution tables.

/// ABI register names.
pub mod abi;

/// Line-to-instruction decoder.
pub mod decoder;

/// Decoded instruction enum.
pub mod instruction;

/// Label table.
pub mod labels;

/// Decoded program image.
pub mod program;

pub use instruction::{Instruction, Target};
pub use labels::LabelTable;
pub use program::Program;
