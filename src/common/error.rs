//! Error and Diagnostic Types.
//!
//! Fatal conditions abort a run and are reported through [`SimError`].
//! Non-fatal conditions are reported through [`Diagnostic`]: the engine logs
//! them, records them, and keeps simulating.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons an operand list fails to decode for a recognized opcode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The opcode received the wrong number of operands.
    #[error("expected {expected} operand(s), found {found}")]
    OperandCount {
        /// Operand count(s) the opcode accepts, e.g. `"3"` or `"1 or 2"`.
        expected: &'static str,
        /// Operand count found on the line.
        found: usize,
    },

    /// A register operand is not `xN`, `N`, or an ABI name.
    #[error("invalid register '{0}'")]
    InvalidRegister(String),

    /// A register operand names an index outside `[0, 32)`.
    #[error("register index {0} out of range")]
    RegisterOutOfRange(u32),

    /// An immediate or offset operand is not a 32-bit integer.
    #[error("invalid immediate '{0}'")]
    InvalidImmediate(String),

    /// A base+offset operand such as `4(x2)` is malformed.
    #[error("invalid memory operand '{0}'")]
    InvalidMemoryOperand(String),
}

/// Fatal simulator errors.
#[derive(Debug, Error)]
pub enum SimError {
    /// An otherwise recognized instruction carries malformed operands.
    #[error("malformed operand at instruction {index} ('{line}', opcode {opcode}): {reason}")]
    MalformedOperand {
        /// Index of the offending instruction in the program.
        index: usize,
        /// Normalized source text of the instruction.
        line: String,
        /// Case-folded opcode mnemonic.
        opcode: String,
        /// Underlying decode failure.
        #[source]
        reason: DecodeError,
    },

    /// A file could not be read.
    #[error("could not read '{}': {source}", .path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A configuration file is not valid TOML for [`crate::config::Config`].
    #[error("could not parse config '{}': {source}", .path.display())]
    Config {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}

/// Non-fatal conditions raised while executing a program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// The opcode is not in the supported set. No state changes.
    #[error("unknown instruction at {index}: {text}")]
    UnknownInstruction {
        /// Index of the instruction.
        index: usize,
        /// Normalized source text.
        text: String,
    },

    /// A control transfer named a label absent from the label table.
    #[error("label '{label}' not found (instruction {index})")]
    LabelNotFound {
        /// Index of the branching instruction.
        index: usize,
        /// Name that failed to resolve.
        label: String,
    },
}

impl Diagnostic {
    /// Index of the instruction that raised the diagnostic.
    pub fn index(&self) -> usize {
        match self {
            Diagnostic::UnknownInstruction { index, .. } => *index,
            Diagnostic::LabelNotFound { index, .. } => *index,
        }
    }
}
