//! Common types used throughout the interpreter.
//!
//! This module provides the error and diagnostic types shared by the
//! decoder, the loader, and the execution engine.

/// Error types and non-fatal diagnostics.
pub mod error;

pub use error::{DecodeError, Diagnostic, SimError};

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 32;
