//! Architectural state.
//!
//! The register file visible to programs. Memory lives in
//! [`crate::core::memory`].

/// General-Purpose Register file implementation.
pub mod gpr;
