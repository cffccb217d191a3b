//! RISC-V RV32I Subset Interpreter Library.
//!
//! This crate loads a textual RISC-V assembly program, resolves its labels,
//! and executes it one instruction at a time against a 32-entry register
//! file and a sparse word-addressable memory while counting instructions,
//! cycles, and memory accesses.
//!
//! # Supported Instructions
//!
//! `add addi sub li lw sw beq jal j`, matched case-insensitively. Any other
//! opcode is reported and skipped.
//!
//! # Modules
//!
//! * `common`: Error and diagnostic types.
//! * `config`: Configuration loading and parsing.
//! * `core`: Register file, memory, ALU, and the execution engine.
//! * `isa`: Instruction definitions, decoder, and label table.
//! * `sim`: Program loader and final-state report.
//! * `stats`: Performance statistics collection.

/// Shared error and diagnostic types.
pub mod common;

/// Configuration for tracing, step limits, and reporting.
///
/// Loads and parses TOML configuration files; every field has a default.
pub mod config;

/// Interpreter core: architectural state and the fetch-decode-execute loop.
pub mod core;

/// Instruction set definitions, textual decoding, and label resolution.
pub mod isa;

/// Program loading and reporting.
pub mod sim;

/// Performance statistics collection and reporting.
///
/// Tracks instruction, cycle, and memory-access counts during execution.
pub mod stats;
