//! Test module organization.
//!
//! This module organizes all integration tests for the interpreter.

/// ALU and arithmetic instruction tests.
mod alu_tests;

/// Register file and memory tests.
mod arch_tests;





/// Non-terminating programs, stress, and property tests.
mod stress_tests;
