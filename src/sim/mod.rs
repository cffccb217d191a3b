//! Simulation harness: program loading and final-state reporting.

/// Program file loader and source normalization.
pub mod loader;

/// Final-state report rendering.
pub mod report;
