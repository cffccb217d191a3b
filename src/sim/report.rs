//! Final-state report.
//!
//! Captures registers, populated memory, and the headline counters after a
//! run and renders them as text or JSON.

use crate::config::ReportConfig;
use crate::core::Cpu;
use crate::stats::Metrics;
use serde::Serialize;
use std::fmt::Write;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MemoryEntry {
    pub address: i32,
    pub value: i32,
}

/// Snapshot of everything the report shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FinalState {
    pub pc: usize,
    pub halted: bool,
    pub registers: Vec<i32>,
    pub memory: Vec<MemoryEntry>,
    pub metrics: Metrics,
    pub diagnostics: Vec<String>,
}

impl FinalState {
    /// Copies the final registers, memory, counters, and diagnostics out of
    /// `cpu`. Diagnostics are stored as their display text.
    pub fn capture(cpu: &Cpu) -> Self {
        Self {
            pc: cpu.pc(),
            halted: cpu.is_halted(),
            registers: cpu.registers().to_vec(),
            memory: cpu
                .memory()
                .into_iter()
                .map(|(address, value)| MemoryEntry { address, value })
                .collect(),
            metrics: cpu.metrics(),
            diagnostics: cpu.diagnostics().iter().map(ToString::to_string).collect(),
        }
    }

    /// Renders the sections enabled in `cfg` as plain text.
    pub fn render_text(&self, cfg: &ReportConfig) -> String {
        let mut out = String::new();
        if cfg.registers {
            let _ = writeln!(out, "\n--- Register State ---");
            for (i, val) in self.registers.iter().enumerate() {
                let _ = writeln!(out, "x{}: {}", i, val);
            }
        }
        if cfg.memory {
            let _ = writeln!(out, "\n--- Memory State ---");
            for entry in &self.memory {
                let _ = writeln!(out, "{}: {}", entry.address, entry.value);
            }
        }
        if cfg.stats {
            let _ = writeln!(out, "\n--- Performance Metrics ---");
            let _ = writeln!(
                out,
                "Total Instructions Executed: {}",
                self.metrics.instruction_count
            );
            let _ = writeln!(out, "Total Cycles: {}", self.metrics.cycle_count);
            let _ = writeln!(
                out,
                "Memory Accesses (LW/SW): {}",
                self.metrics.memory_accesses
            );
        }
        out
    }

    /// Serializes the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
