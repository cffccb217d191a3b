//! Simulation statistics collection and reporting.
//!
//! Tracks the three headline counters (instructions, cycles, memory
//! accesses) plus an instruction-mix breakdown and host execution time.

use serde::Serialize;
use std::time::Instant;

/// Read-only copy of the headline counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Metrics {
    /// Recognized instructions executed.
    pub instruction_count: u64,
    /// Cycles elapsed; one per non-label instruction processed.
    pub cycle_count: u64,
    /// Loads plus stores.
    pub memory_accesses: u64,
}

/// Simulation statistics tracking all performance counters.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    pub instructions: u64,
    pub cycles: u64,
    pub memory_accesses: u64,

    pub inst_alu: u64,
    pub inst_load: u64,
    pub inst_store: u64,
    pub inst_branch: u64,
    pub inst_jump: u64,
    pub inst_unknown: u64,

    pub branches_taken: u64,
}

impl Default for SimStats {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions: 0,
            cycles: 0,
            memory_accesses: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
            inst_unknown: 0,
            branches_taken: 0,
        }
    }
}

impl SimStats {
    /// Copy of the three headline counters.
    pub fn snapshot(&self) -> Metrics {
        Metrics {
            instruction_count: self.instructions,
            cycle_count: self.cycles,
            memory_accesses: self.memory_accesses,
        }
    }

    /// Prints a formatted summary of all simulation statistics.
    ///
    /// Displays the headline counters, CPI, and the instruction mix.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = if self.instructions == 0 {
            1
        } else {
            self.instructions
        };
        let cpi = self.cycles as f64 / instr as f64;

        println!("\n==========================================================");
        println!("PERFORMANCE METRICS");
        println!("==========================================================");
        println!("host_seconds             {:.4} s", seconds);
        println!("sim_insts                {}", self.instructions);
        println!("sim_cycles               {}", self.cycles);
        println!("sim_mem_accesses         {}", self.memory_accesses);
        println!("sim_cpi                  {:.4}", cpi);
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        let total = instr as f64;
        let row = |name: &str, count: u64| {
            println!(
                "  {:<22} {} ({:.2}%)",
                name,
                count,
                (count as f64 / total) * 100.0
            );
        };
        row("op.alu", self.inst_alu);
        row("op.load", self.inst_load);
        row("op.store", self.inst_store);
        row("op.branch", self.inst_branch);
        row("op.jump", self.inst_jump);
        println!("  op.unknown             {}", self.inst_unknown);
        println!("  branches.taken         {}", self.branches_taken);
        println!("==========================================================");
    }
}
