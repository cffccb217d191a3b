//! Fetch-decode-execute engine.
//!
//! [`Cpu`] owns the program counter, the register file, data memory, and
//! the statistics counters. The program counter is an index into the
//! instruction sequence, not a byte address. Execution halts once it
//! reaches or passes the end of the program; there is no halt
//! instruction and no timeout, so a program that jumps to itself runs
//! until stopped externally (or until [`Cpu::run_for`] gives up).

mod execute;
mod memory;

use super::arch::gpr::Gpr;
use super::memory::Memory;
use crate::common::{Diagnostic, SimError, NUM_REGS};
use crate::config::Config;
use crate::isa::Program;
use crate::stats::{Metrics, SimStats};
use std::rc::Rc;

/// What a single call to [`Cpu::step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// A non-label instruction was processed (including unknown opcodes).
    Retired,
    /// A label definition was skipped.
    Label,
    /// The program counter is outside the program; nothing ran.
    Halted,
}

/// How a bounded run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The program counter left the program after `steps` steps.
    Halted { steps: u64 },
    /// The step limit was reached while still running.
    StepLimit { steps: u64 },
}

/// Interpreter state: architectural registers, data memory, counters, and
/// the program being executed.
///
/// The program is shared behind an [`Rc`] so a step can borrow the current
/// instruction while the semantics mutate the rest of the state.
pub struct Cpu {
    pub regs: Gpr,
    pub mem: Memory,
    pub stats: SimStats,
    pub trace: bool,
    pc: usize,
    program: Rc<Program>,
    diagnostics: Vec<Diagnostic>,
}

impl Cpu {
    /// Creates a CPU positioned at instruction 0 with zeroed registers,
    /// empty memory, and tracing taken from `config`.
    pub fn new(program: Program, config: &Config) -> Self {
        Self {
            regs: Gpr::new(),
            mem: Memory::new(),
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
            pc: 0,
            program: Rc::new(program),
            diagnostics: Vec::new(),
        }
    }

    /// Decodes `lines` and builds a CPU with the default configuration.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, SimError> {
        Ok(Self::new(Program::from_lines(lines)?, &Config::default()))
    }

    /// Executes one slot of the program.
    ///
    /// Label definitions advance the program counter and touch no counter.
    /// Every other slot costs exactly one cycle. The program counter moves
    /// to the next index before dispatch, so a taken branch or jump simply
    /// overwrites it and never gets an extra increment.
    pub fn step(&mut self) -> Step {
        let index = self.pc;
        let program = Rc::clone(&self.program);
        let Some(inst) = program.get(index) else {
            return Step::Halted;
        };

        if inst.is_label() {
            self.pc = index + 1;
            return Step::Label;
        }

        if self.trace {
            self.print_trace(index);
        }
        log::trace!("[{}] {}", index, inst);

        self.pc = index + 1;
        self.stats.cycles += 1;
        self.execute(index, inst);
        Step::Retired
    }

    /// Runs until the program counter leaves the program.
    ///
    /// Never returns for a program that loops forever.
    pub fn run(&mut self) -> u64 {
        let mut steps = 0;
        while self.step() != Step::Halted {
            steps += 1;
        }
        log::debug!(
            "halted after {} step(s), {} memory word(s) populated",
            steps,
            self.mem.len()
        );
        steps
    }

    /// Runs at most `limit` steps.
    pub fn run_for(&mut self, limit: u64) -> RunOutcome {
        let mut steps = 0;
        while steps < limit {
            if self.step() == Step::Halted {
                return RunOutcome::Halted { steps };
            }
            steps += 1;
        }
        if self.is_halted() {
            RunOutcome::Halted { steps }
        } else {
            RunOutcome::StepLimit { steps }
        }
    }

    /// Current program counter (instruction index).
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Whether the program counter has left the program.
    pub fn is_halted(&self) -> bool {
        self.pc >= self.program.len()
    }

    /// The loaded program.
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// All 32 registers in index order.
    pub fn registers(&self) -> [i32; NUM_REGS] {
        self.regs.snapshot()
    }

    /// Populated memory words in address order.
    pub fn memory(&self) -> Vec<(i32, i32)> {
        self.mem.snapshot()
    }

    /// Headline counters at this point of execution.
    pub fn metrics(&self) -> Metrics {
        self.stats.snapshot()
    }

    /// Non-fatal conditions raised so far, oldest first.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    fn print_trace(&self, index: usize) {
        println!(
            "[{:>4}] {}",
            index,
            self.program.source(index).unwrap_or_default()
        );
    }

    fn report(&mut self, diag: Diagnostic) {
        log::warn!("{}", diag);
        self.diagnostics.push(diag);
    }
}
