//! RISC-V Interpreter CLI.
//!
//! Loads a textual program, runs it to completion (or to a step limit),
//! and prints the final register file, memory, and performance counters.
//!
//! # Usage
//!
//! ```text
//! riscv-interp <PROGRAM> [--config <FILE>] [--max-steps <N>] [--trace] [--json]
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::process;

use riscv_interpreter::common::SimError;
use riscv_interpreter::config::{Config, ReportFormat};
use riscv_interpreter::core::{Cpu, RunOutcome};
use riscv_interpreter::sim::loader;
use riscv_interpreter::sim::report::FinalState;

/// Command-line arguments for the interpreter.
#[derive(Parser, Debug)]
#[command(author, version, about = "RISC-V RV32I Subset Interpreter")]
struct Args {
    /// Program file (plain lines or `name = [ "...", ... ]`).
    program: PathBuf,

    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many steps.
    #[arg(long)]
    max_steps: Option<u64>,

    /// Print each instruction as it executes.
    #[arg(long)]
    trace: bool,

    /// Print the final state as JSON.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("\n[!] FATAL: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), SimError> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if args.trace {
        config.general.trace_instructions = true;
    }
    if args.max_steps.is_some() {
        config.general.max_steps = args.max_steps;
    }
    if args.json {
        config.report.format = ReportFormat::Json;
    }

    let program = loader::load_program(&args.program)?;
    let mut cpu = Cpu::new(program, &config);

    match config.general.max_steps {
        Some(limit) => {
            if let RunOutcome::StepLimit { steps } = cpu.run_for(limit) {
                eprintln!("[!] Step limit reached after {} steps; pc = {}", steps, cpu.pc());
            }
        }
        None => {
            cpu.run();
        }
    }

    let state = FinalState::capture(&cpu);
    match config.report.format {
        ReportFormat::Text => {
            print!("{}", state.render_text(&config.report));
            if config.report.breakdown {
                cpu.stats.print();
            }
        }
        ReportFormat::Json => match state.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("[!] Could not serialize report: {}", e);
                process::exit(1);
            }
        },
    }
    Ok(())
}
