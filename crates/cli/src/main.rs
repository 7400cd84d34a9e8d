//! Pipeline simulator CLI.
//!
//! This binary is a thin harness over `rvpipe-core`. It performs:
//! 1. **Image loading:** Reads a hex or binary program image into instruction memory.
//! 2. **Run control:** Runs until the program drains, a fault halts the core,
//!    or an expected store is observed.
//! 3. **Reporting:** Prints statistics and, optionally, the register file.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rvpipe_core::config::Config;
use rvpipe_core::sim::loader;
use rvpipe_core::sim::{RunOutcome, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "rvpipe",
    author,
    version,
    about = "Cycle-accurate five-stage pipeline simulator",
    long_about = "Run a program image on the five-stage pipeline model.\n\nExamples:\n  rvpipe run -f program.hex\n  rvpipe run -f program.hex --expect-store 100=25\n  rvpipe run -f program.bin --config sim.json --trace --regs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program image.
    Run {
        /// Program image (`.bin` for raw little-endian words, otherwise hex text).
        #[arg(short, long)]
        file: PathBuf,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override `general.max_cycles`.
        #[arg(long)]
        max_cycles: Option<u64>,

        /// Emit per-stage trace lines.
        #[arg(long)]
        trace: bool,

        /// Stop at the first store of VALUE to ADDR (e.g. `100=25` or `0x64=0x19`).
        #[arg(long, value_parser = parse_store)]
        expect_store: Option<(u32, u32)>,

        /// Dump the register file after the run.
        #[arg(long)]
        regs: bool,
    },
}

/// Parses a decimal or `0x`-prefixed hex number.
fn parse_num(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse::<u32>(),
    };
    parsed.map_err(|e| format!("invalid number '{s}': {e}"))
}

/// Parses an `ADDR=VALUE` pair.
fn parse_store(s: &str) -> Result<(u32, u32), String> {
    let (addr, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ADDR=VALUE, got '{s}'"))?;
    Ok((parse_num(addr)?, parse_num(value)?))
}

fn init_logging(trace: bool) {
    let default = if trace { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            config,
            max_cycles,
            trace,
            expect_store,
            regs,
        } => {
            init_logging(trace);
            let code = cmd_run(&file, config, max_cycles, trace, expect_store, regs);
            process::exit(code);
        }
    }
}

fn cmd_run(
    file: &Path,
    config_path: Option<PathBuf>,
    max_cycles: Option<u64>,
    trace: bool,
    expect_store: Option<(u32, u32)>,
    dump_regs: bool,
) -> i32 {
    let mut config = match config_path {
        Some(path) => match Config::from_file(&path) {
            Ok(c) => c,
            Err(e) => {
                error!(path = %path.display(), "{e}");
                return 1;
            }
        },
        None => Config::default(),
    };
    if let Some(n) = max_cycles {
        config.general.max_cycles = n;
    }
    config.general.trace_instructions |= trace;

    let program = match loader::load_image(file) {
        Ok(words) => words,
        Err(e) => {
            error!(path = %file.display(), "{e}");
            return 1;
        }
    };

    let mut sim = match Simulator::new(&config, &program) {
        Ok(sim) => sim,
        Err(e) => {
            error!("{e}");
            return 1;
        }
    };

    info!(path = %file.display(), words = program.len(), "running");

    let outcome = match expect_store {
        Some((addr, value)) => sim.run_until(|out| {
            out.mem.write_enable && out.mem.addr == addr && out.mem.write_data == value
        }),
        None => sim.run_to_completion(),
    };

    let code = match (outcome, expect_store) {
        (RunOutcome::Matched { cycle }, Some((addr, value))) => {
            println!("[*] Store {value:#x} -> {addr:#x} observed at cycle {cycle}");
            0
        }
        (RunOutcome::Drained { cycle }, None) => {
            println!("[*] Program drained after {cycle} cycles");
            0
        }
        (RunOutcome::Faulted(fault), _) => {
            eprintln!("\n[!] FATAL: {fault}");
            1
        }
        (RunOutcome::CycleLimit, Some((addr, value))) => {
            eprintln!(
                "\n[!] Store {value:#x} -> {addr:#x} not observed within {} cycles",
                sim.max_cycles()
            );
            1
        }
        (RunOutcome::CycleLimit, None) => {
            eprintln!("\n[!] Cycle limit of {} reached", sim.max_cycles());
            1
        }
        (_, _) => 1,
    };

    sim.cpu.stats.print();
    if dump_regs {
        sim.cpu.regs().dump();
    }
    code
}
