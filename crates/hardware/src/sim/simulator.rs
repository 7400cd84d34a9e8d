//! Simulator: a CPU over two word memories, plus run control.
//!
//! The simulator owns the core and drives it cycle by cycle. It provides:
//! 1. **Construction:** Builds instruction and data memory from the config
//!    and loads the program image at address 0.
//! 2. **Run Control:** Fixed-length runs, runs until a cycle predicate holds,
//!    and runs until the program has drained.

use tracing::info;

use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::error::{Fault, SimError};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::pipeline::engine::CycleOutputs;
use crate::soc::memory::WordMemory;

/// How a bounded run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The predicate held on the outputs of the given cycle (0-based).
    Matched {
        /// Cycle index at which the predicate first held.
        cycle: u64,
    },
    /// The pipeline drained past the end of the program at the given cycle.
    Drained {
        /// Cycle count when the core went idle.
        cycle: u64,
    },
    /// `max_cycles` elapsed first.
    CycleLimit,
    /// The core halted on a fault.
    Faulted(Fault),
}

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator {
    /// The core with its memories.
    pub cpu: Cpu<WordMemory, WordMemory>,
    max_cycles: u64,
    image_end: u32,
}

impl Simulator {
    /// Creates a simulator with `program` loaded into instruction memory.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ImageTooLarge`] if the program does not fit in
    /// `config.memory.imem_words`.
    pub fn new(config: &Config, program: &[u32]) -> Result<Self, SimError> {
        let imem = WordMemory::from_words(config.memory.imem_words, program)?;
        let dmem = WordMemory::new(config.memory.dmem_words);
        info!(
            program_words = program.len(),
            imem_words = config.memory.imem_words,
            dmem_words = config.memory.dmem_words,
            "simulator initialized"
        );
        let image_end = u32::try_from(program.len())
            .map_or(u32::MAX, |words| words.saturating_mul(INSTRUCTION_SIZE));
        Ok(Self {
            cpu: Cpu::new(imem, dmem, config),
            max_cycles: config.general.max_cycles,
            image_end,
        })
    }

    /// Cycle limit applied by [`Simulator::run_until`] and [`Simulator::run_to_completion`].
    pub const fn max_cycles(&self) -> u64 {
        self.max_cycles
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// # Errors
    ///
    /// Returns the fault that halted the core.
    pub fn tick(&mut self) -> Result<CycleOutputs, Fault> {
        self.cpu.tick()
    }

    /// Runs exactly `cycles` cycles, stopping early on a fault.
    ///
    /// # Errors
    ///
    /// Returns the fault that halted the core.
    pub fn run(&mut self, cycles: u64) -> Result<(), Fault> {
        for _ in 0..cycles {
            let _ = self.tick()?;
        }
        Ok(())
    }

    /// Runs until `pred` holds for a cycle's outputs, or `max_cycles` elapse.
    ///
    /// The predicate sees each cycle's outputs as that cycle commits.
    pub fn run_until<F>(&mut self, mut pred: F) -> RunOutcome
    where
        F: FnMut(&CycleOutputs) -> bool,
    {
        for _ in 0..self.max_cycles {
            let cycle = self.cpu.stats.cycles;
            match self.tick() {
                Ok(out) if pred(&out) => {
                    info!(cycle, "run condition met");
                    return RunOutcome::Matched { cycle };
                }
                Ok(_) => {}
                Err(fault) => return RunOutcome::Faulted(fault),
            }
        }
        info!(max_cycles = self.max_cycles, "cycle limit reached");
        RunOutcome::CycleLimit
    }

    /// Byte address just past the loaded program image.
    pub const fn image_end(&self) -> u32 {
        self.image_end
    }

    /// Runs until the program drains (see [`Cpu::is_idle`]) or `max_cycles` elapse.
    pub fn run_to_completion(&mut self) -> RunOutcome {
        for _ in 0..self.max_cycles {
            if self.cpu.is_idle(self.image_end) {
                let cycle = self.cpu.stats.cycles;
                info!(cycle, "program drained");
                return RunOutcome::Drained { cycle };
            }
            if let Err(fault) = self.tick() {
                return RunOutcome::Faulted(fault);
            }
        }
        info!(max_cycles = self.max_cycles, "cycle limit reached");
        RunOutcome::CycleLimit
    }
}
