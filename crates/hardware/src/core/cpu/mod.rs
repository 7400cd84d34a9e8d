//! CPU Core Definition and Initialization.
//!
//! This module defines the `Cpu` structure, the top-level wiring of the core.
//! It coordinates the following:
//! 1. **State Management:** Holds the pipeline snapshot and the register file.
//! 2. **Memory Ports:** Owns the instruction and data memory services.
//! 3. **Fault Handling:** Applies the configured fault policy.
//! 4. **Counters:** Accumulates the performance statistics.

/// Per-cycle commit and tracing.
pub mod execution;

use crate::common::error::Fault;
use crate::config::{Config, FaultPolicy};
use crate::core::arch::gpr::Gpr;
use crate::core::pipeline::engine::PipelineState;
use crate::core::pipeline::traits::PipelineLatch;
use crate::soc::memory::WordMemory;
use crate::soc::traits::{DataMemory, InstructionMemory};
use crate::stats::SimStats;

/// Pipelined processor core with its memories attached.
///
/// Generic over the memory services so tests can attach instrumented
/// memories; the simulator uses [`WordMemory`] for both.
#[derive(Debug)]
pub struct Cpu<I = WordMemory, D = WordMemory>
where
    I: InstructionMemory,
    D: DataMemory,
{
    /// Pipeline registers and program counter.
    pub(crate) state: PipelineState,
    /// General-purpose register file.
    pub(crate) regs: Gpr,
    /// Instruction memory service.
    pub(crate) imem: I,
    /// Data memory service.
    pub(crate) dmem: D,
    /// Performance statistics.
    pub stats: SimStats,
    /// Enable per-stage tracing.
    pub trace: bool,
    /// Fault policy for instructions that reach Execute with a decode fault.
    pub fault_policy: FaultPolicy,
    /// Fault that halted the core, if any.
    pub(crate) halted: Option<Fault>,
}

impl<I, D> Cpu<I, D>
where
    I: InstructionMemory,
    D: DataMemory,
{
    /// Creates a CPU in the reset state over the given memories.
    ///
    /// # Arguments
    ///
    /// * `imem` - Instruction memory, with the program loaded at address 0.
    /// * `dmem` - Data memory.
    /// * `config` - The simulator configuration parameters.
    pub fn new(imem: I, dmem: D, config: &Config) -> Self {
        Self {
            state: PipelineState::reset(),
            regs: Gpr::new(),
            imem,
            dmem,
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
            fault_policy: config.general.fault_policy,
            halted: None,
        }
    }

    /// Returns the core to its reset state.
    ///
    /// The PC, every pipeline latch, the register file and the counters are
    /// cleared. Memory contents are left alone.
    pub fn reset(&mut self) {
        self.state = PipelineState::reset();
        self.regs = Gpr::new();
        self.stats = SimStats::default();
        self.halted = None;
    }

    /// Current program counter (address being fetched).
    pub const fn pc(&self) -> u32 {
        self.state.pc
    }

    /// Current pipeline snapshot.
    pub const fn state(&self) -> &PipelineState {
        &self.state
    }

    /// Register file.
    pub const fn regs(&self) -> &Gpr {
        &self.regs
    }

    /// Mutable register file, for seeding test state.
    pub fn regs_mut(&mut self) -> &mut Gpr {
        &mut self.regs
    }

    /// Instruction memory service.
    pub const fn imem(&self) -> &I {
        &self.imem
    }

    /// Data memory service.
    pub const fn dmem(&self) -> &D {
        &self.dmem
    }

    /// Mutable data memory service.
    pub fn dmem_mut(&mut self) -> &mut D {
        &mut self.dmem
    }

    /// The fault that halted the core, if it is halted.
    pub const fn halted(&self) -> Option<Fault> {
        self.halted
    }

    /// Whether every pipeline latch holds a bubble.
    pub fn is_drained(&self) -> bool {
        self.state.if_id.is_bubble()
            && self.state.id_ex.is_bubble()
            && self.state.ex_mem.is_bubble()
            && self.state.mem_wb.is_bubble()
    }

    /// Whether the core has run off the end of its program.
    ///
    /// True once the pipeline is drained and Fetch is at or past `image_end`,
    /// the byte address just after the loaded image. Everything from there on
    /// is the all-zero word, so no further cycle can have a side effect. Zero
    /// words inside the image do not count: code after them still runs.
    pub fn is_idle(&self, image_end: u32) -> bool {
        self.is_drained() && self.state.pc >= image_end
    }
}
