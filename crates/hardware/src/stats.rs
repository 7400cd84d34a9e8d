//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the pipeline simulator. It provides:
//! 1. **Architectural Counters:** Cycle count and retired-instruction count,
//!    with the exact strobe definitions of the core.
//! 2. **Hazard Breakdown:** Load-use stall cycles, control-hazard flushes and
//!    forwarding activity.
//! 3. **Memory Traffic:** Loads, stores and fault counts.

use std::time::Instant;

use crate::core::pipeline::engine::CycleOutputs;
use crate::core::pipeline::forwarding::ForwardSel;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total cycles elapsed since reset (incremented every cycle).
    pub cycles: u64,
    /// Retirement strobe count.
    ///
    /// Incremented when Writeback writes a register, Memory writes data
    /// memory, or Execute redirects the PC. A `jal` that links counts twice.
    pub instructions_retired: u64,

    /// Cycles in which a load-use hazard stalled Fetch and Decode.
    pub stalls_data: u64,
    /// Taken branches and jumps (each discards two fetched instructions).
    pub flushes_control: u64,
    /// Operands forwarded from the Memory stage.
    pub forwards_mem: u64,
    /// Operands forwarded from the Writeback stage.
    pub forwards_wb: u64,
    /// Loads that passed through the Memory stage.
    pub loads: u64,
    /// Stores committed to data memory.
    pub stores: u64,
    /// Faulted instructions squashed under the `Nop` policy.
    pub faults: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            stalls_data: 0,
            flushes_control: 0,
            forwards_mem: 0,
            forwards_wb: 0,
            loads: 0,
            stores: 0,
            faults: 0,
        }
    }
}

impl SimStats {
    /// Folds one committed cycle into the counters.
    ///
    /// # Arguments
    ///
    /// * `out` - The signals of the cycle that just committed.
    /// * `load_in_memory` - Whether the Memory stage held a load this cycle.
    pub fn record(&mut self, out: &CycleOutputs, load_in_memory: bool) {
        self.cycles += 1;
        if out.retired {
            self.instructions_retired += 1;
        }
        if out.hazards.stall_f {
            self.stalls_data += 1;
        }
        if out.pc_src {
            self.flushes_control += 1;
        }
        for sel in [out.forwarding.a, out.forwarding.b] {
            match sel {
                ForwardSel::Memory => self.forwards_mem += 1,
                ForwardSel::Writeback => self.forwards_wb += 1,
                ForwardSel::RegFile => {}
            }
        }
        if load_in_memory {
            self.loads += 1;
        }
        if out.mem.write_enable {
            self.stores += 1;
        }
    }

    /// Retired instructions per cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_retired as f64 / self.cycles as f64
        }
    }

    /// Cycles per retired instruction.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1) as f64;
        let khz = if seconds > 0.0 {
            (self.cycles as f64 / seconds) / 1000.0
        } else {
            0.0
        };

        println!("\n==========================================================");
        println!("PIPELINE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {:.4} s", seconds);
        println!("sim_cycles               {}", self.cycles);
        println!("sim_freq                 {:.2} kHz", khz);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_ipc                  {:.4}", self.ipc());
        println!("sim_cpi                  {:.4}", self.cpi());
        println!("----------------------------------------------------------");
        println!("HAZARD BREAKDOWN");
        println!(
            "  stalls.data            {} ({:.2}%)",
            self.stalls_data,
            (self.stalls_data as f64 / cyc) * 100.0
        );
        println!(
            "  flushes.control        {} ({:.2}%)",
            self.flushes_control,
            (self.flushes_control as f64 / cyc) * 100.0
        );
        println!("  forwards.mem           {}", self.forwards_mem);
        println!("  forwards.wb            {}", self.forwards_wb);
        println!("----------------------------------------------------------");
        println!("MEMORY");
        println!("  op.load                {}", self.loads);
        println!("  op.store               {}", self.stores);
        println!("  faults                 {}", self.faults);
        println!("==========================================================");
    }
}
