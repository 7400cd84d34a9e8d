//! Main Execution Loop.
//!
//! This module implements the per-cycle commit of the CPU. It performs the following:
//! 1. **Pipeline Step:** Computes the next snapshot from the current one.
//! 2. **Fault Policy:** Halts on a fault, or squashes the faulting instruction.
//! 3. **Commit:** Applies the register-file and data-memory writes, then
//!    installs the new snapshot.
//! 4. **Observability:** Emits per-stage trace lines and hazard events.

use tracing::{debug, error, trace, warn};

use super::Cpu;
use crate::common::error::Fault;
use crate::config::FaultPolicy;
use crate::core::pipeline::engine::{self, CycleOutputs, PipelineState};
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::disasm::disassemble;
use crate::soc::traits::{DataMemory, InstructionMemory};

impl<I, D> Cpu<I, D>
where
    I: InstructionMemory,
    D: DataMemory,
{
    /// Advances the core by one clock cycle.
    ///
    /// # Returns
    ///
    /// The externally visible signals of the cycle: the data-memory port,
    /// the register write port and the hazard lines.
    ///
    /// # Errors
    ///
    /// Under [`FaultPolicy::Halt`], returns the fault of the instruction in
    /// Execute. Nothing is committed in that cycle and every later call
    /// returns the same fault until [`Cpu::reset`].
    pub fn tick(&mut self) -> Result<CycleOutputs, Fault> {
        if let Some(fault) = self.halted {
            return Err(fault);
        }

        let (next, out) = match engine::step(&self.state, &self.regs, &self.imem, &self.dmem) {
            Ok(stepped) => stepped,
            Err(fault) => self.handle_fault(fault)?,
        };

        if self.trace {
            trace_cycle(&self.state, &out);
        }

        let load_in_memory = self.state.ex_mem.ctrl.is_load();
        let wr = out.reg_write;
        self.regs.write_port(wr.enable, wr.rd, wr.value);
        if out.mem.write_enable {
            self.dmem.write(out.mem.addr, out.mem.write_data);
        }
        self.stats.record(&out, load_in_memory);
        self.state = next;
        Ok(out)
    }

    /// Applies the fault policy to a fault raised in Execute.
    ///
    /// Under `Nop`, the faulting instruction is replaced with a bubble and the
    /// cycle is recomputed. A bubble cannot fault, so the retry always succeeds.
    fn handle_fault(&mut self, fault: Fault) -> Result<(PipelineState, CycleOutputs), Fault> {
        match self.fault_policy {
            FaultPolicy::Halt => {
                error!(
                    pc = format_args!("{:#010x}", fault.pc()),
                    inst = format_args!("{:#010x}", fault.inst()),
                    "{fault}"
                );
                self.halted = Some(fault);
                Err(fault)
            }
            FaultPolicy::Nop => {
                warn!(
                    pc = format_args!("{:#010x}", fault.pc()),
                    inst = format_args!("{:#010x}", fault.inst()),
                    "{fault}; squashed"
                );
                self.stats.faults += 1;
                self.state.id_ex.flush();
                engine::step(&self.state, &self.regs, &self.imem, &self.dmem)
            }
        }
    }
}

/// Emits one `debug!` line per occupied stage, and `trace!` events for the
/// hazard and forwarding decisions of the cycle.
fn trace_cycle(state: &PipelineState, out: &CycleOutputs) {
    debug!(
        stage = "IF",
        pc = format_args!("{:#010x}", state.pc),
        "fetch"
    );
    if !state.if_id.is_bubble() {
        debug!(
            stage = "ID",
            pc = format_args!("{:#010x}", state.if_id.pc),
            inst = format_args!("{:#010x}", state.if_id.inst),
            "{}",
            disassemble(state.if_id.inst)
        );
    }
    if !state.id_ex.is_bubble() {
        debug!(
            stage = "EX",
            pc = format_args!("{:#010x}", state.id_ex.pc),
            inst = format_args!("{:#010x}", state.id_ex.inst),
            "{}",
            disassemble(state.id_ex.inst)
        );
    }
    if !state.ex_mem.is_bubble() {
        debug!(
            stage = "MEM",
            pc = format_args!("{:#010x}", state.ex_mem.pc),
            addr = format_args!("{:#010x}", out.mem.addr),
            we = out.mem.write_enable,
            "{}",
            disassemble(state.ex_mem.inst)
        );
    }
    if !state.mem_wb.is_bubble() {
        debug!(
            stage = "WB",
            pc = format_args!("{:#010x}", state.mem_wb.pc),
            rd = out.reg_write.rd,
            value = format_args!("{:#010x}", out.reg_write.value),
            "{}",
            disassemble(state.mem_wb.inst)
        );
    }

    trace!(
        fwd_a = ?out.forwarding.a,
        fwd_b = ?out.forwarding.b,
        stall_f = out.hazards.stall_f,
        stall_d = out.hazards.stall_d,
        flush_d = out.hazards.flush_d,
        flush_e = out.hazards.flush_e,
        "hazards"
    );
}
