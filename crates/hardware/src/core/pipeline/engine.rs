//! Synchronous pipeline step.
//!
//! This module advances all five stages by one clock edge. It performs:
//! 1. **Sample:** Every stage computes its next output from the *current*
//!    snapshot. No stage observes another stage's same-cycle result except
//!    through the forwarding and Writeback bypass paths.
//! 2. **Hazard Resolution:** Load-use and control hazards pick, per latch,
//!    between loading, holding and flushing.
//! 3. **Commit:** The new snapshot is returned whole, together with the
//!    register-file and data-memory write requests for the caller to apply.
//!
//! [`step`] takes the state by reference and never mutates it, so a fault
//! leaves the caller's snapshot untouched.

use crate::common::constants::{INSTRUCTION_SIZE, RESET_PC};
use crate::common::error::Fault;
use crate::core::arch::gpr::Gpr;
use crate::core::pipeline::forwarding::Forwarding;
use crate::core::pipeline::hazards::{self, HazardSignals};
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::core::pipeline::signals::ControlSignals;
use crate::core::pipeline::stages::memory::MemRequest;
use crate::core::pipeline::stages::writeback::WritePort;
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};
use crate::core::pipeline::traits::PipelineLatch;
use crate::soc::traits::{DataMemory, InstructionMemory};

/// Snapshot of every architectural pipeline register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineState {
    /// Program counter of the instruction in Fetch.
    pub pc: u32,
    /// Fetch → Decode latch.
    pub if_id: IfId,
    /// Decode → Execute latch.
    pub id_ex: IdEx,
    /// Execute → Memory latch.
    pub ex_mem: ExMem,
    /// Memory → Writeback latch.
    pub mem_wb: MemWb,
}

impl Default for PipelineState {
    fn default() -> Self {
        Self::reset()
    }
}

impl PipelineState {
    /// Reset state: PC at the reset vector and every latch a bubble.
    pub const fn reset() -> Self {
        Self {
            pc: RESET_PC,
            if_id: IfId {
                pc: 0,
                pc_plus4: 0,
                inst: 0,
            },
            id_ex: IdEx {
                pc: 0,
                pc_plus4: 0,
                inst: 0,
                rs1: 0,
                rs2: 0,
                rd: 0,
                imm: 0,
                rv1: 0,
                rv2: 0,
                ctrl: ControlSignals::BUBBLE,
                fault: None,
            },
            ex_mem: ExMem {
                pc: 0,
                pc_plus4: 0,
                inst: 0,
                rd: 0,
                alu_result: 0,
                write_data: 0,
                ctrl: ControlSignals::BUBBLE,
            },
            mem_wb: MemWb {
                pc: 0,
                pc_plus4: 0,
                inst: 0,
                rd: 0,
                alu_result: 0,
                read_data: 0,
                ctrl: ControlSignals::BUBBLE,
            },
        }
    }
}

/// Externally visible signals of one cycle.
///
/// Everything here is a function of the snapshot the cycle started from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleOutputs {
    /// Data-memory port request from the Memory stage.
    pub mem: MemRequest,
    /// Register-file write port request from Writeback.
    pub reg_write: WritePort,
    /// Stall/flush lines from the hazard unit.
    pub hazards: HazardSignals,
    /// Operand forwarding selections in Execute.
    pub forwarding: Forwarding,
    /// A taken branch or jump resolved in Execute.
    pub pc_src: bool,
    /// Target of the branch/jump in Execute.
    pub pc_target: u32,
    /// Retirement strobe for the instruction counter.
    ///
    /// Asserted when Writeback writes a register, Memory writes data memory,
    /// or Execute redirects the PC. A jump that links is seen twice: once at
    /// Execute and again at Writeback.
    pub retired: bool,
}

/// Computes the next pipeline state from the current one.
///
/// # Arguments
///
/// * `state` - Current pipeline snapshot.
/// * `regs` - Register file as of the start of the cycle.
/// * `imem` - Instruction memory port.
/// * `dmem` - Data memory port (read only; the store is returned in the outputs).
///
/// # Errors
///
/// Returns the fault of the instruction in Execute, if it carries one.
pub fn step<I, D>(
    state: &PipelineState,
    regs: &Gpr,
    imem: &I,
    dmem: &D,
) -> Result<(PipelineState, CycleOutputs), Fault>
where
    I: InstructionMemory + ?Sized,
    D: DataMemory + ?Sized,
{
    let fetched = fetch_stage(state.pc, imem);
    let decoded = decode_stage(&state.if_id, regs, &state.mem_wb);
    let exec = execute_stage(&state.id_ex, &state.ex_mem, &state.mem_wb)?;
    let (mem_wb, mem) = mem_stage(&state.ex_mem, dmem);
    let reg_write = wb_stage(&state.mem_wb);

    let load_use = hazards::need_stall_load_use(&state.id_ex, &state.if_id);
    let hz = hazards::signals(load_use, exec.pc_src);

    let pc = if hz.stall_f {
        state.pc
    } else if exec.pc_src {
        exec.pc_target
    } else {
        state.pc.wrapping_add(INSTRUCTION_SIZE)
    };

    let mut if_id = if hz.stall_d { state.if_id } else { fetched };
    if hz.flush_d {
        if_id.flush();
    }

    let mut id_ex = decoded;
    if hz.flush_e {
        id_ex.flush();
    }

    let next = PipelineState {
        pc,
        if_id,
        id_ex,
        ex_mem: exec.ex_mem,
        mem_wb,
    };
    let outputs = CycleOutputs {
        mem,
        reg_write,
        hazards: hz,
        forwarding: exec.forwarding,
        pc_src: exec.pc_src,
        pc_target: exec.pc_target,
        retired: reg_write.enable || mem.write_enable || exec.pc_src,
    };
    Ok((next, outputs))
}
