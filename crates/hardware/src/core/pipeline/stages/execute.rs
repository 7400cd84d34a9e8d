//! Execute (EX) Stage.
//!
//! This module implements the execution stage of the pipeline. It performs:
//! 1. **Fault Delivery:** A fault latched by Decode is raised here, once the
//!    instruction can no longer be squashed by an older branch.
//! 2. **Operand Forwarding:** Selects each operand from Memory, Writeback or
//!    the register-file value latched at Decode.
//! 3. **ALU Execution:** Computes the result and the zero flag.
//! 4. **Branch Resolution:** Computes `PC + imm` and decides whether to redirect.

use crate::common::error::Fault;
use crate::core::pipeline::forwarding::{self, Forwarding};
use crate::core::pipeline::latches::{ExMem, IdEx, MemWb};
use crate::core::units::alu::Alu;

/// Everything Execute produces in one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecuteOutput {
    /// EX/MEM latch contents for next cycle.
    pub ex_mem: ExMem,
    /// Redirect the PC to `pc_target` (taken branch or jump).
    pub pc_src: bool,
    /// Branch/jump target.
    pub pc_target: u32,
    /// Forwarding selections used for the operands.
    pub forwarding: Forwarding,
}

/// Executes the execute stage for one cycle.
///
/// # Arguments
///
/// * `id_ex` - The ID/EX latch.
/// * `ex_mem` - The current EX/MEM latch (Memory-stage forwarding source).
/// * `mem_wb` - The current MEM/WB latch (Writeback-stage forwarding source).
///
/// # Errors
///
/// Returns the fault latched by Decode, if any.
pub fn execute_stage(
    id_ex: &IdEx,
    ex_mem: &ExMem,
    mem_wb: &MemWb,
) -> Result<ExecuteOutput, Fault> {
    if let Some(fault) = id_ex.fault {
        return Err(fault);
    }

    let ctrl = id_ex.ctrl;
    let fwd = forwarding::resolve(id_ex, ex_mem, mem_wb);
    let src_a = forwarding::operand(fwd.a, id_ex.rv1, ex_mem, mem_wb);
    let rs2_val = forwarding::operand(fwd.b, id_ex.rv2, ex_mem, mem_wb);
    let src_b = if ctrl.alu_src { id_ex.imm } else { rs2_val };

    let alu = Alu::execute(ctrl.alu_control, src_a, src_b);
    let pc_src = (ctrl.branch && alu.zero) || ctrl.jump;

    Ok(ExecuteOutput {
        ex_mem: ExMem {
            pc: id_ex.pc,
            pc_plus4: id_ex.pc_plus4,
            inst: id_ex.inst,
            rd: id_ex.rd,
            alu_result: alu.result,
            write_data: rs2_val,
            ctrl,
        },
        pc_src,
        pc_target: id_ex.pc.wrapping_add(id_ex.imm),
        forwarding: fwd,
    })
}
