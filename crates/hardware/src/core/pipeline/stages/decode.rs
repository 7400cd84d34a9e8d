//! Instruction Decode (ID) Stage.
//!
//! This module turns the raw word in IF/ID into the ID/EX bundle. It performs:
//! 1. **Control Decode:** Runs the main decoder and ALU sub-decoder. An illegal
//!    encoding does not stop the pipeline here; the fault is latched and
//!    raised only if the instruction reaches Execute.
//! 2. **Register Read:** Reads both source registers. The register file is
//!    write-after-read, so a result being committed by Writeback this cycle is
//!    bypassed straight into the read.
//! 3. **Immediate Generation:** Sign-extends the immediate in the selected format.

use crate::common::constants::{BUBBLE, REG_ZERO};
use crate::core::arch::gpr::Gpr;
use crate::core::control::decode_control;
use crate::core::pipeline::latches::{IdEx, IfId, MemWb};
use crate::core::pipeline::signals::ControlSignals;
use crate::core::pipeline::stages::writeback;
use crate::core::units::imm_gen;
use crate::isa::instruction::InstructionBits;

/// Reads a source register, bypassing the value Writeback commits this cycle.
#[inline]
fn read_operand(regs: &Gpr, mem_wb: &MemWb, rs: usize) -> u32 {
    if rs != REG_ZERO && mem_wb.ctrl.reg_write && mem_wb.rd == rs {
        writeback::result(mem_wb)
    } else {
        regs.read(rs)
    }
}

/// Executes the decode stage for one cycle.
///
/// # Arguments
///
/// * `if_id` - The IF/ID latch.
/// * `regs` - Register file, as of the start of the cycle.
/// * `mem_wb` - The MEM/WB latch, for the Writeback bypass.
///
/// # Returns
///
/// The ID/EX latch contents Execute would see next cycle.
pub fn decode_stage(if_id: &IfId, regs: &Gpr, mem_wb: &MemWb) -> IdEx {
    let inst = if_id.inst;
    let (ctrl, fault) = if inst == BUBBLE {
        (ControlSignals::BUBBLE, None)
    } else {
        match decode_control(if_id.pc, inst) {
            Ok(ctrl) => (ctrl, None),
            Err(fault) => (ControlSignals::BUBBLE, Some(fault)),
        }
    };

    let rs1 = inst.rs1();
    let rs2 = inst.rs2();

    IdEx {
        pc: if_id.pc,
        pc_plus4: if_id.pc_plus4,
        inst,
        rs1,
        rs2,
        rd: inst.rd(),
        imm: imm_gen::extend(inst.imm_bits(), ctrl.imm_src),
        rv1: read_operand(regs, mem_wb, rs1),
        rv2: read_operand(regs, mem_wb, rs2),
        ctrl,
        fault,
    }
}
