//! Layered control decode.
//!
//! Control is decoded in two layers, mirroring the datapath:
//! 1. **Main Decoder:** opcode → register/memory/branch enables, immediate
//!    format, result selection and a 2-bit ALU operation class.
//! 2. **ALU Sub-Decoder:** ALU operation class plus funct fields → the 4-bit
//!    ALU control code.
//!
//! [`decode_control`] composes both into the [`ControlSignals`] bundle that
//! travels down the pipeline.

/// ALU sub-decoder (`ALUOp` + funct fields → ALU control).
pub mod alu_decoder;

/// Main decoder (opcode → control enables).
pub mod main_decoder;

use crate::common::error::Fault;
use crate::core::pipeline::signals::ControlSignals;
use crate::isa::instruction::InstructionBits;

/// Decodes the full control bundle for one instruction word.
///
/// # Errors
///
/// Returns [`Fault::IllegalInstruction`] tagged with `pc` and `inst` when
/// either decoder has no entry for the encoding.
pub fn decode_control(pc: u32, inst: u32) -> Result<ControlSignals, Fault> {
    let main = main_decoder::decode(inst.opcode()).map_err(|f| f.at(pc, inst))?;
    let alu_control = alu_decoder::decode(
        main.alu_op,
        inst.op_b5(),
        inst.funct3(),
        inst.funct7_b5(),
        inst.funct7_hi(),
    )
    .map_err(|f| f.at(pc, inst))?;

    Ok(ControlSignals {
        reg_write: main.reg_write,
        mem_write: main.mem_write,
        alu_src: main.alu_src,
        result_src: main.result_src,
        branch: main.branch,
        jump: main.jump,
        alu_control,
        imm_src: main.imm_src,
    })
}
