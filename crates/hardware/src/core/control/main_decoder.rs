//! Main Decoder.
//!
//! A pure function of the 7-bit opcode. Each recognised opcode maps to one
//! fixed row of control outputs; fields that the instruction does not use
//! are pinned to their zero value so no don't-care state leaves the decoder.

use crate::common::error::Fault;
use crate::core::pipeline::signals::{AluOp, ImmSrc, ResultSrc};
use crate::isa::rv32i::opcodes as i_op;
use crate::isa::xalu::opcodes as x_op;

/// One row of the main decoder table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MainDecode {
    /// Register file write enable.
    pub reg_write: bool,
    /// Immediate format.
    pub imm_src: ImmSrc,
    /// ALU source B is the immediate.
    pub alu_src: bool,
    /// Data memory write enable.
    pub mem_write: bool,
    /// Writeback result selection.
    pub result_src: ResultSrc,
    /// Conditional branch.
    pub branch: bool,
    /// ALU operation class.
    pub alu_op: AluOp,
    /// Unconditional jump.
    pub jump: bool,
}

/// `lw`: load word.
const LOAD: MainDecode = MainDecode {
    reg_write: true,
    imm_src: ImmSrc::I,
    alu_src: true,
    mem_write: false,
    result_src: ResultSrc::Mem,
    branch: false,
    alu_op: AluOp::Add,
    jump: false,
};

/// `sw`: store word.
const STORE: MainDecode = MainDecode {
    reg_write: false,
    imm_src: ImmSrc::S,
    alu_src: true,
    mem_write: true,
    result_src: ResultSrc::Alu,
    branch: false,
    alu_op: AluOp::Add,
    jump: false,
};

/// Register-register ALU.
const REG: MainDecode = MainDecode {
    reg_write: true,
    imm_src: ImmSrc::I,
    alu_src: false,
    mem_write: false,
    result_src: ResultSrc::Alu,
    branch: false,
    alu_op: AluOp::Funct,
    jump: false,
};

/// `beq`: branch if equal.
const BRANCH: MainDecode = MainDecode {
    reg_write: false,
    imm_src: ImmSrc::B,
    alu_src: false,
    mem_write: false,
    result_src: ResultSrc::Alu,
    branch: true,
    alu_op: AluOp::Sub,
    jump: false,
};

/// Register-immediate ALU.
const IMM: MainDecode = MainDecode {
    reg_write: true,
    imm_src: ImmSrc::I,
    alu_src: true,
    mem_write: false,
    result_src: ResultSrc::Alu,
    branch: false,
    alu_op: AluOp::Funct,
    jump: false,
};

/// `jal`: jump and link.
const JAL: MainDecode = MainDecode {
    reg_write: true,
    imm_src: ImmSrc::J,
    alu_src: false,
    mem_write: false,
    result_src: ResultSrc::PcPlus4,
    branch: false,
    alu_op: AluOp::Add,
    jump: true,
};

/// Custom register-register extension.
const CUSTOM: MainDecode = MainDecode {
    reg_write: true,
    imm_src: ImmSrc::I,
    alu_src: false,
    mem_write: false,
    result_src: ResultSrc::Alu,
    branch: false,
    alu_op: AluOp::Ext,
    jump: false,
};

/// Decodes an opcode into its control row.
///
/// # Errors
///
/// Returns [`Fault::IllegalInstruction`] (with zero PC/instruction, to be
/// re-tagged by the caller) for any opcode outside the table.
pub const fn decode(opcode: u32) -> Result<MainDecode, Fault> {
    match opcode {
        i_op::OP_LOAD => Ok(LOAD),
        i_op::OP_STORE => Ok(STORE),
        i_op::OP_REG => Ok(REG),
        i_op::OP_BRANCH => Ok(BRANCH),
        i_op::OP_IMM => Ok(IMM),
        i_op::OP_JAL => Ok(JAL),
        x_op::OP_CUSTOM_ALU => Ok(CUSTOM),
        _ => Err(Fault::IllegalInstruction { pc: 0, inst: 0 }),
    }
}
