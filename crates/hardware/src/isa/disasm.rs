//! Instruction Disassembler.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for debug tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use rvpipe_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x00A0_0513), "addi a0, zero, 10");
//! ```

use crate::common::constants::BUBBLE;
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::{funct3 as i_f3, opcodes as i_op};
use crate::isa::xalu::{funct3 as x_f3, funct7 as x_f7, opcodes as x_op};

/// ABI register names for x0–x31.
const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Returns the ABI name for an integer register index.
#[inline]
fn xreg(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("x??")
}

/// Disassembles a 32-bit instruction into a human-readable string.
///
/// Returns a mnemonic like `"add a0, a1, a2"`, `"bubble"` for the all-zero
/// marker word, or `"unknown"` for unrecognised encodings.
pub fn disassemble(inst: u32) -> String {
    if inst == BUBBLE {
        return "bubble".to_owned();
    }

    let rd = xreg(inst.rd());
    let rs1 = xreg(inst.rs1());
    let rs2 = xreg(inst.rs2());
    let f3 = inst.funct3();

    let imm_i = (inst as i32) >> 20;
    let imm_s = (((inst & 0xFE00_0000) as i32) >> 20) | ((inst >> 7) & 0x1F) as i32;
    let imm_b = (((inst & 0x8000_0000) as i32) >> 19)
        | (((inst >> 7) & 1) << 11) as i32
        | (((inst >> 25) & 0x3F) << 5) as i32
        | (((inst >> 8) & 0xF) << 1) as i32;
    let imm_j = (((inst & 0x8000_0000) as i32) >> 11)
        | (inst & 0x000F_F000) as i32
        | (((inst >> 20) & 1) << 11) as i32
        | (((inst >> 21) & 0x3FF) << 1) as i32;

    match inst.opcode() {
        i_op::OP_LOAD => format!("lw {rd}, {imm_i}({rs1})"),
        i_op::OP_STORE => format!("sw {rs2}, {imm_s}({rs1})"),
        i_op::OP_BRANCH => format!("beq {rs1}, {rs2}, {imm_b}"),
        i_op::OP_JAL => format!("jal {rd}, {imm_j}"),
        i_op::OP_IMM => {
            let m = match f3 {
                i_f3::ADD_SUB => "addi",
                i_f3::SLT => "slti",
                i_f3::OR => "ori",
                i_f3::AND => "andi",
                _ => return "unknown".to_owned(),
            };
            format!("{m} {rd}, {rs1}, {imm_i}")
        }
        i_op::OP_REG => {
            let m = match (f3, inst.funct7_b5()) {
                (i_f3::ADD_SUB, false) => "add",
                (i_f3::ADD_SUB, true) => "sub",
                (i_f3::SLT, _) => "slt",
                (i_f3::OR, _) => "or",
                (i_f3::AND, _) => "and",
                _ => return "unknown".to_owned(),
            };
            format!("{m} {rd}, {rs1}, {rs2}")
        }
        x_op::OP_CUSTOM_ALU => {
            let m = match (inst.funct7_hi(), f3) {
                (x_f7::GROUP_MINMAX, x_f3::MIN) => "min",
                (x_f7::GROUP_MINMAX, x_f3::MAX) => "max",
                (x_f7::GROUP_MINMAX, x_f3::MINU) => "minu",
                (x_f7::GROUP_MINMAX, x_f3::MAXU) => "maxu",
                (x_f7::GROUP_LOGIC_N, x_f3::ANDN) => "andn",
                (x_f7::GROUP_LOGIC_N, x_f3::ORN) => "orn",
                (x_f7::GROUP_LOGIC_N, x_f3::XNOR) => "xnor",
                (x_f7::GROUP_ROTATE, x_f3::ROL) => "rol",
                (x_f7::GROUP_ROTATE, x_f3::ROR) => "ror",
                (x_f7::GROUP_ABS, x_f3::ABS) => return format!("abs {rd}, {rs1}"),
                _ => return "unknown".to_owned(),
            };
            format!("{m} {rd}, {rs1}, {rs2}")
        }
        _ => "unknown".to_owned(),
    }
}
