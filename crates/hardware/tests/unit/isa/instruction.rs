//! Instruction Field Extraction Tests.

use rvpipe_core::isa::instruction::InstructionBits;
use rvpipe_core::isa::rv32i::funct7 as i_f7;
use rvpipe_core::isa::xalu::funct7 as x_f7;
use rvpipe_core::isa::xalu::opcodes::OP_CUSTOM_ALU;

use crate::common::builder::instruction::asm;

#[test]
fn r_type_fields() {
    let inst = asm().sub(2, 3, 4).build();
    assert_eq!(inst.opcode(), 0b0110011);
    assert_eq!(inst.rd(), 2);
    assert_eq!(inst.rs1(), 3);
    assert_eq!(inst.rs2(), 4);
    assert_eq!(inst.funct3(), 0);
    assert_eq!(inst.funct7(), 0b0100000);
    assert!(inst.op_b5());
    assert!(inst.funct7_b5());
}

#[test]
fn immediate_arith_has_op_b5_clear() {
    let inst = asm().addi(1, 0, -1).build();
    assert!(!inst.op_b5());
    // imm[11:0] = 0xFFF sets bit 30, which must not turn ADDI into a subtract.
    assert!(inst.funct7_b5());
}

#[test]
fn extension_group_bits() {
    assert_eq!(asm().min(1, 2, 3).build().funct7_hi(), 0b00);
    assert_eq!(asm().andn(1, 2, 3).build().funct7_hi(), 0b01);
    assert_eq!(asm().rol(1, 2, 3).build().funct7_hi(), 0b10);
    assert_eq!(asm().abs(1, 2).build().funct7_hi(), 0b11);
}

#[test]
fn imm_bits_drops_opcode_and_rd_position() {
    let inst = asm().sw(5, 6, 8).build();
    assert_eq!(inst.imm_bits(), inst >> 7);
}

#[test]
fn funct7_b5_follows_alt_bit() {
    let sub = asm().sub(1, 2, 3).build();
    let add = asm().add(1, 2, 3).build();
    assert_eq!(sub.funct7() & i_f7::ALT_BIT, i_f7::ALT_BIT);
    assert!(sub.funct7_b5());
    assert_eq!(add.funct7() & i_f7::ALT_BIT, 0);
    assert!(!add.funct7_b5());
}

#[test]
fn canonical_encodings_select_their_group() {
    for (funct7, group) in [
        (x_f7::MINMAX, x_f7::GROUP_MINMAX),
        (x_f7::LOGIC_N, x_f7::GROUP_LOGIC_N),
        (x_f7::ROTATE, x_f7::GROUP_ROTATE),
        (x_f7::ABS, x_f7::GROUP_ABS),
    ] {
        let inst = asm().opcode(OP_CUSTOM_ALU).funct7(funct7).build();
        assert_eq!(inst.funct7_hi(), group, "funct7 {funct7:#09b}");
    }
}
