//! Instruction encoding bit extraction utilities.
//!
//! Provides field extraction for the fixed 32-bit instruction encoding:
//! `funct7[31:25] | rs2[24:20] | rs1[19:15] | funct3[14:12] | rd[11:7] | opcode[6:0]`.

use crate::isa::rv32i::funct7::ALT_BIT;

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting a register index field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;

    /// Bit 5 of the opcode; distinguishes R-type (1) from I-type (0) arithmetic.
    fn op_b5(&self) -> bool;

    /// Bit 5 of funct7 (instruction bit 30).
    fn funct7_b5(&self) -> bool;

    /// Bits [6:5] of funct7 (instruction bits 31:30), the extension group selector.
    fn funct7_hi(&self) -> u32;

    /// Bits [31:7], the immediate-generator input.
    fn imm_bits(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }

    #[inline(always)]
    fn op_b5(&self) -> bool {
        (self >> 5) & 1 != 0
    }

    #[inline(always)]
    fn funct7_b5(&self) -> bool {
        self.funct7() & ALT_BIT != 0
    }

    #[inline(always)]
    fn funct7_hi(&self) -> u32 {
        (self >> 30) & 0b11
    }

    #[inline(always)]
    fn imm_bits(&self) -> u32 {
        self >> 7
    }
}
