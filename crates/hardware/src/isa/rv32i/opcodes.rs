//! RISC-V Base Integer (I) Opcodes.
//!
//! Defines the major opcodes (bits 6-0) executed by the pipeline.

/// Load word (LW).
pub const OP_LOAD: u32 = 0b0000011;

/// Immediate arithmetic instructions (ADDI, SLTI, ORI, ANDI).
pub const OP_IMM: u32 = 0b0010011;

/// Store word (SW).
pub const OP_STORE: u32 = 0b0100011;

/// Register-Register arithmetic (ADD, SUB, SLT, OR, AND).
pub const OP_REG: u32 = 0b0110011;

/// Branch if equal (BEQ).
pub const OP_BRANCH: u32 = 0b1100011;

/// Jump and Link (JAL).
pub const OP_JAL: u32 = 0b1101111;
