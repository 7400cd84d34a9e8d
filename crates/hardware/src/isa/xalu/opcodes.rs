//! Custom ALU Extension Opcodes.

/// Custom register-register ALU operations (RISC-V custom-0 space).
pub const OP_CUSTOM_ALU: u32 = 0b0001011;
