//! RISC-V Base Integer (I) Function Codes (funct3).
//!
//! The `funct3` field (bits 14-12) selects the ALU operation for R-type and
//! I-type arithmetic. Loads, stores and branches are decoded on the opcode alone.

/// Load Word.
pub const LW: u32 = 0b010;

/// Store Word.
pub const SW: u32 = 0b010;

/// Branch Equal.
pub const BEQ: u32 = 0b000;

/// Add/Subtract (ADD, SUB, ADDI).
pub const ADD_SUB: u32 = 0b000;
/// Set Less Than (signed).
pub const SLT: u32 = 0b010;
/// Bitwise OR.
pub const OR: u32 = 0b110;
/// Bitwise AND.
pub const AND: u32 = 0b111;
