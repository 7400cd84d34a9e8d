//! RISC-V Base Integer (I) Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) distinguishes ADD from SUB in R-type
//! instructions. Only bit 5 is inspected by the ALU sub-decoder.

/// Default operation (ADD).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate operation (SUB).
pub const SUB: u32 = 0b0100000;

/// Bit 5 of funct7, the add/subtract selector.
pub const ALT_BIT: u32 = 0b0100000;
