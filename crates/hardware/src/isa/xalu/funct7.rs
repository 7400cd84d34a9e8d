//! Custom ALU Extension Function Codes (funct7).
//!
//! Only bits [6:5] select the operation group; the canonical encodings
//! below leave the remaining bits clear except for the min/max group,
//! which mirrors the Zbb layout.

/// Signed/unsigned minimum and maximum.
pub const MINMAX: u32 = 0b0000101;
/// Inverted-operand logic (ANDN, ORN, XNOR).
pub const LOGIC_N: u32 = 0b0100000;
/// Rotates (ROL, ROR).
pub const ROTATE: u32 = 0b1000000;
/// Absolute value.
pub const ABS: u32 = 0b1100000;

/// Group selector value of funct7[6:5] for [`MINMAX`].
pub const GROUP_MINMAX: u32 = 0b00;
/// Group selector value of funct7[6:5] for [`LOGIC_N`].
pub const GROUP_LOGIC_N: u32 = 0b01;
/// Group selector value of funct7[6:5] for [`ROTATE`].
pub const GROUP_ROTATE: u32 = 0b10;
/// Group selector value of funct7[6:5] for [`ABS`].
pub const GROUP_ABS: u32 = 0b11;
