//! Custom ALU Extension Function Codes (funct3).

/// Signed minimum.
pub const MIN: u32 = 0b100;
/// Unsigned minimum.
pub const MINU: u32 = 0b101;
/// Signed maximum.
pub const MAX: u32 = 0b110;
/// Unsigned maximum.
pub const MAXU: u32 = 0b111;

/// AND with inverted rs2.
pub const ANDN: u32 = 0b111;
/// OR with inverted rs2.
pub const ORN: u32 = 0b110;
/// Exclusive NOR.
pub const XNOR: u32 = 0b100;

/// Rotate left.
pub const ROL: u32 = 0b001;
/// Rotate right.
pub const ROR: u32 = 0b101;

/// Absolute value.
pub const ABS: u32 = 0b000;
