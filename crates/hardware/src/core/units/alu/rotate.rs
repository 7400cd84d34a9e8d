//! ALU rotate operations.
//!
//! The rotate amount is `b mod 32`; a zero amount returns `a` unchanged.

use crate::core::pipeline::signals::AluControl;

/// Bit mask for the rotate amount (5 bits: 0-31).
const ROT_MASK: u32 = 0x1f;

/// Executes a rotate operation.
///
/// Returns `0` for operations handled by other submodules.
pub const fn execute(op: AluControl, a: u32, b: u32) -> u32 {
    let amt = b & ROT_MASK;
    match op {
        AluControl::Rol => a.rotate_left(amt),
        AluControl::Ror => a.rotate_right(amt),
        _ => 0,
    }
}
