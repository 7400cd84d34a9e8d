//! ALU arithmetic and comparison operations.
//!
//! Add, subtract and set-less-than share one adder: subtraction is
//! `a + !b + 1`, and SLT takes the sign of that sum corrected for signed
//! overflow. The min/max family and ABS compare operands directly.

use crate::core::pipeline::signals::AluControl;

/// Sign bit of a 32-bit word.
#[inline(always)]
const fn msb(x: u32) -> u32 {
    x >> 31
}

/// Signed set-less-than computed through the adder path.
///
/// With `s = a + !b + 1`, the overflow bit is
/// `v = !(op0 ^ a31 ^ b31) & (a31 ^ s31) & is_add_sub` and the result is
/// `s31 ^ v`. SLT's encoding has `op0 = 1` and routes through the adder.
fn set_less_than(a: u32, b: u32) -> u32 {
    const OP0: u32 = (AluControl::Slt as u32) & 1;
    const IS_ADD_SUB: u32 = 1;

    let s = a.wrapping_add(!b).wrapping_add(1);
    let v = (!(OP0 ^ msb(a) ^ msb(b)) & 1) & (msb(a) ^ msb(s)) & IS_ADD_SUB;
    msb(s) ^ v
}

/// Executes an adder-based or comparison operation.
///
/// Returns `0` for operations handled by other submodules.
pub fn execute(op: AluControl, a: u32, b: u32) -> u32 {
    match op {
        AluControl::Add => a.wrapping_add(b),
        AluControl::Sub => a.wrapping_add(!b).wrapping_add(1),
        AluControl::Slt => set_less_than(a, b),
        AluControl::Min => (a as i32).min(b as i32) as u32,
        AluControl::Max => (a as i32).max(b as i32) as u32,
        AluControl::MinU => a.min(b),
        AluControl::MaxU => a.max(b),
        // 0 - a for negative a; INT32_MIN maps to itself.
        AluControl::Abs => {
            if (a as i32) < 0 {
                0u32.wrapping_sub(a)
            } else {
                a
            }
        }
        _ => 0,
    }
}
