//! ALU bitwise logical operations.
//!
//! Implements AND, OR, XOR and the inverted-operand extension forms
//! ANDN (`a & !b`), ORN (`a | !b`) and XNOR (`!(a ^ b)`).

use crate::core::pipeline::signals::AluControl;

/// Executes a bitwise logical operation.
///
/// Returns `0` for operations handled by other submodules.
pub const fn execute(op: AluControl, a: u32, b: u32) -> u32 {
    match op {
        AluControl::And => a & b,
        AluControl::Or => a | b,
        AluControl::Xor => a ^ b,
        AluControl::AndN => a & !b,
        AluControl::OrN => a | !b,
        AluControl::Xnor => !(a ^ b),
        _ => 0,
    }
}
