//! Immediate Generator.
//!
//! Builds the 32-bit sign-extended immediate from instruction bits [31:7]
//! according to the format selected by the main decoder. Field positions
//! below are given in full-instruction bit numbering; the input word is
//! `inst >> 7`, so instruction bit `n` sits at input bit `n - 7`.

use crate::core::pipeline::signals::ImmSrc;

/// Input bit holding instruction bit `n`.
#[inline(always)]
const fn bit(input: u32, n: u32) -> u32 {
    (input >> (n - 7)) & 1
}

/// Input field holding instruction bits `[hi:lo]`, right-aligned.
#[inline(always)]
const fn field(input: u32, hi: u32, lo: u32) -> u32 {
    (input >> (lo - 7)) & ((1 << (hi - lo + 1)) - 1)
}

/// Sign-extends the low `width` bits of `value`.
#[inline(always)]
const fn sign_extend(value: u32, width: u32) -> u32 {
    let shift = 32 - width;
    (((value << shift) as i32) >> shift) as u32
}

/// Generates the sign-extended immediate.
///
/// `input` is instruction bits [31:7] right-aligned (`inst >> 7`).
///
/// | format | immediate |
/// |---|---|
/// | I | `sext(inst[31:20])` |
/// | S | `sext({inst[31:25], inst[11:7]})` |
/// | B | `sext({inst[31], inst[7], inst[30:25], inst[11:8], 0})` |
/// | J | `sext({inst[31], inst[19:12], inst[20], inst[30:21], 0})` |
pub const fn extend(input: u32, src: ImmSrc) -> u32 {
    match src {
        ImmSrc::I => sign_extend(field(input, 31, 20), 12),
        ImmSrc::S => sign_extend((field(input, 31, 25) << 5) | field(input, 11, 7), 12),
        ImmSrc::B => sign_extend(
            (bit(input, 31) << 12)
                | (bit(input, 7) << 11)
                | (field(input, 30, 25) << 5)
                | (field(input, 11, 8) << 1),
            13,
        ),
        ImmSrc::J => sign_extend(
            (bit(input, 31) << 20)
                | (field(input, 19, 12) << 12)
                | (bit(input, 20) << 11)
                | (field(input, 30, 21) << 1),
            21,
        ),
    }
}

/// Generates the immediate from a raw 2-bit selector.
///
/// Selectors wider than two bits have no format; they yield a fixed zero.
pub const fn extend_raw(input: u32, sel: u8) -> u32 {
    match ImmSrc::from_bits(sel) {
        Some(src) => extend(input, src),
        None => 0,
    }
}
