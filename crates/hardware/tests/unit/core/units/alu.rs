//! ALU Operation Tests.
//!
//! Every operation is checked against its definition over the boundary set
//! {0, 1, -1, i32::MIN, i32::MAX} in both operand positions, then against
//! algebraic properties over random operands.

use proptest::prelude::*;
use rstest::rstest;
use rvpipe_core::common::error::Fault;
use rvpipe_core::core::pipeline::signals::AluControl;
use rvpipe_core::core::units::alu::Alu;

// ─── Constants ───────────────────────────────────────────────────────────────

const ZERO: u32 = 0;
const ONE: u32 = 1;
const NEG1: u32 = u32::MAX;
const I32_MIN: u32 = i32::MIN as u32; // 0x8000_0000
const I32_MAX: u32 = i32::MAX as u32; // 0x7FFF_FFFF

const BOUNDARY: [u32; 5] = [ZERO, ONE, NEG1, I32_MIN, I32_MAX];

// ─── Helper ──────────────────────────────────────────────────────────────────

fn alu(op: AluControl, a: u32, b: u32) -> u32 {
    Alu::execute(op, a, b).result
}

/// Definition of each operation, written with std integer methods.
fn model(op: AluControl, a: u32, b: u32) -> u32 {
    let (sa, sb) = (a as i32, b as i32);
    match op {
        AluControl::Add => a.wrapping_add(b),
        AluControl::Sub => a.wrapping_sub(b),
        AluControl::And => a & b,
        AluControl::Or => a | b,
        AluControl::Xor => a ^ b,
        AluControl::Slt => u32::from(sa < sb),
        AluControl::AndN => a & !b,
        AluControl::OrN => a | !b,
        AluControl::Xnor => !(a ^ b),
        AluControl::Min => sa.min(sb) as u32,
        AluControl::Max => sa.max(sb) as u32,
        AluControl::MinU => a.min(b),
        AluControl::MaxU => a.max(b),
        AluControl::Rol => a.rotate_left(b % 32),
        AluControl::Ror => a.rotate_right(b % 32),
        AluControl::Abs => {
            if sa < 0 {
                0u32.wrapping_sub(a)
            } else {
                a
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
//  Boundary grid
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
fn matches_definition_on_boundaries(
    #[values(
        AluControl::Add,
        AluControl::Sub,
        AluControl::And,
        AluControl::Or,
        AluControl::Xor,
        AluControl::Slt,
        AluControl::AndN,
        AluControl::OrN,
        AluControl::Xnor,
        AluControl::Min,
        AluControl::Max,
        AluControl::MinU,
        AluControl::MaxU,
        AluControl::Rol,
        AluControl::Ror,
        AluControl::Abs
    )]
    op: AluControl,
) {
    for a in BOUNDARY {
        for b in BOUNDARY {
            let got = Alu::execute(op, a, b);
            let want = model(op, a, b);
            assert_eq!(got.result, want, "{op:?}({a:#x}, {b:#x})");
            assert_eq!(got.zero, want == 0, "{op:?}({a:#x}, {b:#x}) zero flag");
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
//  Named edge cases
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
#[case(AluControl::Slt, I32_MIN, I32_MAX, 1)] // overflowing subtract, still less
#[case(AluControl::Slt, I32_MAX, I32_MIN, 0)]
#[case(AluControl::Slt, NEG1, ZERO, 1)]
#[case(AluControl::Slt, ZERO, ZERO, 0)]
#[case(AluControl::Min, NEG1, ONE, NEG1)]
#[case(AluControl::MinU, NEG1, ONE, ONE)]
#[case(AluControl::Max, I32_MIN, ZERO, ZERO)]
#[case(AluControl::MaxU, I32_MIN, ZERO, I32_MIN)]
#[case(AluControl::Abs, I32_MIN, ZERO, I32_MIN)] // wraps
#[case(AluControl::Abs, NEG1, 12345, ONE)] // b ignored
#[case(AluControl::Rol, 0x8000_0001, 0, 0x8000_0001)]
#[case(AluControl::Ror, 0x8000_0001, 0, 0x8000_0001)]
#[case(AluControl::Rol, 0x8000_0001, 32, 0x8000_0001)] // amount mod 32
#[case(AluControl::Rol, 0x8000_0001, 1, 0x0000_0003)]
#[case(AluControl::Ror, 0x8000_0001, 1, 0xC000_0000)]
#[case(AluControl::Xnor, 0xF0F0_F0F0, 0xF0F0_F0F0, NEG1)]
fn edge_cases(#[case] op: AluControl, #[case] a: u32, #[case] b: u32, #[case] want: u32) {
    assert_eq!(alu(op, a, b), want);
}

#[test]
fn raw_codes_cover_all_sixteen() {
    for op in AluControl::ALL {
        let raw = Alu::execute_raw(op.bits(), 6, 3).unwrap();
        assert_eq!(raw, Alu::execute(op, 6, 3));
    }
}

#[test]
fn raw_code_out_of_table_faults() {
    let err = Alu::execute_raw(0x10, 1, 2).unwrap_err();
    assert!(matches!(err, Fault::UndefinedOperation { code: 0x10, .. }));
}

// ═════════════════════════════════════════════════════════════════════════════
//  Properties
// ═════════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn every_op_matches_model(code in 0u8..16, a: u32, b: u32) {
        let op = AluControl::from_bits(code).unwrap();
        prop_assert_eq!(alu(op, a, b), model(op, a, b));
    }

    #[test]
    fn sub_is_inverse_of_add(a: u32, b: u32) {
        prop_assert_eq!(alu(AluControl::Sub, alu(AluControl::Add, a, b), b), a);
    }

    #[test]
    fn rol_ror_cancel(a: u32, n: u32) {
        prop_assert_eq!(alu(AluControl::Ror, alu(AluControl::Rol, a, n), n), a);
    }

    #[test]
    fn zero_flag_tracks_equality_via_sub(a: u32, b: u32) {
        prop_assert_eq!(Alu::execute(AluControl::Sub, a, b).zero, a == b);
    }
}
