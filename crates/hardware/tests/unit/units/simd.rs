//! Packed-SIMD Unit Tests
//!
//! Lane-wise operators, scalar-replicated operands, dot products and shuffles.
//! Lane results are compared against a per-lane model built on the shared
//! `lane` helper rather than the crate's own `Lanes` type.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use xpulp_core::common::{LaneWidth, Xlen};
use xpulp_core::isa::{DotOp, LaneOp, OperandForm};
use xpulp_core::units::simd::{self, broadcast, dot, shuffle};

use crate::common::{lane, sext};

fn b32(op: LaneOp, a: u64, b: u64) -> u64 {
    simd::execute(op, a, b, LaneWidth::Byte, Xlen::Rv32)
}

fn h32(op: LaneOp, a: u64, b: u64) -> u64 {
    simd::execute(op, a, b, LaneWidth::Half, Xlen::Rv32)
}

// ═════════════════════════════════════════════════════════════════════════════
//  Arithmetic
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn add_halfword_wraps_per_lane() {
    // Lane 0 carry must not reach lane 1.
    assert_eq!(h32(LaneOp::Add, 0x0001_FFFF, 0x0001_0001), 0x0002_0000);
}

#[test]
fn sub_byte_borrows_stay_in_lane() {
    assert_eq!(b32(LaneOp::Sub, 0x0000_0000, 0x0101_0101), 0xFFFF_FFFF);
    assert_eq!(b32(LaneOp::Sub, 0x1020_3040, 0x0102_0304), 0x0F1E_2D3C);
}

#[test]
fn avg_signed_and_unsigned() {
    // (-2 + 1) >> 1 = -1
    assert_eq!(b32(LaneOp::Avg, 0xFE, 0x01), 0xFF);
    // 0xFF + 0xFF computed wide, no lane overflow
    assert_eq!(b32(LaneOp::Avgu, 0xFF, 0xFF), 0xFF);
    assert_eq!(h32(LaneOp::Avgu, 0xFFFF_0002, 0x0001_0004), 0x8000_0003);
}

#[rstest]
#[case(LaneOp::Min, 0x80)]
#[case(LaneOp::Minu, 0x7F)]
#[case(LaneOp::Max, 0x7F)]
#[case(LaneOp::Maxu, 0x80)]
fn min_max_signedness(#[case] op: LaneOp, #[case] expected: u64) {
    assert_eq!(b32(op, 0x80, 0x7F), expected);
}

#[test]
fn abs_per_lane() {
    assert_eq!(b32(LaneOp::Abs, 0x80FF_0105, 0), 0x8001_0105);
    assert_eq!(h32(LaneOp::Abs, 0xFFFE_0003, 0), 0x0002_0003);
}

// ═════════════════════════════════════════════════════════════════════════════
//  Shifts and logic
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn shifts_by_lane_amount() {
    assert_eq!(b32(LaneOp::Srl, 0x80, 0x01), 0x40);
    assert_eq!(b32(LaneOp::Sra, 0x80, 0x01), 0xC0);
    assert_eq!(b32(LaneOp::Sll, 0x81, 0x01), 0x02);
}

#[test]
fn shift_amounts_are_masked_to_lane_width() {
    // Byte shift amount 9 & 7 = 1; halfword amount 17 & 15 = 1
    assert_eq!(b32(LaneOp::Sll, 0x01, 0x09), 0x02);
    assert_eq!(h32(LaneOp::Srl, 0x8000, 0x0011), 0x4000);
}

#[test]
fn bitwise_ops() {
    assert_eq!(b32(LaneOp::Or, 0xF0F0_0000, 0x0F0F_0000), 0xFFFF_0000);
    assert_eq!(b32(LaneOp::Xor, 0xFFFF_FFFF, 0x0F0F_0F0F), 0xF0F0_F0F0);
    assert_eq!(b32(LaneOp::And, 0xFFFF_FFFF, 0x0F0F_0F0F), 0x0F0F_0F0F);
}

// ═════════════════════════════════════════════════════════════════════════════
//  Comparisons
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
#[case(LaneOp::Cmpeq, 0x0000_FF00)]
#[case(LaneOp::Cmpne, 0xFFFF_00FF)]
#[case(LaneOp::Cmpgt, 0x0000_0000)]
#[case(LaneOp::Cmpge, 0x0000_FF00)]
#[case(LaneOp::Cmplt, 0xFFFF_00FF)]
#[case(LaneOp::Cmple, 0xFFFF_FFFF)]
#[case(LaneOp::Cmpgtu, 0xFFFF_0000)]
#[case(LaneOp::Cmpgeu, 0xFFFF_FF00)]
#[case(LaneOp::Cmpltu, 0x0000_00FF)]
#[case(LaneOp::Cmpleu, 0x0000_FFFF)]
fn compare_byte_lanes(#[case] op: LaneOp, #[case] expected: u64) {
    // Lanes (a, b): lane 3 (-1, 1), lane 2 (-128, 0), lane 1 (5, 5), lane 0 (1, 2)
    let a = 0xFF80_0501;
    let b = 0x0100_0502;
    assert_eq!(b32(op, a, b), expected);
}

// ═════════════════════════════════════════════════════════════════════════════
//  Scalar-replicated operand
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn broadcast_replicates_lane_zero() {
    assert_eq!(broadcast(0xAB_CDEF, LaneWidth::Byte, Xlen::Rv32), 0xEFEF_EFEF);
    assert_eq!(
        broadcast(0xABCD_1234, LaneWidth::Half, Xlen::Rv64),
        0x1234_1234_1234_1234
    );
}

#[test]
fn scalar_form_adds_same_value_to_every_lane() {
    assert_eq!(
        simd::execute_sc(LaneOp::Add, 0x0102_0304, 0x10, LaneWidth::Byte, Xlen::Rv32),
        0x1112_1314
    );
    let b = simd::second_operand(0x10, LaneWidth::Byte, OperandForm::Scalar, Xlen::Rv32);
    assert_eq!(b, 0x1010_1010);
    let b = simd::second_operand(0x10, LaneWidth::Byte, OperandForm::Vector, Xlen::Rv32);
    assert_eq!(b, 0x10);
}

#[test]
fn rv64_uses_eight_byte_lanes() {
    let r = simd::execute(
        LaneOp::Add,
        0x0101_0101_0101_0101,
        0xFF00_0000_0000_0001,
        LaneWidth::Byte,
        Xlen::Rv64,
    );
    assert_eq!(r, 0x0001_0101_0101_0102);
}

#[test]
fn rv32_result_has_no_upper_bits() {
    let r = simd::execute(
        LaneOp::Or,
        0xFFFF_FFFF_0000_0000,
        0xFFFF_FFFF_0000_0001,
        LaneWidth::Half,
        Xlen::Rv32,
    );
    assert_eq!(r, 1);
}

proptest! {
    #[test]
    fn prop_add_matches_lane_model(a in any::<u32>(), b in any::<u32>()) {
        let (a, b) = (u64::from(a), u64::from(b));
        let mut expected = 0u64;
        for i in 0..4 {
            let sum = (lane(a, i, 8) + lane(b, i, 8)) & 0xFF;
            expected |= sum << (i * 8);
        }
        prop_assert_eq!(b32(LaneOp::Add, a, b), expected);
    }

    #[test]
    fn prop_max_matches_lane_model(a in any::<u64>(), b in any::<u64>()) {
        let mut expected = 0u64;
        for i in 0..4 {
            let x = sext(lane(a, i, 16), 16);
            let y = sext(lane(b, i, 16), 16);
            expected |= ((x.max(y) as u64) & 0xFFFF) << (i * 16);
        }
        let r = simd::execute(LaneOp::Max, a, b, LaneWidth::Half, Xlen::Rv64);
        prop_assert_eq!(r, expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════════
//  Dot products
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn dotup_byte_sum() {
    // 4*8 + 3*7 + 2*6 + 1*5
    assert_eq!(dot::dot(DotOp::Up, 0x0102_0304, 0x0506_0708, LaneWidth::Byte, Xlen::Rv32), 70);
}

#[test]
fn dotup_halfword_sum() {
    // 3*5 + 2*4
    assert_eq!(dot::dot(DotOp::Up, 0x0002_0003, 0x0004_0005, LaneWidth::Half, Xlen::Rv32), 23);
}

#[test]
fn dot_signedness_variants() {
    // -1 * 2
    assert_eq!(dot::dot(DotOp::Sp, 0xFF, 0x02, LaneWidth::Byte, Xlen::Rv32), 0xFFFF_FFFE);
    // 255 * -1
    assert_eq!(dot::dot(DotOp::Usp, 0xFF, 0xFF, LaneWidth::Byte, Xlen::Rv32), 0xFFFF_FF01);
    // 255 * 255
    assert_eq!(dot::dot(DotOp::Up, 0xFF, 0xFF, LaneWidth::Byte, Xlen::Rv32), 0xFE01);
}

#[test]
fn dot_rv64_sign_extends_to_register() {
    assert_eq!(dot::dot(DotOp::Sp, 0xFF, 0x01, LaneWidth::Byte, Xlen::Rv64), u64::MAX);
    assert_eq!(
        dot::dot(DotOp::Up, 0x0101_0101_0101_0101, 0x0101_0101_0101_0101, LaneWidth::Byte, Xlen::Rv64),
        8
    );
}

proptest! {
    #[test]
    fn prop_dot_rv64_bytes_match_lane_model(a in any::<u64>(), b in any::<u64>()) {
        for op in [DotOp::Up, DotOp::Usp, DotOp::Sp] {
            let mut expected = 0i64;
            for i in 0..8 {
                let (x, y) = (lane(a, i, 8), lane(b, i, 8));
                let x = if op == DotOp::Sp { sext(x, 8) } else { x as i64 };
                let y = if op == DotOp::Up { y as i64 } else { sext(y, 8) };
                expected += x * y;
            }
            let r = dot::dot(op, a, b, LaneWidth::Byte, Xlen::Rv64);
            prop_assert_eq!(r, expected as u64, "{:?}", op);
        }
    }
}

#[test]
fn sdot_accumulates_and_wraps() {
    assert_eq!(
        dot::sdot(DotOp::Up, 0x0102_0304, 0x0506_0708, 100, LaneWidth::Byte, Xlen::Rv32),
        170
    );
    assert_eq!(dot::sdot(DotOp::Up, 1, 1, 0xFFFF_FFFF, LaneWidth::Byte, Xlen::Rv32), 0);
}

#[test]
fn dot_scalar_form() {
    // (1 + 2 + 3 + 4) * 2
    let r = dot::execute(
        DotOp::Up,
        0x0403_0201,
        0x0000_0002,
        0,
        LaneWidth::Byte,
        OperandForm::Scalar,
        Xlen::Rv32,
    );
    assert_eq!(r, 20);
}

// ═════════════════════════════════════════════════════════════════════════════
//  Shuffles
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn shuffle_reverses_bytes() {
    let r = shuffle::shuffle(0x4433_2211, 0x0001_0203, LaneWidth::Byte, Xlen::Rv32);
    assert_eq!(r, 0x1122_3344);
}

#[test]
fn shuffle_masks_indices() {
    // 0x07 & 3 = 3 for every lane
    let r = shuffle::shuffle(0x4433_2211, 0x0707_0707, LaneWidth::Byte, Xlen::Rv32);
    assert_eq!(r, 0x4444_4444);
}

#[test]
fn shuffle_halfwords() {
    let r = shuffle::shuffle(0xBBBB_AAAA, 0x0000_0001, LaneWidth::Half, Xlen::Rv32);
    assert_eq!(r, 0xAAAA_BBBB);
}

#[test]
fn shuffle_same_reads_packed_indices() {
    // Two-bit indices 3, 2, 1, 0 packed into the low byte of b
    let r = shuffle::shuffle_same(0x4433_2211, 0b00_01_10_11, LaneWidth::Byte, Xlen::Rv32);
    assert_eq!(r, 0x1122_3344);
}

#[test]
fn shuffle_last_from_takes_final_index_from_rd() {
    let r = shuffle::shuffle_last_from(0x4433_2211, 0, 2, Xlen::Rv32);
    assert_eq!(r, 0x3311_1111);
}

#[test]
fn shuffle2_selects_source_by_index_bit() {
    // Lane controls: 0x04 → a[0], 0x01 → c[1], 0x07 → a[3], 0x00 → c[0]
    let r = shuffle::shuffle2(0x4433_2211, 0x0007_0104, 0xDDCC_BBAA, LaneWidth::Byte, Xlen::Rv32);
    assert_eq!(r, 0xAA44_BB11);
}

proptest! {
    #[test]
    fn prop_identity_shuffle(a in any::<u64>()) {
        let r = shuffle::shuffle(a, 0x0706_0504_0302_0100, LaneWidth::Byte, Xlen::Rv64);
        prop_assert_eq!(r, a);
    }
}
