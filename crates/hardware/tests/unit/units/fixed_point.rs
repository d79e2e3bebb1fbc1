//! Fixed-Point Unit Tests
//!
//! Scaled 16×16 multiplies (Q-format), multiply-accumulate with and without
//! rounding, and the four clip variants at their range boundaries.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use xpulp_core::common::{Signedness, Xlen};
use xpulp_core::isa::Half;
use xpulp_core::units::fixed_point::{clip, clipr, clipu, clipur, mac_n, mac_rn, mul_n, mul_rn};

const S: Signedness = Signedness::Signed;
const U: Signedness = Signedness::Unsigned;

/// Two's complement encoding of `v` in a 32-bit register.
fn w32(v: i64) -> u64 {
    v as u64 & 0xFFFF_FFFF
}

// ═════════════════════════════════════════════════════════════════════════════
//  Multiply
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn q15_half_times_half() {
    assert_eq!(mul_n(0x4000, 0x4000, 15, Half::Low, S, Xlen::Rv32), 0x2000);
}

#[test]
fn q15_negative_product() {
    assert_eq!(mul_n(0xC000, 0x4000, 15, Half::Low, S, Xlen::Rv32), w32(-0x2000));
    assert_eq!(mul_n(0xC000, 0x4000, 15, Half::Low, S, Xlen::Rv64), (-0x2000i64) as u64);
}

#[test]
fn operand_signedness() {
    assert_eq!(mul_n(0xFFFF, 0x0002, 0, Half::Low, U, Xlen::Rv32), 0x1_FFFE);
    assert_eq!(mul_n(0xFFFF, 0x0002, 0, Half::Low, S, Xlen::Rv32), w32(-2));
}

#[test]
fn high_half_operands() {
    assert_eq!(mul_n(0x0003_0000, 0x0005_0000, 0, Half::High, S, Xlen::Rv32), 15);
    assert_eq!(mul_n(0x0003_0007, 0x0005_0009, 0, Half::Low, S, Xlen::Rv32), 63);
}

#[rstest]
#[case(3, 1, 1, 1, 2)]
#[case(5, 1, 2, 1, 1)]
#[case(6, 1, 2, 1, 2)]
#[case(3, 1, 0, 3, 3)]
fn rounding_bias(
    #[case] a: u64,
    #[case] b: u64,
    #[case] shift: u32,
    #[case] truncated: u64,
    #[case] rounded: u64,
) {
    assert_eq!(mul_n(a, b, shift, Half::Low, S, Xlen::Rv32), truncated);
    assert_eq!(mul_rn(a, b, shift, Half::Low, S, Xlen::Rv32), rounded);
}

#[test]
fn signed_rounding_goes_toward_positive_infinity_at_half() {
    // -3 / 2 = -1.5: floor gives -2, rounding gives -1
    assert_eq!(mul_n(0xFFFD, 1, 1, Half::Low, S, Xlen::Rv32), w32(-2));
    assert_eq!(mul_rn(0xFFFD, 1, 1, Half::Low, S, Xlen::Rv32), w32(-1));
}

// ═════════════════════════════════════════════════════════════════════════════
//  Multiply-accumulate
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn mac_adds_accumulator_before_shift() {
    assert_eq!(mac_n(2, 3, 10, 0, Half::Low, S, Xlen::Rv32), 16);
    // (1 + 2) >> 2 = 0; (1 + 2 + 2) >> 2 = 1
    assert_eq!(mac_n(1, 2, 1, 2, Half::Low, S, Xlen::Rv32), 0);
    assert_eq!(mac_rn(1, 2, 1, 2, Half::Low, S, Xlen::Rv32), 1);
}

#[test]
fn mac_sum_wraps_at_register_width() {
    assert_eq!(mac_n(1, 1, 0xFFFF_FFFF, 0, Half::Low, S, Xlen::Rv32), 0);
    assert_eq!(mac_n(1, 1, 0xFFFF_FFFF, 0, Half::Low, U, Xlen::Rv32), 0);
}

#[test]
fn mac_sum_shift_follows_signedness() {
    assert_eq!(mac_n(0, 0, 0xFFFF_FFF0, 2, Half::Low, S, Xlen::Rv32), w32(-4));
    assert_eq!(mac_n(0, 0, 0xFFFF_FFF0, 2, Half::Low, U, Xlen::Rv32), 0x3FFF_FFFC);
}

#[test]
fn mac_high_half() {
    assert_eq!(mac_n(0x0002_0000, 0x0003_0000, 4, 1, Half::High, U, Xlen::Rv32), 5);
}

proptest! {
    #[test]
    fn prop_unscaled_signed_mul_is_exact(a in any::<i16>(), b in any::<i16>()) {
        let r = mul_n(a as u16 as u64, b as u16 as u64, 0, Half::Low, S, Xlen::Rv64);
        prop_assert_eq!(r as i64, i64::from(a) * i64::from(b));
    }
}

// ═════════════════════════════════════════════════════════════════════════════
//  Clip
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
#[case(-129, 8, -128)]
#[case(-128, 8, -128)]
#[case(-127, 8, -127)]
#[case(126, 8, 126)]
#[case(127, 8, 127)]
#[case(128, 8, 127)]
#[case(5, 0, 0)]
#[case(-5, 0, -1)]
#[case(5, 1, 0)]
#[case(-5, 1, -1)]
fn clip_signed_range(#[case] a: i64, #[case] width: u32, #[case] expected: i64) {
    assert_eq!(clip(w32(a), width, Xlen::Rv32), w32(expected));
}

#[test]
fn clip_rv64_scenario() {
    assert_eq!(clip((-129i64) as u64, 8, Xlen::Rv64), (-128i64) as u64);
    assert_eq!(clip(128, 8, Xlen::Rv64), 127);
}

#[rstest]
#[case(-5, 8, 0)]
#[case(0, 8, 0)]
#[case(100, 8, 100)]
#[case(127, 8, 127)]
#[case(300, 8, 127)]
#[case(5, 0, 0)]
fn clipu_range(#[case] a: i64, #[case] width: u32, #[case] expected: i64) {
    assert_eq!(clipu(w32(a), width, Xlen::Rv32), w32(expected));
}

#[rstest]
#[case(200, 100, 100)]
#[case(100, 100, 100)]
#[case(50, 100, 50)]
#[case(-100, 100, -100)]
#[case(-101, 100, -101)]
#[case(-200, 100, -101)]
fn clipr_register_bound(#[case] a: i64, #[case] bound: i64, #[case] expected: i64) {
    assert_eq!(clipr(w32(a), w32(bound), Xlen::Rv32), w32(expected));
}

#[rstest]
#[case(-1, 100, 0)]
#[case(0, 100, 0)]
#[case(99, 100, 99)]
#[case(200, 100, 100)]
fn clipur_register_bound(#[case] a: i64, #[case] bound: i64, #[case] expected: i64) {
    assert_eq!(clipur(w32(a), w32(bound), Xlen::Rv32), w32(expected));
}

#[test]
fn clip_lower_bound_checked_first() {
    // Empty range [0, -5]: 0 hits the lower bound before the upper one.
    assert_eq!(clipur(0, w32(-5), Xlen::Rv32), 0);
    assert_eq!(clipur(3, w32(-5), Xlen::Rv32), w32(-5));
}

proptest! {
    #[test]
    fn prop_clip_result_in_range(a in any::<i32>(), width in 1u32..32) {
        let r = clip(w32(i64::from(a)), width, Xlen::Rv32);
        let v = r as u32 as i32 as i64;
        let max = (1i64 << (width - 1)) - 1;
        prop_assert!(v >= -max - 1 && v <= max);
    }
}
