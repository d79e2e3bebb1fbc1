//! Fixed-point multiply and saturation.
//!
//! Implements the Q-format helpers of the DSP extension:
//! - scaled 16×16 multiply (`mulN`, `mulhhN`) with optional rounding (`mulRN`),
//! - scaled multiply-accumulate (`macN`, `macRN`),
//! - saturating clip to a power-of-two range (`clip`, `clipu`) or to a
//!   register bound (`clipr`, `clipur`).
//!
//! Rounding adds `1 << (shift - 1)` before the right shift. The accumulated
//! sum wraps at `W` bits and is reinterpreted at `W` bits (signed or unsigned)
//! before shifting, matching a `W`-bit datapath.

use crate::common::{Lane, LaneWidth, Signedness, Xlen};
use crate::isa::ops::Half;

/// Bit position of the upper 16-bit half.
const HIGH_HALF_SHIFT: u32 = 16;

/// Selected 16-bit half of `word`, widened according to `sign`.
#[inline]
fn half_of(word: u64, half: Half, sign: Signedness) -> i64 {
    let raw = match half {
        Half::Low => word,
        Half::High => word >> HIGH_HALF_SHIFT,
    };
    Lane::new(raw, LaneWidth::Half).value(sign)
}

/// Shared multiply/accumulate/round/shift datapath.
#[allow(clippy::too_many_arguments)]
fn scaled(
    a: u64,
    b: u64,
    acc: u64,
    shift: u32,
    half: Half,
    sign: Signedness,
    round: bool,
    xlen: Xlen,
) -> u64 {
    let shift = xlen.shamt(u64::from(shift));
    let product = half_of(a, half, sign) * half_of(b, half, sign);
    let bias = if round && shift > 0 { 1i64 << (shift - 1) } else { 0 };
    let sum = (acc as i64).wrapping_add(product).wrapping_add(bias) as u64;
    match sign {
        Signedness::Signed => xlen.truncate((xlen.sext(sum) >> shift) as u64),
        Signedness::Unsigned => xlen.truncate(sum) >> shift,
    }
}

/// `(a_h * b_h) >> shift`.
///
/// # Examples
///
/// ```
/// use xpulp_core::common::{Signedness, Xlen};
/// use xpulp_core::isa::Half;
/// use xpulp_core::units::fixed_point;
///
/// // Q15: 0.5 * 0.5 = 0.25
/// let r = fixed_point::mul_n(0x4000, 0x4000, 15, Half::Low, Signedness::Signed, Xlen::Rv32);
/// assert_eq!(r, 0x2000);
/// ```
pub fn mul_n(a: u64, b: u64, shift: u32, half: Half, sign: Signedness, xlen: Xlen) -> u64 {
    scaled(a, b, 0, shift, half, sign, false, xlen)
}

/// `(a_h * b_h + 2^(shift-1)) >> shift`. A zero shift adds no rounding bias.
pub fn mul_rn(a: u64, b: u64, shift: u32, half: Half, sign: Signedness, xlen: Xlen) -> u64 {
    scaled(a, b, 0, shift, half, sign, true, xlen)
}

/// `(c + a_h * b_h) >> shift`.
pub fn mac_n(
    a: u64,
    b: u64,
    c: u64,
    shift: u32,
    half: Half,
    sign: Signedness,
    xlen: Xlen,
) -> u64 {
    scaled(a, b, c, shift, half, sign, false, xlen)
}

/// `(c + a_h * b_h + 2^(shift-1)) >> shift`.
pub fn mac_rn(
    a: u64,
    b: u64,
    c: u64,
    shift: u32,
    half: Half,
    sign: Signedness,
    xlen: Xlen,
) -> u64 {
    scaled(a, b, c, shift, half, sign, true, xlen)
}

/// Saturates `v` into `[min, max]`. The lower bound is tested first, so an
/// inverted range (possible with a negative `clipr` bound) resolves to `min`.
#[inline]
fn saturate(v: i64, min: i64, max: i64, xlen: Xlen) -> u64 {
    let r = if v <= min {
        min
    } else if v >= max {
        max
    } else {
        v
    };
    xlen.truncate(r as u64)
}

/// Upper bound `2^(width-1) - 1`, or 0 for a zero width.
#[inline]
const fn pow2_max(width: u32) -> i64 {
    if width == 0 {
        0
    } else {
        (1i64 << (width - 1)) - 1
    }
}

/// Signed clip into `[-2^(width-1), 2^(width-1) - 1]`.
///
/// `width == 0` degenerates to `[-1, 0]`.
///
/// # Examples
///
/// ```
/// use xpulp_core::common::Xlen;
/// use xpulp_core::units::fixed_point;
///
/// assert_eq!(fixed_point::clip(-129i64 as u64, 8, Xlen::Rv64), -128i64 as u64);
/// assert_eq!(fixed_point::clip(128, 8, Xlen::Rv64), 127);
/// ```
pub fn clip(a: u64, width: u32, xlen: Xlen) -> u64 {
    let width = xlen.field(width);
    let max = pow2_max(width);
    saturate(xlen.sext(a), -max - 1, max, xlen)
}

/// Clip into `[0, 2^(width-1) - 1]`, comparing `a` as a signed value.
pub fn clipu(a: u64, width: u32, xlen: Xlen) -> u64 {
    let width = xlen.field(width);
    saturate(xlen.sext(a), 0, pow2_max(width), xlen)
}

/// Signed clip into `[-(bound + 1), bound]`.
pub fn clipr(a: u64, bound: u64, xlen: Xlen) -> u64 {
    let max = xlen.sext(bound);
    saturate(xlen.sext(a), max.wrapping_add(1).wrapping_neg(), max, xlen)
}

/// Clip into `[0, bound]`, comparing `a` as a signed value.
pub fn clipur(a: u64, bound: u64, xlen: Xlen) -> u64 {
    saturate(xlen.sext(a), 0, xlen.sext(bound), xlen)
}
