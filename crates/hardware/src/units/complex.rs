//! Packed complex arithmetic.
//!
//! A complex number occupies bits `[31:0]` of a register as two signed 16-bit
//! lanes: real part in lane 0, imaginary part in lane 1. Intermediate sums and
//! products are computed wide and truncated back to 16 bits.

use crate::common::{Lane, LaneWidth, Xlen};

/// Bit position of the imaginary lane.
const IMAG_SHIFT: u32 = 16;

/// Mask of one 16-bit lane.
const LANE_MASK: u64 = 0xFFFF;

/// Fractional bits of a Q15 product.
const Q15_SHIFT: u32 = 15;

/// Signed real and imaginary parts of `word`.
#[inline]
fn parts(word: u64) -> (i64, i64) {
    (
        Lane::new(word, LaneWidth::Half).signed(),
        Lane::new(word >> IMAG_SHIFT, LaneWidth::Half).signed(),
    )
}

/// Packs a real and imaginary part into bits `[31:0]`.
#[inline]
fn pack(re: i64, im: i64) -> u64 {
    (re as u64 & LANE_MASK) | ((im as u64 & LANE_MASK) << IMAG_SHIFT)
}

/// Complex subtraction rotated by -j: `{ (a.im - b.im) >> shift, (b.re - a.re) >> shift }`.
///
/// The radix-4 FFT butterfly step. `shift` is the `div2`/`div4`/`div8` scaling.
pub fn subrotmj(a: u64, b: u64, shift: u32) -> u64 {
    let (a_re, a_im) = parts(a);
    let (b_re, b_im) = parts(b);
    let shift = shift.min(31);
    pack((a_im - b_im) >> shift, (b_re - a_re) >> shift)
}

/// Real part of `a * b`, scaled by `2^-(15 + shift)`.
///
/// Only lane 0 is written; every other bit comes from `c`.
pub fn cplxmul_r(a: u64, b: u64, c: u64, shift: u32, xlen: Xlen) -> u64 {
    let (a_re, a_im) = parts(a);
    let (b_re, b_im) = parts(b);
    let re = (a_re * b_re - a_im * b_im) >> Q15_SHIFT.saturating_add(shift).min(63);
    xlen.truncate((c & !LANE_MASK) | (re as u64 & LANE_MASK))
}

/// Imaginary part of `a * b`, scaled by `2^-(15 + shift)`.
///
/// Only lane 1 is written; every other bit comes from `c`.
pub fn cplxmul_i(a: u64, b: u64, c: u64, shift: u32, xlen: Xlen) -> u64 {
    let (a_re, a_im) = parts(a);
    let (b_re, b_im) = parts(b);
    let im = (a_re * b_im + a_im * b_re) >> Q15_SHIFT.saturating_add(shift).min(63);
    let lane = LANE_MASK << IMAG_SHIFT;
    xlen.truncate((c & !lane) | ((im as u64 & LANE_MASK) << IMAG_SHIFT))
}

/// Complex conjugate `{ a.re, -a.im }`. Negating `-32768` wraps to itself.
pub fn cplxconj(a: u64) -> u64 {
    let (re, im) = parts(a);
    pack(re, im.wrapping_neg())
}
