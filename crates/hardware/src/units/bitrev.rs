//! Bit-reversal addressing and bit counting.
//!
//! `bitrev` produces FFT bit-reversed addresses for radix 2, 4 and 8: the
//! operand is shifted left so the address sits at the top of the register,
//! then the order of its 1-, 2- or 3-bit digits is reversed. The find/count
//! helpers return `W` for "not found" on an all-zero input.

use super::bitmanip::do_swap;
use crate::common::Xlen;

/// Butterfly masks selecting the lower block of each `2s`-bit group, indexed
/// by `log2(s)`.
const SWAP_MASKS: [u64; 6] = [
    0x5555_5555_5555_5555,
    0x3333_3333_3333_3333,
    0x0F0F_0F0F_0F0F_0F0F,
    0x00FF_00FF_00FF_00FF,
    0x0000_FFFF_0000_FFFF,
    0x0000_0000_FFFF_FFFF,
];

/// Bits per radix-8 digit.
const RADIX8_DIGIT_BITS: u32 = 3;

/// Digit size for a radix selector: 0 → 1 bit, 1 → 2 bits, 2 → 3 bits.
///
/// Any other selector falls back to radix 2.
pub fn digit_bits(radix_log2: u32) -> u32 {
    match radix_log2 {
        0 => 1,
        1 => 2,
        2 => RADIX8_DIGIT_BITS,
        other => {
            tracing::trace!(radix_log2 = other, "unknown radix, using radix 2");
            1
        }
    }
}

/// Reverses the order of `g`-bit digits, `g` a power of two.
fn reverse_pow2_digits(x: u64, g: u32, xlen: Xlen) -> u64 {
    let mut x = x;
    let mut s = g;
    while s < xlen.bits() {
        x = do_swap(x, SWAP_MASKS[s.trailing_zeros() as usize], s);
        s <<= 1;
    }
    xlen.truncate(x)
}

/// Reverses the order of 3-bit digits aligned to the top of the register.
///
/// Digit `j` counted from the MSB moves to digit `j` counted from the LSB.
/// The `W mod 3` low bits left over below the last whole digit are dropped.
fn reverse_radix8_digits(x: u64, xlen: Xlen) -> u64 {
    let bits = xlen.bits();
    let digits = bits / RADIX8_DIGIT_BITS;
    (0..digits).fold(0u64, |acc, j| {
        let src = bits - RADIX8_DIGIT_BITS * (j + 1);
        let digit = (x >> src) & 0b111;
        acc | (digit << (RADIX8_DIGIT_BITS * j))
    })
}

/// Bit-reversed address: `a << shift`, then digit-order reversal.
///
/// # Examples
///
/// ```
/// use xpulp_core::common::Xlen;
/// use xpulp_core::units::bitrev;
///
/// // 8-point radix-2 FFT: index 0b001 maps to 0b100.
/// assert_eq!(bitrev::bitrev(0b001, 29, 0, Xlen::Rv32), 0b100);
/// // 16-point radix-4 FFT: digits [01][10] become [10][01].
/// assert_eq!(bitrev::bitrev(0b0110, 28, 1, Xlen::Rv32), 0b1001);
/// ```
pub fn bitrev(a: u64, shift: u32, radix_log2: u32, xlen: Xlen) -> u64 {
    let x = xlen.truncate(a << xlen.shamt(u64::from(shift)));
    match digit_bits(radix_log2) {
        RADIX8_DIGIT_BITS => reverse_radix8_digits(x, xlen),
        g => reverse_pow2_digits(x, g, xlen),
    }
}

/// Index of the lowest set bit, or `W` when `a` is zero.
pub fn ff1(a: u64, xlen: Xlen) -> u64 {
    let x = xlen.truncate(a);
    if x == 0 {
        u64::from(xlen.bits())
    } else {
        u64::from(x.trailing_zeros())
    }
}

/// Index of the highest set bit, or `W` when `a` is zero.
pub fn fl1(a: u64, xlen: Xlen) -> u64 {
    let x = xlen.truncate(a);
    if x == 0 {
        u64::from(xlen.bits())
    } else {
        u64::from(63 - x.leading_zeros())
    }
}

/// Leading zeros within the register width (`W` for zero).
pub fn clz(a: u64, xlen: Xlen) -> u64 {
    let x = xlen.truncate(a);
    u64::from(x.leading_zeros() - (64 - xlen.bits()))
}

/// Redundant leading sign bits: run length of bits equal to the MSB, minus one.
///
/// Zero yields 0.
pub fn clb(a: u64, xlen: Xlen) -> u64 {
    let x = xlen.truncate(a);
    if x == 0 {
        return 0;
    }
    let v = xlen.sext(x);
    let run = if v < 0 { (!v).leading_zeros() } else { v.leading_zeros() };
    u64::from(run - (64 - xlen.bits()) - 1)
}

/// Population count.
pub fn cnt(a: u64, xlen: Xlen) -> u64 {
    u64::from(xlen.truncate(a).count_ones())
}
