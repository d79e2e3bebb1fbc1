//! Generic bit-manipulation operations.
//!
//! Implements the scalar crypto/bit-manipulation primitives:
//! - carry-less multiply (`clmul`, `clmulr`),
//! - bit reversal within bytes (`brev8`),
//! - perfect shuffle (`zip`, `unzip`),
//! - crossbar permutation (`xperm4`, `xperm8`),
//! - rotate right (`ror`).
//!
//! Every function works on the low `W` bits of its operands and returns a
//! value truncated to `W` bits.

use crate::common::{Xlen, low_mask};

/// Stage masks of the perfect-shuffle network, one per stage shift (1, 2, 4, 8).
///
/// Each mask selects the bits that move left; the same mask shifted right by
/// the stage amount selects the bits that move right.
const SHUF_MASKS: [u64; 4] = [
    0x4444_4444_4444_4444,
    0x3030_3030_3030_3030,
    0x0F00_0F00_0F00_0F00,
    0x00FF_0000_00FF_0000,
];

/// Butterfly swap: moves `mask` bits left by `shift` and the rest right.
#[inline]
pub(crate) const fn do_swap(x: u64, mask: u64, shift: u32) -> u64 {
    ((x & mask) << shift) | ((x & !mask) >> shift)
}

/// One stage of the shuffle network. Bits outside both masks stay in place.
#[inline]
const fn shuf_stage(src: u64, mask_l: u64, mask_r: u64, shift: u32) -> u64 {
    let x = src & !(mask_l | mask_r);
    x | ((src << shift) & mask_l) | ((src >> shift) & mask_r)
}

/// Carry-less multiply, low half.
///
/// XORs `a << i` into the result for every set bit `i` of `b`.
pub fn clmul(a: u64, b: u64, xlen: Xlen) -> u64 {
    let a = xlen.truncate(a);
    let mut result = 0u64;
    for i in 0..xlen.bits() {
        if (b >> i) & 1 != 0 {
            result ^= a << i;
        }
    }
    xlen.truncate(result)
}

/// Carry-less multiply, reversed.
///
/// XORs `a >> (W - i - 1)` into the result for every set bit `i` of `b`,
/// yielding bits `[2W-2:W-1]` of the full carry-less product.
pub fn clmulr(a: u64, b: u64, xlen: Xlen) -> u64 {
    let a = xlen.truncate(a);
    let bits = xlen.bits();
    let mut result = 0u64;
    for i in 0..bits {
        if (b >> i) & 1 != 0 {
            result ^= a >> (bits - i - 1);
        }
    }
    xlen.truncate(result)
}

/// Reverses the bit order inside every byte.
pub fn brev8(a: u64, xlen: Xlen) -> u64 {
    let mut x = a;
    x = do_swap(x, 0x5555_5555_5555_5555, 1);
    x = do_swap(x, 0x3333_3333_3333_3333, 2);
    x = do_swap(x, 0x0F0F_0F0F_0F0F_0F0F, 4);
    xlen.truncate(x)
}

/// Perfect unshuffle: stages applied with increasing shift.
pub fn unzip(a: u64, xlen: Xlen) -> u64 {
    let mut x = xlen.truncate(a);
    for (stage, &mask) in SHUF_MASKS.iter().enumerate() {
        let shift = 1 << stage;
        x = shuf_stage(x, mask, mask >> shift, shift);
    }
    xlen.truncate(x)
}

/// Perfect shuffle: the exact inverse of [`unzip`] (stages in decreasing shift).
pub fn zip(a: u64, xlen: Xlen) -> u64 {
    let mut x = xlen.truncate(a);
    for (stage, &mask) in SHUF_MASKS.iter().enumerate().rev() {
        let shift = 1 << stage;
        x = shuf_stage(x, mask, mask >> shift, shift);
    }
    xlen.truncate(x)
}

/// Crossbar permutation over groups of `1 << sz_log2` bits.
///
/// Each group of `b` is an index into the groups of `a`. Indices that point
/// past the register width select zero.
pub fn xperm(a: u64, b: u64, sz_log2: u32, xlen: Xlen) -> u64 {
    let bits = xlen.bits();
    let sz_log2 = sz_log2.min(5);
    let sz = 1u32 << sz_log2;
    let mask = low_mask(sz);
    let mut result = 0u64;
    let mut i = 0;
    while i < bits {
        let pos = ((b >> i) & mask) << sz_log2;
        if pos < u64::from(bits) {
            result |= ((a >> pos) & mask) << i;
        }
        i += sz;
    }
    xlen.truncate(result)
}

/// Nibble crossbar permutation.
#[inline]
pub fn xperm4(a: u64, b: u64, xlen: Xlen) -> u64 {
    xperm(a, b, 2, xlen)
}

/// Byte crossbar permutation.
#[inline]
pub fn xperm8(a: u64, b: u64, xlen: Xlen) -> u64 {
    xperm(a, b, 3, xlen)
}

/// Rotate right within the register width.
///
/// The rotation amount is masked to `log2(W)` bits, so a rotation by 0 (or by
/// a multiple of `W`) returns `a` unchanged.
pub fn ror(a: u64, b: u64, xlen: Xlen) -> u64 {
    let shift = xlen.shamt(b);
    match xlen {
        Xlen::Rv32 => u64::from((a as u32).rotate_right(shift)),
        Xlen::Rv64 => a.rotate_right(shift),
    }
}
