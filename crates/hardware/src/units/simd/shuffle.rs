//! Lane shuffles.
//!
//! Every output lane copies one lane of a source operand. Lane indices are
//! masked to `log2(passes)` bits, so any control value selects a valid lane.

use super::map3;
use crate::common::{LaneWidth, Xlen};

/// `out[i] = a[b[i] mod passes]`.
pub fn shuffle(a: u64, b: u64, width: LaneWidth, xlen: Xlen) -> u64 {
    let sel = width.passes(xlen) - 1;
    map3(a, b, 0, width, xlen, |i, va, vb, _| {
        va.get(vb.get(i).unsigned() as usize & sel).unsigned()
    })
}

/// Same-control shuffle: every index is read from the low bits of `b`.
///
/// Output lane `i` uses bits `[i*k + k - 1 : i*k]` of `b`, `k = log2(passes)`.
/// On RV32 these bits all lie in lane 0 of `b`.
pub fn shuffle_same(a: u64, b: u64, width: LaneWidth, xlen: Xlen) -> u64 {
    let sel = width.passes(xlen) - 1;
    let k = width.index_bits(xlen);
    map3(a, b, 0, width, xlen, |i, va, _, _| {
        let idx = (b >> (i as u32 * k)) as usize & sel;
        va.get(idx).unsigned()
    })
}

/// Byte shuffle whose last lane index is taken from `c`.
///
/// Lanes below the last one behave as in [`shuffle_same`].
pub fn shuffle_last_from(a: u64, b: u64, c: u64, xlen: Xlen) -> u64 {
    let width = LaneWidth::Byte;
    let passes = width.passes(xlen);
    let sel = passes - 1;
    let k = width.index_bits(xlen);
    map3(a, b, c, width, xlen, |i, va, _, _| {
        let control = if i == passes - 1 {
            c
        } else {
            b >> (i as u32 * k)
        };
        va.get(control as usize & sel).unsigned()
    })
}

/// Two-source shuffle.
///
/// Lane `i` of `b` holds an index in its low `log2(passes)` bits and a source
/// selector in the next bit: 1 picks from `a`, 0 picks from `c`.
pub fn shuffle2(a: u64, b: u64, c: u64, width: LaneWidth, xlen: Xlen) -> u64 {
    let sel = width.passes(xlen) - 1;
    let k = width.index_bits(xlen);
    map3(a, b, c, width, xlen, |i, va, vb, vc| {
        let control = vb.get(i).unsigned();
        let source = if (control >> k) & 1 == 1 { va } else { vc };
        source.get(control as usize & sel).unsigned()
    })
}
