//! Packed-SIMD lane engine.
//!
//! Splits operands into byte or halfword lanes, applies a per-lane operator,
//! and reassembles the lanes in their original order. The number of lanes
//! (`passes`) is `W / lane_bits`.
//!
//! Operations are organized into submodules by category:
//! - [`lanewise`]: element-wise operators dispatched on [`LaneOp`]
//! - [`dot`]:      dot products with scalar accumulation
//! - [`shuffle`]:  lane permutations (single-, same-control and two-source)

/// Dot-product reductions.
pub mod dot;

/// Element-wise lane operators.
pub mod lanewise;

/// Lane shuffles.
pub mod shuffle;

use crate::common::{Lane, LaneWidth, Lanes, Xlen};
use crate::isa::ops::{LaneOp, OperandForm};

/// Two-source lane map.
///
/// `op` receives lane `i` of `a` and lane `i` of `b`; its result is truncated
/// to the lane width and stored in lane `i` of the output.
pub fn map2<F>(a: u64, b: u64, width: LaneWidth, xlen: Xlen, op: F) -> u64
where
    F: Fn(Lane, Lane) -> u64,
{
    let va = Lanes::unpack(a, width, xlen);
    let vb = Lanes::unpack(b, width, xlen);
    let mut out = Lanes::zeroed(width, xlen);
    for (i, (x, y)) in va.iter().zip(vb.iter()).enumerate() {
        out.set(i, op(x, y));
    }
    out.pack()
}

/// Three-source lane map.
///
/// `op` receives the output lane index and full views of all three sources,
/// so a lane may draw from any position of any operand.
pub fn map3<F>(a: u64, b: u64, c: u64, width: LaneWidth, xlen: Xlen, op: F) -> u64
where
    F: Fn(usize, &Lanes, &Lanes, &Lanes) -> u64,
{
    let va = Lanes::unpack(a, width, xlen);
    let vb = Lanes::unpack(b, width, xlen);
    let vc = Lanes::unpack(c, width, xlen);
    let mut out = Lanes::zeroed(width, xlen);
    for i in 0..out.len() {
        out.set(i, op(i, &va, &vb, &vc));
    }
    out.pack()
}

/// Folds lane pairs into one scalar, starting from `init`.
///
/// The accumulator is a full register, not a lane: the result is truncated to
/// `W` bits only once the fold completes.
pub fn fold2<F>(a: u64, b: u64, width: LaneWidth, xlen: Xlen, init: u64, op: F) -> u64
where
    F: Fn(u64, Lane, Lane) -> u64,
{
    let va = Lanes::unpack(a, width, xlen);
    let vb = Lanes::unpack(b, width, xlen);
    let acc = va.iter().zip(vb.iter()).fold(init, |acc, (x, y)| op(acc, x, y));
    xlen.truncate(acc)
}

/// Replicates lane 0 of `b` into every lane.
pub fn broadcast(b: u64, width: LaneWidth, xlen: Xlen) -> u64 {
    let lane = b & width.mask();
    let mut out = Lanes::zeroed(width, xlen);
    for i in 0..out.len() {
        out.set(i, lane);
    }
    out.pack()
}

/// Resolves the second operand according to its form.
#[inline]
pub fn second_operand(b: u64, width: LaneWidth, form: OperandForm, xlen: Xlen) -> u64 {
    match form {
        OperandForm::Vector => b,
        OperandForm::Scalar => broadcast(b, width, xlen),
    }
}

/// Executes a lane-wise operation with a vector second operand.
///
/// # Examples
///
/// ```
/// use xpulp_core::common::{LaneWidth, Xlen};
/// use xpulp_core::isa::LaneOp;
/// use xpulp_core::units::simd;
///
/// // Signed byte maximum: lane 0 compares 0x80 (-128) with 0x01.
/// let r = simd::execute(LaneOp::Max, 0x0000_0080, 0x0000_0001, LaneWidth::Byte, Xlen::Rv32);
/// assert_eq!(r, 0x0000_0001);
///
/// // Unsigned maximum keeps 0x80.
/// let r = simd::execute(LaneOp::Maxu, 0x0000_0080, 0x0000_0001, LaneWidth::Byte, Xlen::Rv32);
/// assert_eq!(r, 0x0000_0080);
/// ```
pub fn execute(op: LaneOp, a: u64, b: u64, width: LaneWidth, xlen: Xlen) -> u64 {
    map2(a, b, width, xlen, |x, y| lanewise::apply(op, x, y))
}

/// Executes a lane-wise operation with lane 0 of `b` replicated (`.sc` form).
pub fn execute_sc(op: LaneOp, a: u64, b: u64, width: LaneWidth, xlen: Xlen) -> u64 {
    execute(op, a, broadcast(b, width, xlen), width, xlen)
}
