//! Element-wise lane operators.
//!
//! Each operator sees one lane of `a` and the matching lane of `b` and
//! returns the new lane value. Results wider than the lane are truncated by
//! the engine. Comparisons produce an all-ones lane when the predicate holds.
//!
//! Shift amounts come from the lane of `b` and are masked to `lane_bits - 1`
//! (3 bits for bytes, 4 bits for halfwords).

use crate::common::Lane;
use crate::isa::ops::LaneOp;

/// Per-lane shift amount, masked to the lane width.
#[inline]
fn lane_shamt(y: Lane) -> u32 {
    let raw = y.unsigned();
    let masked = raw & u64::from(y.width().shamt_mask());
    if raw != masked {
        tracing::trace!(raw, masked, "lane shift amount masked");
    }
    masked as u32
}

/// Applies `op` to one lane pair.
pub fn apply(op: LaneOp, x: Lane, y: Lane) -> u64 {
    let ones = x.width().mask();
    let flag = |cond: bool| if cond { ones } else { 0 };
    match op {
        LaneOp::Add => x.unsigned().wrapping_add(y.unsigned()),
        LaneOp::Sub => x.unsigned().wrapping_sub(y.unsigned()),
        LaneOp::Avg => ((x.signed() + y.signed()) >> 1) as u64,
        LaneOp::Avgu => (x.unsigned() + y.unsigned()) >> 1,
        LaneOp::Min => x.signed().min(y.signed()) as u64,
        LaneOp::Minu => x.unsigned().min(y.unsigned()),
        LaneOp::Max => x.signed().max(y.signed()) as u64,
        LaneOp::Maxu => x.unsigned().max(y.unsigned()),
        LaneOp::Srl => x.unsigned() >> lane_shamt(y),
        LaneOp::Sra => (x.signed() >> lane_shamt(y)) as u64,
        LaneOp::Sll => x.unsigned() << lane_shamt(y),
        LaneOp::Or => x.unsigned() | y.unsigned(),
        LaneOp::Xor => x.unsigned() ^ y.unsigned(),
        LaneOp::And => x.unsigned() & y.unsigned(),
        LaneOp::Abs => x.signed().unsigned_abs(),
        LaneOp::Cmpeq => flag(x.unsigned() == y.unsigned()),
        LaneOp::Cmpne => flag(x.unsigned() != y.unsigned()),
        LaneOp::Cmpgt => flag(x.signed() > y.signed()),
        LaneOp::Cmpge => flag(x.signed() >= y.signed()),
        LaneOp::Cmplt => flag(x.signed() < y.signed()),
        LaneOp::Cmple => flag(x.signed() <= y.signed()),
        LaneOp::Cmpgtu => flag(x.unsigned() > y.unsigned()),
        LaneOp::Cmpgeu => flag(x.unsigned() >= y.unsigned()),
        LaneOp::Cmpltu => flag(x.unsigned() < y.unsigned()),
        LaneOp::Cmpleu => flag(x.unsigned() <= y.unsigned()),
    }
}
