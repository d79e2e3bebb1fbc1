//! Dot-product reductions.
//!
//! `dot*` instructions multiply matching lanes and sum the products into one
//! scalar; `sdot*` instructions additionally add the previous destination
//! value. Sums wrap modulo `2^W`.

use super::{fold2, second_operand};
use crate::common::{LaneWidth, Xlen};
use crate::isa::ops::{DotOp, OperandForm};

/// Sum of lane products added to `acc`.
pub fn sdot(op: DotOp, a: u64, b: u64, acc: u64, width: LaneWidth, xlen: Xlen) -> u64 {
    let (sign_a, sign_b) = op.signedness();
    fold2(a, b, width, xlen, acc, |sum, x, y| {
        let product = x.value(sign_a).wrapping_mul(y.value(sign_b));
        sum.wrapping_add(product as u64)
    })
}

/// Sum of lane products.
///
/// # Examples
///
/// ```
/// use xpulp_core::common::{LaneWidth, Xlen};
/// use xpulp_core::isa::DotOp;
/// use xpulp_core::units::simd::dot;
///
/// // 1*5 + 2*6 + 3*7 + 4*8
/// let r = dot::dot(DotOp::Up, 0x0403_0201, 0x0807_0605, LaneWidth::Byte, Xlen::Rv32);
/// assert_eq!(r, 70);
/// ```
pub fn dot(op: DotOp, a: u64, b: u64, width: LaneWidth, xlen: Xlen) -> u64 {
    sdot(op, a, b, 0, width, xlen)
}

/// Dot product with either a vector or a replicated second operand.
pub fn execute(
    op: DotOp,
    a: u64,
    b: u64,
    acc: u64,
    width: LaneWidth,
    form: OperandForm,
    xlen: Xlen,
) -> u64 {
    sdot(op, a, second_operand(b, width, form, xlen), acc, width, xlen)
}
