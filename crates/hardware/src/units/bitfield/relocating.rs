//! Relocating-window bitfield family.
//!
//! These operations work inside a fixed 32-bit window and never fail. A field
//! that would run past bit 31 is moved down rather than clamped:
//!
//! ```text
//! width' = min(width, 32)
//! lsb    = max(0, offset + width' - 32)
//! start  = offset - lsb
//! ```
//!
//! The field occupies `[start, start + width')` and is built by shifting
//! `rs1` left by `start`. Unlike [`super::BitfieldSpec`] immediates, `width` is
//! the field size itself, so a zero-width field is legal and touches nothing.

use super::BitfieldSpec;
use crate::common::{Xlen, low_mask};

/// Width of the window the field must fit in.
pub const WINDOW_BITS: u32 = 32;

/// Start bit and width of the relocated field.
pub fn window(spec: BitfieldSpec) -> (u32, u32) {
    let width = spec.width.min(WINDOW_BITS);
    let end = u64::from(spec.offset) + u64::from(width);
    let lsb = end.saturating_sub(u64::from(WINDOW_BITS));
    ((u64::from(spec.offset) - lsb) as u32, width)
}

/// Mask of the relocated field.
#[inline]
fn window_mask(spec: BitfieldSpec) -> u64 {
    let (start, width) = window(spec);
    low_mask(width).checked_shl(start).unwrap_or(0)
}

/// Clears the relocated field.
pub fn bclr(rs1: u64, spec: BitfieldSpec, xlen: Xlen) -> u64 {
    xlen.truncate(rs1 & !window_mask(spec))
}

/// Sets every bit of the relocated field.
pub fn bset(rs1: u64, spec: BitfieldSpec, xlen: Xlen) -> u64 {
    xlen.truncate(rs1 | window_mask(spec))
}

/// Inserts the low bits of `rs1` into `rd` at the relocated field.
pub fn insert(rs1: u64, spec: BitfieldSpec, rd: u64, xlen: Xlen) -> u64 {
    let (start, _) = window(spec);
    let mask = window_mask(spec);
    let value = rs1.checked_shl(start).unwrap_or(0);
    xlen.truncate((rd & !mask) | (value & mask))
}
