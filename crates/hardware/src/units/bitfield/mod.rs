//! Bitfield manipulation.
//!
//! Implements extract (signed and unsigned), insert, clear and set on a
//! contiguous bit range `[offset, offset + width)`.
//!
//! Two addressing forms share one [`BitfieldSpec`]:
//! - **Immediate form:** `offset = Is2`, `width = Is3 + 1`, each immediate
//!   masked to `log2(W)` bits.
//! - **Register form:** `offset = rs2[4:0]`, `width = rs2[9:5] + 1`.
//!
//! A field whose end bit lies beyond the register is clamped: bits above `W`
//! are simply not part of the field. The only exception is the immediate-form
//! [`insert`], which rejects such a field with [`ExecError::InvalidOperand`].
//!
//! The [`relocating`] submodule holds a second, independent family that moves
//! an oversized field down instead of clamping it.

/// Relocating-window bitfield family.
pub mod relocating;

use crate::common::{ExecError, ExecResult, Xlen, low_mask, sign_extend};

/// Bit position of the width field in the register form.
const REG_WIDTH_SHIFT: u32 = 5;

/// Mask of each 5-bit field in the register form.
const REG_FIELD_MASK: u64 = 0x1F;

/// A contiguous bit range inside a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitfieldSpec {
    /// Least-significant bit of the field.
    pub offset: u32,
    /// Number of bits in the field.
    pub width: u32,
}

impl BitfieldSpec {
    /// A field of `width` bits starting at `offset`.
    #[inline]
    pub const fn new(offset: u32, width: u32) -> Self {
        Self { offset, width }
    }

    /// Decodes the immediate form: `is2` is the offset, `is3` is width - 1.
    pub fn from_immediates(is2: u32, is3: u32, xlen: Xlen) -> Self {
        Self {
            offset: xlen.field(is2),
            width: xlen.field(is3) + 1,
        }
    }

    /// Decodes the register form: offset in `rs2[4:0]`, width - 1 in `rs2[9:5]`.
    pub const fn from_register(rs2: u64) -> Self {
        Self {
            offset: (rs2 & REG_FIELD_MASK) as u32,
            width: ((rs2 >> REG_WIDTH_SHIFT) & REG_FIELD_MASK) as u32 + 1,
        }
    }

    /// One past the most-significant bit of the field, before clamping.
    #[inline]
    pub const fn end(self) -> u32 {
        self.offset.saturating_add(self.width)
    }

    /// True when the whole field lies inside the register.
    #[inline]
    pub const fn fits(self, xlen: Xlen) -> bool {
        self.end() <= xlen.bits()
    }

    /// Field mask, clamped to the register width.
    pub fn mask(self, xlen: Xlen) -> u64 {
        let mask = low_mask(self.width).checked_shl(self.offset).unwrap_or(0);
        xlen.truncate(mask)
    }
}

/// Field bits of `rs1` moved down to bit 0 (clamped, not extended).
#[inline]
fn field_bits(rs1: u64, spec: BitfieldSpec, xlen: Xlen) -> u64 {
    (xlen.truncate(rs1) & spec.mask(xlen))
        .checked_shr(spec.offset)
        .unwrap_or(0)
}

/// Signed extract: the field, sign-extended from bit `width - 1`.
///
/// Sign extension runs on a 64-bit intermediate whatever the register width.
/// A field clamped at the register top has a zero sign bit and therefore
/// reads as positive.
///
/// # Examples
///
/// ```
/// use xpulp_core::common::Xlen;
/// use xpulp_core::units::bitfield::{self, BitfieldSpec};
///
/// // Bits [11:8] of 0x0000_0F00 are 0b1111, i.e. -1 as a 4-bit value.
/// let spec = BitfieldSpec::new(8, 4);
/// assert_eq!(bitfield::extract(0x0F00, spec, Xlen::Rv32), 0xFFFF_FFFF);
/// assert_eq!(bitfield::extractu(0x0F00, spec, Xlen::Rv32), 0xF);
/// ```
pub fn extract(rs1: u64, spec: BitfieldSpec, xlen: Xlen) -> u64 {
    xlen.truncate(sign_extend(field_bits(rs1, spec, xlen), spec.width))
}

/// Unsigned extract: the field, zero-extended.
pub fn extractu(rs1: u64, spec: BitfieldSpec, xlen: Xlen) -> u64 {
    field_bits(rs1, spec, xlen)
}

/// Signed extract, register form.
pub fn extractr(rs1: u64, rs2: u64, xlen: Xlen) -> u64 {
    extract(rs1, BitfieldSpec::from_register(rs2), xlen)
}

/// Unsigned extract, register form.
pub fn extractur(rs1: u64, rs2: u64, xlen: Xlen) -> u64 {
    extractu(rs1, BitfieldSpec::from_register(rs2), xlen)
}

/// Places the low `width` bits of `rs1` into `rd` at `offset`.
///
/// Every other bit of `rd` is preserved.
///
/// # Errors
///
/// Returns [`ExecError::InvalidOperand`] when `offset + width` exceeds the
/// register width. The caller decides whether that becomes an
/// illegal-instruction trap.
pub fn insert(rs1: u64, spec: BitfieldSpec, rd: u64, xlen: Xlen) -> ExecResult<u64> {
    if !spec.fits(xlen) {
        tracing::debug!(
            offset = spec.offset,
            width = spec.width,
            xlen = xlen.bits(),
            "bitfield insert rejected"
        );
        return Err(ExecError::InvalidOperand {
            offset: spec.offset,
            width: spec.width,
            xlen_bits: xlen.bits(),
        });
    }
    Ok(place(rs1, spec, rd, xlen))
}

/// Insert, register form. Oversized fields are clamped, never rejected.
pub fn insertr(rs1: u64, rs2: u64, rd: u64, xlen: Xlen) -> u64 {
    place(rs1, BitfieldSpec::from_register(rs2), rd, xlen)
}

/// Shared insert datapath.
fn place(rs1: u64, spec: BitfieldSpec, rd: u64, xlen: Xlen) -> u64 {
    let mask = spec.mask(xlen);
    let value = rs1.checked_shl(spec.offset).unwrap_or(0) & mask;
    xlen.truncate((rd & !mask) | value)
}

/// Clears the field.
pub fn bclr(rs1: u64, spec: BitfieldSpec, xlen: Xlen) -> u64 {
    xlen.truncate(rs1 & !spec.mask(xlen))
}

/// Clears the field, register form.
pub fn bclrr(rs1: u64, rs2: u64, xlen: Xlen) -> u64 {
    bclr(rs1, BitfieldSpec::from_register(rs2), xlen)
}

/// Sets every bit of the field.
pub fn bset(rs1: u64, spec: BitfieldSpec, xlen: Xlen) -> u64 {
    xlen.truncate(rs1 | spec.mask(xlen))
}

/// Sets every bit of the field, register form.
pub fn bsetr(rs1: u64, rs2: u64, xlen: Xlen) -> u64 {
    bset(rs1, BitfieldSpec::from_register(rs2), xlen)
}
