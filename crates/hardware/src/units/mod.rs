//! Extension execution units.
//!
//! Each submodule holds the pure semantic functions of one instruction group.
//! [`ExtUnit`] routes a decoded [`ExtOp`] to the right function, the way the
//! execute stage would.
//!
//! - [`bitmanip`]:    clmul, clmulr, brev8, zip, unzip, xperm4/8, ror
//! - [`simd`]:        packed lane engine, lane operators, dot products, shuffles
//! - [`bitfield`]:    extract, insert, clear, set (clamping and relocating families)
//! - [`fixed_point`]: scaled multiply/accumulate with rounding, clip family
//! - [`complex`]:     subrotmj, complex multiply halves, conjugate
//! - [`bitrev`]:      bit-reversal addressing, ff1/fl1/clb/clz/cnt

/// Bitfield extract/insert/clear/set.
pub mod bitfield;

/// Generic bit-manipulation primitives.
pub mod bitmanip;

/// Bit-reversal addressing and bit counting.
pub mod bitrev;

/// Packed complex arithmetic.
pub mod complex;

/// Fixed-point multiply, accumulate and clip.
pub mod fixed_point;

/// Packed-SIMD lane engine.
pub mod simd;

use crate::common::{ExecResult, LaneWidth, Xlen};
use crate::config::Config;
use crate::isa::ops::{ExtOp, Operands};

use self::bitfield::BitfieldSpec;

/// Execution unit for the bit-manipulation and DSP extensions.
///
/// Holds only the register width; every call is independent, so one unit can
/// be shared freely between harts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtUnit {
    xlen: Xlen,
}

impl ExtUnit {
    /// Creates a unit for the given register width.
    pub const fn new(xlen: Xlen) -> Self {
        Self { xlen }
    }

    /// Creates a unit from a simulator configuration.
    pub const fn from_config(config: &Config) -> Self {
        Self::new(config.xlen)
    }

    /// Register width of this unit.
    pub const fn xlen(&self) -> Xlen {
        self.xlen
    }

    /// Executes one extension operation.
    ///
    /// # Arguments
    ///
    /// * `op`  - The decoded operation.
    /// * `ops` - Register values and immediates. `rd` is the previous
    ///   destination value for accumulating and pass-through operations.
    ///
    /// # Returns
    ///
    /// The new destination value, truncated to the register width.
    ///
    /// # Errors
    ///
    /// Only [`ExtOp::Insert`] can fail, with
    /// [`ExecError::InvalidOperand`](crate::common::ExecError::InvalidOperand)
    /// when its field does not fit in the register.
    ///
    /// # Examples
    ///
    /// ```
    /// use xpulp_core::common::{LaneWidth, Xlen};
    /// use xpulp_core::isa::{ExtOp, LaneOp, OperandForm, Operands};
    /// use xpulp_core::units::ExtUnit;
    ///
    /// let unit = ExtUnit::new(Xlen::Rv32);
    ///
    /// // Carry-less multiply
    /// let r = unit.execute(ExtOp::Clmul, &Operands::rr(0b1011, 0b0110)).unwrap();
    /// assert_eq!(r, 0b11_1010);
    ///
    /// // Halfword add with lane wrap-around
    /// let op = ExtOp::Simd { op: LaneOp::Add, width: LaneWidth::Half, form: OperandForm::Vector };
    /// let r = unit.execute(op, &Operands::rr(0x0001_FFFF, 0x0001_0001)).unwrap();
    /// assert_eq!(r, 0x0002_0000);
    ///
    /// // Immediate insert whose field runs past bit 31 is rejected
    /// let ops = Operands::rr(0xF, 0).with_imm(30, 3);
    /// assert!(unit.execute(ExtOp::Insert, &ops).is_err());
    /// ```
    pub fn execute(&self, op: ExtOp, ops: &Operands) -> ExecResult<u64> {
        let xlen = self.xlen;
        let Operands {
            rs1,
            rs2,
            rd,
            is2,
            is3,
        } = *ops;
        tracing::trace!(?op, rs1, rs2, rd, is2, is3, "ext execute");

        let imm_field = || BitfieldSpec::from_immediates(is2, is3, xlen);
        let raw_field = || BitfieldSpec::new(is2, is3);

        let result = match op {
            // Generic bit manipulation
            ExtOp::Clmul => bitmanip::clmul(rs1, rs2, xlen),
            ExtOp::Clmulr => bitmanip::clmulr(rs1, rs2, xlen),
            ExtOp::Brev8 => bitmanip::brev8(rs1, xlen),
            ExtOp::Zip => bitmanip::zip(rs1, xlen),
            ExtOp::Unzip => bitmanip::unzip(rs1, xlen),
            ExtOp::Xperm4 => bitmanip::xperm4(rs1, rs2, xlen),
            ExtOp::Xperm8 => bitmanip::xperm8(rs1, rs2, xlen),
            ExtOp::Ror => bitmanip::ror(rs1, rs2, xlen),

            // Packed SIMD
            ExtOp::Simd { op, width, form } => {
                let b = simd::second_operand(rs2, width, form, xlen);
                simd::execute(op, rs1, b, width, xlen)
            }
            ExtOp::Dot {
                op,
                width,
                form,
                accumulate,
            } => {
                let acc = if accumulate { rd } else { 0 };
                simd::dot::execute(op, rs1, rs2, acc, width, form, xlen)
            }
            ExtOp::Shuffle { width } => simd::shuffle::shuffle(rs1, rs2, width, xlen),
            ExtOp::ShuffleSame { width } => simd::shuffle::shuffle_same(rs1, rs2, width, xlen),
            ExtOp::ShuffleLastFrom => simd::shuffle::shuffle_last_from(rs1, rs2, rd, xlen),
            ExtOp::Shuffle2 { width } => simd::shuffle::shuffle2(rs1, rs2, rd, width, xlen),

            // Bitfield, clamping family
            ExtOp::Extract => bitfield::extract(rs1, imm_field(), xlen),
            ExtOp::Extractu => bitfield::extractu(rs1, imm_field(), xlen),
            ExtOp::Extractr => bitfield::extractr(rs1, rs2, xlen),
            ExtOp::Extractur => bitfield::extractur(rs1, rs2, xlen),
            ExtOp::Insert => bitfield::insert(rs1, imm_field(), rd, xlen)?,
            ExtOp::Insertr => bitfield::insertr(rs1, rs2, rd, xlen),
            ExtOp::Bclr => bitfield::bclr(rs1, imm_field(), xlen),
            ExtOp::Bclrr => bitfield::bclrr(rs1, rs2, xlen),
            ExtOp::Bset => bitfield::bset(rs1, imm_field(), xlen),
            ExtOp::Bsetr => bitfield::bsetr(rs1, rs2, xlen),

            // Bitfield, relocating family (is3 is the width itself)
            ExtOp::RelocatingBclr => bitfield::relocating::bclr(rs1, raw_field(), xlen),
            ExtOp::RelocatingBset => bitfield::relocating::bset(rs1, raw_field(), xlen),
            ExtOp::RelocatingInsert => {
                bitfield::relocating::insert(rs1, raw_field(), rd, xlen)
            }

            // Fixed point
            ExtOp::Mul { half, sign, round } => {
                if round {
                    fixed_point::mul_rn(rs1, rs2, is3, half, sign, xlen)
                } else {
                    fixed_point::mul_n(rs1, rs2, is3, half, sign, xlen)
                }
            }
            ExtOp::Mac { half, sign, round } => {
                if round {
                    fixed_point::mac_rn(rs1, rs2, rd, is3, half, sign, xlen)
                } else {
                    fixed_point::mac_n(rs1, rs2, rd, is3, half, sign, xlen)
                }
            }
            ExtOp::Clip => fixed_point::clip(rs1, is2, xlen),
            ExtOp::Clipu => fixed_point::clipu(rs1, is2, xlen),
            ExtOp::Clipr => fixed_point::clipr(rs1, rs2, xlen),
            ExtOp::Clipur => fixed_point::clipur(rs1, rs2, xlen),

            // Complex
            ExtOp::SubRotMj => complex::subrotmj(rs1, rs2, is3),
            ExtOp::CplxMulR => complex::cplxmul_r(rs1, rs2, rd, is3, xlen),
            ExtOp::CplxMulI => complex::cplxmul_i(rs1, rs2, rd, is3, xlen),
            ExtOp::CplxConj => complex::cplxconj(rs1),

            // Bit reversal and counting
            ExtOp::Bitrev => bitrev::bitrev(rs1, is2, is3, xlen),
            ExtOp::Ff1 => bitrev::ff1(rs1, xlen),
            ExtOp::Fl1 => bitrev::fl1(rs1, xlen),
            ExtOp::Clb => bitrev::clb(rs1, xlen),
            ExtOp::Clz => bitrev::clz(rs1, xlen),
            ExtOp::Cnt => bitrev::cnt(rs1, xlen),
        };
        Ok(result)
    }

    /// Number of lanes an operation of `width` sees on this unit.
    pub const fn passes(&self, width: LaneWidth) -> usize {
        width.passes(self.xlen)
    }
}
