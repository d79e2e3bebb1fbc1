//! Operation identifiers for the extension units.
//!
//! The execution engine decodes an instruction into one [`ExtOp`] plus an
//! [`Operands`] bundle and hands both to [`ExtUnit::execute`](crate::units::ExtUnit::execute).
//! Lane width, signedness, rounding and operand form travel as variant fields
//! rather than as separate opcodes.

use crate::common::{LaneWidth, Signedness};

/// Per-lane operator of the packed-SIMD engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LaneOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Signed average, `(a + b) >> 1` with arithmetic shift.
    Avg,
    /// Unsigned average, `(a + b) >> 1` with logical shift.
    Avgu,
    /// Signed minimum.
    Min,
    /// Unsigned minimum.
    Minu,
    /// Signed maximum.
    Max,
    /// Unsigned maximum.
    Maxu,
    /// Shift right logical by the lane of `b`.
    Srl,
    /// Shift right arithmetic by the lane of `b`.
    Sra,
    /// Shift left logical by the lane of `b`.
    Sll,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Bitwise AND.
    And,
    /// Absolute value of the lane of `a` (`b` ignored).
    Abs,
    /// Equal.
    Cmpeq,
    /// Not equal.
    Cmpne,
    /// Signed greater than.
    Cmpgt,
    /// Signed greater or equal.
    Cmpge,
    /// Signed less than.
    Cmplt,
    /// Signed less or equal.
    Cmple,
    /// Unsigned greater than.
    Cmpgtu,
    /// Unsigned greater or equal.
    Cmpgeu,
    /// Unsigned less than.
    Cmpltu,
    /// Unsigned less or equal.
    Cmpleu,
}

/// Dot-product operand signedness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DotOp {
    /// Unsigned × unsigned.
    Up,
    /// Unsigned `a` × signed `b`.
    Usp,
    /// Signed × signed.
    Sp,
}

impl DotOp {
    /// Signedness of the `a` and `b` lanes.
    #[inline]
    pub const fn signedness(self) -> (Signedness, Signedness) {
        match self {
            Self::Up => (Signedness::Unsigned, Signedness::Unsigned),
            Self::Usp => (Signedness::Unsigned, Signedness::Signed),
            Self::Sp => (Signedness::Signed, Signedness::Signed),
        }
    }
}

/// Source of the second SIMD operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OperandForm {
    /// Lane `i` of `b` pairs with lane `i` of `a`.
    #[default]
    Vector,
    /// Lane 0 of `b` is replicated to every lane (`.sc` / `.sci`).
    Scalar,
}

/// 16-bit half of a register used by the fixed-point multiplies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Half {
    /// Bits `[15:0]` (`mul*N`, `mac*N`).
    #[default]
    Low,
    /// Bits `[31:16]` (`mulhh*N`, `machh*N`).
    High,
}

/// Every operation implemented by the extension units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExtOp {
    /// Carry-less multiply (low half).
    Clmul,
    /// Carry-less multiply (reversed).
    Clmulr,
    /// Bit reverse within each byte.
    Brev8,
    /// Perfect shuffle.
    Zip,
    /// Perfect unshuffle.
    Unzip,
    /// Nibble crossbar permutation.
    Xperm4,
    /// Byte crossbar permutation.
    Xperm8,
    /// Rotate right.
    Ror,

    /// Lane-wise SIMD operation.
    Simd {
        /// Per-lane operator.
        op: LaneOp,
        /// Lane width.
        width: LaneWidth,
        /// Vector or scalar-replicated second operand.
        form: OperandForm,
    },
    /// Dot product, optionally accumulated into `rd` (`sdot*`).
    Dot {
        /// Operand signedness.
        op: DotOp,
        /// Lane width.
        width: LaneWidth,
        /// Vector or scalar-replicated second operand.
        form: OperandForm,
        /// Add the old `rd` value to the sum.
        accumulate: bool,
    },
    /// Shuffle with one index per lane taken from `rs2`.
    Shuffle {
        /// Lane width.
        width: LaneWidth,
    },
    /// Shuffle with every index taken from the low bits of `rs2`.
    ShuffleSame {
        /// Lane width.
        width: LaneWidth,
    },
    /// Byte shuffle whose last lane index comes from `rd`.
    ShuffleLastFrom,
    /// Two-source shuffle selecting between `rs1` and `rd`.
    Shuffle2 {
        /// Lane width.
        width: LaneWidth,
    },

    /// Signed bitfield extract, immediate form.
    Extract,
    /// Unsigned bitfield extract, immediate form.
    Extractu,
    /// Signed bitfield extract, register form.
    Extractr,
    /// Unsigned bitfield extract, register form.
    Extractur,
    /// Bitfield insert, immediate form (may fail).
    Insert,
    /// Bitfield insert, register form (clamps).
    Insertr,
    /// Bitfield clear, immediate form.
    Bclr,
    /// Bitfield clear, register form.
    Bclrr,
    /// Bitfield set, immediate form.
    Bset,
    /// Bitfield set, register form.
    Bsetr,
    /// Relocating-window bitfield clear.
    RelocatingBclr,
    /// Relocating-window bitfield set.
    RelocatingBset,
    /// Relocating-window bitfield insert.
    RelocatingInsert,

    /// Scaled 16×16 multiply.
    Mul {
        /// Operand half.
        half: Half,
        /// Operand signedness.
        sign: Signedness,
        /// Round before shifting.
        round: bool,
    },
    /// Scaled 16×16 multiply-accumulate into `rd`.
    Mac {
        /// Operand half.
        half: Half,
        /// Operand signedness.
        sign: Signedness,
        /// Round before shifting.
        round: bool,
    },
    /// Signed clip to a power-of-two range.
    Clip,
    /// Unsigned clip to a power-of-two range.
    Clipu,
    /// Signed clip to a register bound.
    Clipr,
    /// Unsigned clip to a register bound.
    Clipur,

    /// Complex subtract with rotation by -j.
    SubRotMj,
    /// Complex multiply, real part.
    CplxMulR,
    /// Complex multiply, imaginary part.
    CplxMulI,
    /// Complex conjugate.
    CplxConj,

    /// Radix-2/4/8 bit-reversal addressing.
    Bitrev,
    /// Find first (lowest) set bit.
    Ff1,
    /// Find last (highest) set bit.
    Fl1,
    /// Count leading redundant sign bits.
    Clb,
    /// Count leading zeros.
    Clz,
    /// Population count.
    Cnt,
}

/// Decoded operands of one instruction.
///
/// `rd` carries the previous destination value for operations that
/// accumulate into it or pass part of it through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Operands {
    /// First source register value.
    pub rs1: u64,
    /// Second source register value.
    pub rs2: u64,
    /// Previous destination register value.
    pub rd: u64,
    /// First immediate field (offset, shift or clip width).
    pub is2: u32,
    /// Second immediate field (width-1, shift or radix).
    pub is3: u32,
}

impl Operands {
    /// Operands of a register-register instruction.
    pub const fn rr(rs1: u64, rs2: u64) -> Self {
        Self {
            rs1,
            rs2,
            rd: 0,
            is2: 0,
            is3: 0,
        }
    }

    /// Sets the previous destination value.
    #[must_use]
    pub const fn with_rd(mut self, rd: u64) -> Self {
        self.rd = rd;
        self
    }

    /// Sets both immediate fields.
    #[must_use]
    pub const fn with_imm(mut self, is2: u32, is3: u32) -> Self {
        self.is2 = is2;
        self.is3 = is3;
        self
    }
}
