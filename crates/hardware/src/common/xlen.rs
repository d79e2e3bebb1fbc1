//! Register width (XLEN) handling.
//!
//! Every operand and result in this crate travels as a `u64`. The configured
//! [`Xlen`] decides how many of those bits are architecturally meaningful:
//! 1. **Truncation:** Results are reduced modulo `2^W` before they leave a unit.
//! 2. **Sign view:** A word can be reinterpreted as a signed `W`-bit value.
//! 3. **Immediate bounding:** Shift amounts and bitfield immediates are masked
//!    to `log2(W)` bits instead of being handed to a native out-of-range shift.

use serde::Deserialize;

/// Architectural register width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Xlen {
    /// 32-bit registers. Upper 32 bits of every result are zero.
    #[default]
    #[serde(alias = "Rv32", alias = "rv32")]
    Rv32,
    /// 64-bit registers.
    #[serde(alias = "Rv64", alias = "rv64")]
    Rv64,
}

impl Xlen {
    /// Number of bits in a register.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Rv32 => 32,
            Self::Rv64 => 64,
        }
    }

    /// All-ones mask covering the register width.
    #[inline]
    pub const fn mask(self) -> u64 {
        match self {
            Self::Rv32 => 0xFFFF_FFFF,
            Self::Rv64 => u64::MAX,
        }
    }

    /// Reduces `value` modulo `2^W`.
    #[inline]
    pub const fn truncate(self, value: u64) -> u64 {
        value & self.mask()
    }

    /// Reinterprets the low `W` bits of `value` as a signed integer.
    #[inline]
    pub const fn sext(self, value: u64) -> i64 {
        match self {
            Self::Rv32 => value as u32 as i32 as i64,
            Self::Rv64 => value as i64,
        }
    }

    /// Largest legal shift amount (`W - 1`), also the shift-amount mask.
    #[inline]
    pub const fn shamt_mask(self) -> u32 {
        self.bits() - 1
    }

    /// Masks a raw shift amount to `log2(W)` bits.
    ///
    /// Decoded immediates are expected to be in range already; anything larger
    /// is bounded here and reported at trace level.
    #[inline]
    pub fn shamt(self, raw: u64) -> u32 {
        let masked = (raw & u64::from(self.shamt_mask())) as u32;
        if raw != u64::from(masked) {
            tracing::trace!(raw, masked, xlen = self.bits(), "shift amount masked");
        }
        masked
    }

    /// Masks a bitfield offset/width immediate to `log2(W)` bits.
    ///
    /// Same bound as [`Xlen::shamt`]: 5 bits on RV32, 6 bits on RV64.
    #[inline]
    pub fn field(self, raw: u32) -> u32 {
        let masked = raw & self.shamt_mask();
        if raw != masked {
            tracing::trace!(raw, masked, xlen = self.bits(), "bitfield immediate masked");
        }
        masked
    }
}

/// Returns a mask with the low `bits` bits set. Saturates at 64 bits.
#[inline]
pub const fn low_mask(bits: u32) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Sign-extends the low `bits` bits of `value` to 64 bits.
///
/// Uses a shift-left / arithmetic-shift-right pair on a 64-bit intermediate.
/// `bits == 0` yields 0.
#[inline]
pub const fn sign_extend(value: u64, bits: u32) -> u64 {
    if bits == 0 {
        return 0;
    }
    if bits >= 64 {
        return value;
    }
    let shift = 64 - bits;
    (((value << shift) as i64) >> shift) as u64
}
