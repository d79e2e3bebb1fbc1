//! Packed lane views of a machine word.
//!
//! A word is split into `W / lane_bits` lanes. Lane 0 always occupies the
//! least-significant bits; lane `i` occupies bits `[i*lane_bits, (i+1)*lane_bits)`.
//! Unpacking and packing are explicit shifts and masks, never a reinterpretation
//! of memory.

use super::xlen::{Xlen, sign_extend};

/// Maximum number of lanes in any view (64-bit word of byte lanes).
pub const MAX_LANES: usize = 8;

/// Width of one packed lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneWidth {
    /// 8-bit lanes (`.b` instruction forms).
    Byte,
    /// 16-bit lanes (`.h` instruction forms).
    Half,
}

impl LaneWidth {
    /// Lane width in bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Byte => 8,
            Self::Half => 16,
        }
    }

    /// Mask covering one lane.
    #[inline]
    pub const fn mask(self) -> u64 {
        match self {
            Self::Byte => 0xFF,
            Self::Half => 0xFFFF,
        }
    }

    /// Number of lanes (`passes`) in a word of the given width.
    #[inline]
    pub const fn passes(self, xlen: Xlen) -> usize {
        (xlen.bits() / self.bits()) as usize
    }

    /// Number of bits needed to index a lane (`log2(passes)`).
    #[inline]
    pub const fn index_bits(self, xlen: Xlen) -> u32 {
        self.passes(xlen).trailing_zeros()
    }

    /// Mask applied to per-lane shift amounts (`lane_bits - 1`).
    #[inline]
    pub const fn shamt_mask(self) -> u32 {
        self.bits() - 1
    }
}

/// Signed or unsigned interpretation of an operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signedness {
    /// Two's complement.
    Signed,
    /// Plain binary.
    Unsigned,
}

/// A single lane value together with its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lane {
    raw: u64,
    width: LaneWidth,
}

impl Lane {
    /// Wraps a raw lane value; bits above the lane width are discarded.
    #[inline]
    pub const fn new(raw: u64, width: LaneWidth) -> Self {
        Self {
            raw: raw & width.mask(),
            width,
        }
    }

    /// Zero-extended value.
    #[inline]
    pub const fn unsigned(self) -> u64 {
        self.raw
    }

    /// Sign-extended value.
    #[inline]
    pub const fn signed(self) -> i64 {
        sign_extend(self.raw, self.width.bits()) as i64
    }

    /// Value interpreted according to `sign`, widened to `i64`.
    #[inline]
    pub const fn value(self, sign: Signedness) -> i64 {
        match sign {
            Signedness::Signed => self.signed(),
            Signedness::Unsigned => self.raw as i64,
        }
    }

    /// Lane width.
    #[inline]
    pub const fn width(self) -> LaneWidth {
        self.width
    }
}

/// Ordered lane view of one machine word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lanes {
    raw: [u16; MAX_LANES],
    len: usize,
    width: LaneWidth,
}

impl Lanes {
    /// An all-zero view with `W / lane_bits` lanes.
    pub const fn zeroed(width: LaneWidth, xlen: Xlen) -> Self {
        Self {
            raw: [0; MAX_LANES],
            len: width.passes(xlen),
            width,
        }
    }

    /// Splits `word` into lanes, lane 0 first.
    pub fn unpack(word: u64, width: LaneWidth, xlen: Xlen) -> Self {
        let mut lanes = Self::zeroed(width, xlen);
        let bits = width.bits();
        for (i, slot) in lanes.raw.iter_mut().take(lanes.len).enumerate() {
            *slot = ((word >> (i as u32 * bits)) & width.mask()) as u16;
        }
        lanes
    }

    /// Reassembles the lanes into a word, lane 0 in the least-significant bits.
    pub fn pack(&self) -> u64 {
        let bits = self.width.bits();
        self.raw
            .iter()
            .take(self.len)
            .enumerate()
            .fold(0u64, |word, (i, &lane)| {
                word | (u64::from(lane) << (i as u32 * bits))
            })
    }

    /// Number of lanes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True only for a view with no lanes, which no `Xlen` produces: every
    /// register width holds at least two lanes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Lane width.
    #[inline]
    pub const fn width(&self) -> LaneWidth {
        self.width
    }

    /// Lane `i`. Indices are reduced modulo the lane count.
    #[inline]
    pub fn get(&self, i: usize) -> Lane {
        Lane::new(u64::from(self.raw[i % self.len]), self.width)
    }

    /// Overwrites lane `i` with the low lane-width bits of `value`.
    #[inline]
    pub fn set(&mut self, i: usize, value: u64) {
        let len = self.len;
        self.raw[i % len] = (value & self.width.mask()) as u16;
    }

    /// Iterates over lanes in order.
    pub fn iter(&self) -> impl Iterator<Item = Lane> + '_ {
        self.raw
            .iter()
            .take(self.len)
            .map(move |&raw| Lane::new(u64::from(raw), self.width))
    }
}
