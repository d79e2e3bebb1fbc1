//! Execution error definitions.
//!
//! Almost every operation in this crate is total: out-of-range immediates are
//! masked and oversized bitfields are clamped. The one exception is the
//! immediate-form bitfield `insert`, whose field must fit in the register.
//! That case is reported to the caller as an [`ExecError`] so the execution
//! engine can raise an illegal-instruction trap; the crate never aborts.

use thiserror::Error;

/// Error produced by a semantic function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExecError {
    /// A bitfield does not fit inside the register.
    ///
    /// Raised by `insert` when `offset + width` exceeds the register width.
    #[error("invalid operand: bitfield offset {offset} + width {width} exceeds {xlen_bits}-bit register")]
    InvalidOperand {
        /// Field offset (least-significant bit).
        offset: u32,
        /// Field width in bits.
        width: u32,
        /// Register width in bits.
        xlen_bits: u32,
    },
}

/// Result alias used by fallible semantic functions.
pub type ExecResult<T> = Result<T, ExecError>;
