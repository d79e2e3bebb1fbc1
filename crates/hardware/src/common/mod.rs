//! Common types shared by every execution unit.
//!
//! 1. **Register width:** [`Xlen`] and the masking helpers built on it.
//! 2. **Lane views:** explicit pack/unpack of packed-SIMD lanes.
//! 3. **Error handling:** [`ExecError`] for the few operations that can fail.

/// Execution error types.
pub mod error;

/// Packed lane views (byte and halfword lanes).
pub mod lanes;

/// Register width and masking helpers.
pub mod xlen;

pub use error::{ExecError, ExecResult};
pub use lanes::{Lane, LaneWidth, Lanes, Signedness};
pub use xlen::{Xlen, low_mask, sign_extend};
