//! Bit-exact semantics for RISC-V bit-manipulation and packed-DSP extensions.
//!
//! This crate implements the arithmetic behind a family of custom RISC-V
//! instructions, as pure functions of decoded operands:
//! 1. **Bit manipulation:** carry-less multiply, byte bit-reverse, zip/unzip, crossbar permutes.
//! 2. **Packed SIMD:** lane-wise arithmetic, compares, shifts, dot products and shuffles.
//! 3. **Bitfields:** extract, insert, clear and set with immediate or register addressing.
//! 4. **Fixed point:** scaled multiply-accumulate with rounding and saturating clips.
//! 5. **Complex:** packed 16-bit complex multiply, rotation and conjugate.
//! 6. **Bit reversal:** FFT address generation and bit counting.
//!
//! Decoding, register state and trap delivery belong to the embedding
//! simulator. Every function takes operand words and immediates and returns
//! one result word, truncated to the configured register width.

/// Common types (register width, lane views, errors).
pub mod common;
/// Unit configuration (register width).
pub mod config;
/// Operation identifiers and decoded operands.
pub mod isa;
/// Execution units implementing each instruction group.
pub mod units;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Error returned by fallible operations.
pub use crate::common::ExecError;
/// Dispatching execution unit; construct with `ExtUnit::new`.
pub use crate::units::ExtUnit;
