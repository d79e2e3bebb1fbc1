//! Instruction Set Architecture (ISA) definitions.
//!
//! Holds the operation identifiers shared between the execution engine and
//! the semantic units. Decoding of raw encodings happens outside this crate.

/// Operation enumerations and decoded operand bundle.
pub mod ops;

pub use ops::{DotOp, ExtOp, Half, LaneOp, OperandForm, Operands};
