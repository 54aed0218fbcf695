#![allow(
    clippy::result_large_err,
    reason = "EvalError is fundamental; boxing would add complexity across the crate"
)]
//! XY Patterns - values and destructuring for the XY evaluator.
//!
//! This crate provides:
//! - Runtime value types (`Value`, `Heap`, `Seq`, `SliceValue`, `Shuffle`)
//! - The numeric tower (`Value::add` and friends, dispatched on both operands)
//! - The sequence family (List, String, Slice, Join) behind one contract
//! - Structural destructuring and template substitution (`destructure`, `substitute`)
//! - Evaluation error types (`EvalError`, `EvalResult`)
//!
//! # Value Types
//!
//! The value module enforces reference-counted sharing:
//! - All heap allocations go through `Value::` factory methods
//! - `Heap<T>` wrapper enforces this invariant
//! - Uniqueness checks gate the in-place `join` paths

mod destructure;
mod errors;
mod span;
mod stack;
mod value;

pub use destructure::{destructure, is_rest_name, substitute, Bindings};
pub use errors::{EvalError, EvalErrorKind, EvalResult, Storage};
pub use span::Span;
pub use stack::ensure_sufficient_stack;
pub use value::{ArithOp, Heap, RenderMode, Seq, Shuffle, SliceValue, Value};

// Re-export error constructors for use by the evaluator
pub use errors::{
    length_mismatch, limit_reached, queue_underflow, stack_underflow, symbol_not_found,
    type_mismatch,
};
