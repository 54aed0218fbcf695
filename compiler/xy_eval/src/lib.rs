#![allow(
    clippy::result_large_err,
    reason = "EvalError is fundamental; boxing would add complexity across the crate"
)]
//! XY Eval - the stack/queue evaluator for XY programs.
//!
//! This crate runs already-parsed programs: an external parser turns source
//! text into a sequence of `Value`s, which is loaded onto the queue and
//! stepped until empty.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Interpreter`: stack, queue, environment and the run loop
//! - `InterpreterBuilder`: limits, handlers and extra primitives
//! - `PrimitiveTable`: name-indexed native functions, fixed after build
//! - `Limit`: cooperative step and time budgets sampled before each step
//! - `Value` types from `xy_patterns`
//!
//! # Re-exports
//!
//! This crate re-exports value types from `xy_patterns` for convenience:
//! - `Value`, `Heap`, `Shuffle`
//! - `EvalError`, `EvalErrorKind`, `EvalResult`

mod environment;
mod input_handler;
pub mod interpreter;
mod limits;
pub mod primitives;
mod print_handler;

#[cfg(test)]
mod tests;

pub use xy_patterns::{EvalError, EvalErrorKind, EvalResult, Heap, Shuffle, Span, Storage, Value};

pub use environment::Environment;
pub use input_handler::{buffer_input_handler, stdin_handler, InputHandlerImpl, SharedInputHandler};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use limits::Limit;
pub use primitives::{PrimitiveFn, PrimitiveTable};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
