//! Error types for evaluation.
//!
//! The recoverable taxonomy is deliberately flat: every failure a running
//! program can provoke is one of the four [`EvalErrorKind`] variants.
//! Factory functions (e.g. `stack_underflow()`) are the public API and
//! populate both `kind` and `message`.
//!
//! Broken internal invariants (slice bounds, shuffle construction) are not
//! represented here; they panic.

use std::fmt;

use thiserror::Error;

use crate::span::Span;
use crate::value::Value;

/// Result of evaluation.
pub type EvalResult<T = Value> = Result<T, EvalError>;

/// Which half of the machine ran dry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Storage {
    Stack,
    Queue,
}

impl fmt::Display for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Storage::Stack => f.write_str("stack"),
            Storage::Queue => f.write_str("queue"),
        }
    }
}

/// Typed error category.
///
/// Each variant carries structured data so callers can match on the failure
/// without parsing messages.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    /// A registered cancellation limit fired.
    #[error("limit reached: {limit}")]
    LimitReached { limit: String },

    /// A primitive needed more values than the stack (or queue) held.
    #[error("`{primitive}` {storage} underflow: needed {needed}, found {available}")]
    StackUnderflow {
        primitive: String,
        storage: Storage,
        needed: usize,
        available: usize,
    },

    /// Explicit environment lookup missed.
    #[error("symbol not found: {name}")]
    SymbolNotFound { name: String },

    /// A value failed a primitive's structural precondition.
    #[error("`{primitive}` expected {expected}, got {got}")]
    Type {
        primitive: String,
        expected: String,
        got: String,
    },
}

/// Evaluation error.
#[derive(Clone, Debug)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message; always `kind.to_string()`.
    pub message: String,
    /// Source location supplied by the caller, if it tracked one.
    pub span: Option<Span>,
    /// Parse-form rendering of the queue item that was executing.
    pub word: Option<String>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            span: None,
            word: None,
        }
    }

    /// Attach a source span to this error.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Record the word being executed, keeping the innermost one.
    #[must_use]
    pub fn with_word(mut self, word: impl Into<String>) -> Self {
        if self.word.is_none() {
            self.word = Some(word.into());
        }
        self
    }

    /// Whether a cancellation limit caused this error.
    #[inline]
    pub fn is_limit(&self) -> bool {
        matches!(self.kind, EvalErrorKind::LimitReached { .. })
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(word) = &self.word {
            write!(f, " (while executing `{word}`)")?;
        }
        if let Some(span) = self.span {
            write!(f, " at {span}")?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {}

impl PartialEq for EvalError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

/// Cancellation limit fired.
#[cold]
pub fn limit_reached(limit: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::LimitReached {
        limit: limit.to_string(),
    })
}

/// Primitive needed `needed` stack values but only `available` were present.
#[cold]
pub fn stack_underflow(primitive: &str, needed: usize, available: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackUnderflow {
        primitive: primitive.to_string(),
        storage: Storage::Stack,
        needed,
        available,
    })
}

/// Primitive needed `needed` queued items but only `available` were present.
#[cold]
pub fn queue_underflow(primitive: &str, needed: usize, available: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackUnderflow {
        primitive: primitive.to_string(),
        storage: Storage::Queue,
        needed,
        available,
    })
}

/// Explicit lookup of an unbound symbol.
#[cold]
pub fn symbol_not_found(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::SymbolNotFound {
        name: name.to_string(),
    })
}

/// Operand of the wrong variant.
#[cold]
pub fn type_mismatch(primitive: &str, expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Type {
        primitive: primitive.to_string(),
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

/// Element-wise operation on sequences of different lengths.
#[cold]
pub fn length_mismatch(primitive: &str, left: usize, right: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Type {
        primitive: primitive.to_string(),
        expected: format!("sequences of equal length (left has {left})"),
        got: format!("a sequence of length {right}"),
    })
}

#[cfg(test)]
mod tests;
