//! Source positions attached to evaluation errors.
//!
//! The evaluator never sees source text: the external parser hands it a
//! sequence of values. Callers that kept token offsets can attach them to a
//! failed run with [`EvalError::with_span`](crate::EvalError::with_span).

use std::fmt;

/// Byte range `[start, end)` in the caller's source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
