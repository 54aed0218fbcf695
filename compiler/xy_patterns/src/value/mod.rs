//! Runtime values for the XY evaluator.
//!
//! # Heap Enforcement
//!
//! Heap payloads (big integers, strings, sequences, symbol names) are held
//! through `Heap<T>`, whose constructor is private to this module. Values are
//! built with factory methods:
//!
//! ```text
//! let n = Value::int(42);
//! let s = Value::string("hello");
//! let q = Value::list(vec![Value::int(1), Value::symbol("+")]);
//! ```
//!
//! # Variants
//!
//! The variant set is closed. Numbers, strings, shuffles and sequences are
//! data; symbols and primitives are words the evaluator may execute. The
//! four sequence representations (List, String, Slice, Join) are
//! observationally one "ordered sequence of values" and differ only in
//! cost: see [`Seq`].

mod heap;
mod number;
mod render;
mod sequence;
mod shuffle;

use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigInt;

pub use heap::Heap;
pub use number::ArithOp;
pub use render::RenderMode;
pub use sequence::{Seq, SliceValue};
pub use shuffle::Shuffle;

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    /// Arbitrary-precision signed integer.
    Int(Heap<BigInt>),
    /// Double-width floating point.
    Float(f64),
    /// Identifier. Executes the primitive of the same name, if any.
    Symbol(Heap<str>),
    /// Text; as a sequence its elements are integer code points.
    Str(Heap<String>),
    /// Stack permutation such as `ab-ba`.
    Shuffle(Heap<Shuffle>),
    /// Built-in word, bound by name to the context's primitive table.
    Primitive(&'static str),
    /// Materialized sequence.
    List(Heap<Vec<Value>>),
    /// `[begin, end)` view over a non-slice sequence.
    Slice(Heap<SliceValue>),
    /// Logical concatenation of non-join segments.
    Join(Heap<Vec<Value>>),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    /// Create an integer value from a machine integer.
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(Heap::new(BigInt::from(n)))
    }

    /// Create an integer value from an arbitrary-precision integer.
    #[inline]
    pub fn integer(n: BigInt) -> Self {
        Value::Int(Heap::new(n))
    }

    /// Create a float value.
    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Create a symbol.
    #[inline]
    pub fn symbol(name: &str) -> Self {
        Value::Symbol(Heap::from_str(name))
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Wrap a parsed shuffle pattern.
    #[inline]
    pub fn shuffle(shuffle: Shuffle) -> Self {
        Value::Shuffle(Heap::new(shuffle))
    }

    /// Refer to a primitive by its table name.
    #[inline]
    pub fn primitive(name: &'static str) -> Self {
        Value::Primitive(name)
    }

    /// Create a list value.
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// The empty list.
    #[inline]
    pub fn empty_list() -> Self {
        Value::list(Vec::new())
    }
}

// Value Methods

impl Value {
    /// Get the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Symbol(_) => "symbol",
            Value::Str(_) => "string",
            Value::Shuffle(_) => "shuffle",
            Value::Primitive(_) => "primitive",
            Value::List(_) => "list",
            Value::Slice(_) => "slice",
            Value::Join(_) => "join",
        }
    }

    /// Integer or float.
    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Any of the four sequence representations, strings included.
    #[inline]
    pub fn is_sequence(&self) -> bool {
        matches!(
            self,
            Value::Str(_) | Value::List(_) | Value::Slice(_) | Value::Join(_)
        )
    }

    /// A sequence of values rather than text.
    ///
    /// Quotations, patterns and templates are lists, slices or joins; a
    /// string (or a slice of one) is never spliced or destructured as a
    /// program.
    #[inline]
    pub fn is_quotation(&self) -> bool {
        matches!(self, Value::List(_) | Value::Slice(_) | Value::Join(_)) && !self.is_text()
    }

    /// A String, or a Slice whose backing is a String.
    #[inline]
    pub fn is_text(&self) -> bool {
        match self {
            Value::Str(_) => true,
            Value::Slice(slice) => matches!(slice.base(), Value::Str(_)),
            _ => false,
        }
    }

    /// Symbol name, if this is a symbol.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// String contents, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Check if this value is truthy.
    ///
    /// Zero-valued numbers and empty sequences are falsy; everything else,
    /// symbols included, is truthy.
    pub fn is_truthy(&self) -> bool {
        if self.is_number() {
            return !self.is_zero();
        }
        match self.as_seq() {
            Some(seq) => !seq.is_empty(),
            None => true,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
