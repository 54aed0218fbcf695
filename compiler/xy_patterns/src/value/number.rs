//! The numeric tower.
//!
//! Arithmetic is double-dispatched by matching on the variant of both
//! operands at once. The type set is closed, so one match covers every
//! `{Integer, Float, Sequence}²` combination:
//!
//! | left \ right | Integer        | Float | Sequence  |
//! |--------------|----------------|-------|-----------|
//! | Integer      | exact (÷ → F)  | F     | broadcast |
//! | Float        | F              | F     | broadcast |
//! | Sequence     | broadcast      | bc.   | zip       |
//!
//! Division always produces a Float, even for `4 2 %`. Integer power takes
//! a non-negative exponent that fits in a `u64`.

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};

use super::{Seq, Value};
use crate::errors::{length_mismatch, type_mismatch, EvalResult};
use crate::stack::ensure_sufficient_stack;

/// The five arithmetic operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl ArithOp {
    /// Source word for the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Subtract => "-",
            ArithOp::Multiply => "*",
            ArithOp::Divide => "%",
            ArithOp::Power => "^",
        }
    }
}

impl Value {
    pub fn add(&self, rhs: &Value) -> EvalResult {
        self.arith(ArithOp::Add, rhs)
    }

    pub fn subtract(&self, rhs: &Value) -> EvalResult {
        self.arith(ArithOp::Subtract, rhs)
    }

    pub fn multiply(&self, rhs: &Value) -> EvalResult {
        self.arith(ArithOp::Multiply, rhs)
    }

    pub fn divide(&self, rhs: &Value) -> EvalResult {
        self.arith(ArithOp::Divide, rhs)
    }

    pub fn power(&self, rhs: &Value) -> EvalResult {
        self.arith(ArithOp::Power, rhs)
    }

    /// Apply `op` with `self` on the left.
    pub fn arith(&self, op: ArithOp, rhs: &Value) -> EvalResult {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => int_arith(op, a, b),
            (Value::Int(a), Value::Float(b)) => Ok(float_arith(op, big_to_f64(a), *b)),
            (Value::Float(a), Value::Int(b)) => Ok(float_arith(op, *a, big_to_f64(b))),
            (Value::Float(a), Value::Float(b)) => Ok(float_arith(op, *a, *b)),
            _ => match (self.as_seq(), rhs.as_seq()) {
                (Some(left), Some(right)) => ensure_sufficient_stack(|| zip(op, left, right)),
                (Some(left), None) if rhs.is_number() => {
                    ensure_sufficient_stack(|| map(left, |item| item.arith(op, rhs)))
                }
                (None, Some(right)) if self.is_number() => {
                    ensure_sufficient_stack(|| map(right, |item| self.arith(op, &item)))
                }
                _ => Err(operand_mismatch(op, self, rhs)),
            },
        }
    }

    /// Round toward negative infinity.
    ///
    /// Integers are returned unchanged. Floats stay floats: `2.5 _` is
    /// `2.0`, not `2`. Sequences are floored element-wise.
    pub fn floor(&self) -> EvalResult {
        match self {
            Value::Int(_) => Ok(self.clone()),
            Value::Float(x) => Ok(Value::Float(x.floor())),
            _ => match self.as_seq() {
                Some(seq) => ensure_sufficient_stack(|| map(seq, |item| item.floor())),
                None => Err(type_mismatch("_", "a number or sequence", self.type_name())),
            },
        }
    }

    /// Numeric zero (integer `0`, float `0.0` or `-0.0`).
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Int(n) => n.is_zero(),
            Value::Float(x) => *x == 0.0,
            _ => false,
        }
    }

    /// Unsigned machine word for counts, indices and exponents.
    ///
    /// Negative or oversized integers give `None`; non-negative finite
    /// floats are truncated toward zero.
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            Value::Int(n) => n.to_u64(),
            Value::Float(x) if x.is_finite() && *x >= 0.0 => x.trunc().to_u64(),
            _ => None,
        }
    }

    /// Integer view; floats truncate toward zero.
    pub fn as_integer(&self) -> Option<BigInt> {
        match self {
            Value::Int(n) => Some((**n).clone()),
            Value::Float(x) => BigInt::from_f64(x.trunc()),
            _ => None,
        }
    }

    /// Float view; integers are promoted.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(big_to_f64(n)),
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Total order used by the comparison primitives.
    ///
    /// Numbers compare numerically across Integer/Float. Sequences compare
    /// element-wise, a proper prefix ordering first. Anything else falls
    /// back to comparing parse-form text.
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => BigInt::cmp(a, b),
            (Value::Int(a), Value::Float(b)) => cmp_f64(big_to_f64(a), *b),
            (Value::Float(a), Value::Int(b)) => cmp_f64(*a, big_to_f64(b)),
            (Value::Float(a), Value::Float(b)) => cmp_f64(*a, *b),
            _ => match (self.as_seq(), other.as_seq()) {
                (Some(a), Some(b)) => ensure_sufficient_stack(|| compare_seq(a, b)),
                _ => self.to_string().cmp(&other.to_string()),
            },
        }
    }
}

fn int_arith(op: ArithOp, a: &BigInt, b: &BigInt) -> EvalResult {
    match op {
        ArithOp::Add => Ok(Value::integer(a + b)),
        ArithOp::Subtract => Ok(Value::integer(a - b)),
        ArithOp::Multiply => Ok(Value::integer(a * b)),
        ArithOp::Divide => Ok(Value::Float(big_to_f64(a) / big_to_f64(b))),
        ArithOp::Power => match b.to_u64() {
            Some(exponent) => Ok(Value::integer(pow(a, exponent))),
            None => Err(type_mismatch(
                op.symbol(),
                "a non-negative exponent that fits a machine word",
                &b.to_string(),
            )),
        },
    }
}

fn float_arith(op: ArithOp, a: f64, b: f64) -> Value {
    Value::Float(match op {
        ArithOp::Add => a + b,
        ArithOp::Subtract => a - b,
        ArithOp::Multiply => a * b,
        ArithOp::Divide => a / b,
        ArithOp::Power => a.powf(b),
    })
}

/// Exponentiation by squaring.
fn pow(base: &BigInt, mut exponent: u64) -> BigInt {
    let mut result = BigInt::one();
    let mut square = base.clone();
    while exponent > 0 {
        if exponent & 1 == 1 {
            result *= &square;
        }
        exponent >>= 1;
        if exponent > 0 {
            square = &square * &square;
        }
    }
    result
}

fn zip(op: ArithOp, left: Seq<'_>, right: Seq<'_>) -> EvalResult {
    let (left_len, right_len) = (left.size(), right.size());
    if left_len != right_len {
        return Err(length_mismatch(op.symbol(), left_len, right_len));
    }
    left.iter()
        .zip(right.iter())
        .map(|(a, b)| a.arith(op, &b))
        .collect::<Result<Vec<_>, _>>()
        .map(Value::list)
}

fn map(seq: Seq<'_>, mut f: impl FnMut(Value) -> EvalResult) -> EvalResult {
    seq.iter()
        .map(&mut f)
        .collect::<Result<Vec<_>, _>>()
        .map(Value::list)
}

fn compare_seq(a: Seq<'_>, b: Seq<'_>) -> Ordering {
    let mut left = a.iter();
    let mut right = b.iter();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match x.compare(&y) {
                Ordering::Equal => {}
                unequal => return unequal,
            },
        }
    }
}

// NaN compares equal to everything rather than poisoning the order.
fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn big_to_f64(n: &BigInt) -> f64 {
    n.to_f64().unwrap_or(f64::NAN)
}

fn operand_mismatch(op: ArithOp, left: &Value, right: &Value) -> crate::EvalError {
    type_mismatch(
        op.symbol(),
        "numbers or sequences",
        &format!("{} and {}", left.type_name(), right.type_name()),
    )
}
