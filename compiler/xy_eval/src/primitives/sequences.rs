//! `| , @ count enum clone`.

use xy_patterns::{ensure_sufficient_stack, type_mismatch, EvalResult, Value};

use super::PrimitiveTable;
use crate::Interpreter;

pub(super) fn register(table: &mut PrimitiveTable) {
    table.register("|", reverse);
    table.register(",", join);
    table.register("@", index);
    table.register("count", count);
    table.register("enum", enumerate);
    table.register("clone", clone);
}

fn reverse(interp: &mut Interpreter) -> EvalResult<()> {
    let value = interp.pop("|")?;
    match value.reversed() {
        Some(reversed) => {
            interp.push(reversed);
            Ok(())
        }
        None => Err(type_mismatch("|", "a sequence", value.type_name())),
    }
}

/// `a b ,` concatenates. The left operand is moved off the stack, so a
/// uniquely held join or string is extended in place.
fn join(interp: &mut Interpreter) -> EvalResult<()> {
    let (left, right) = interp.pop2(",")?;
    interp.push(left.join(right));
    Ok(())
}

/// `seq i @` / `seq [path] @`.
///
/// A number index yields the element, or the sequence's length when the
/// index is out of range. A sequence index is a path: each integer step
/// descends one level, a nested sequence step fans out over its members,
/// and an empty path yields the subject itself.
fn index(interp: &mut Interpreter) -> EvalResult<()> {
    let (subject, index) = interp.pop2("@")?;
    let result = if index.is_sequence() {
        let path = index.as_seq().map(|seq| seq.to_vec()).unwrap_or_default();
        walk(&subject, &path)?
    } else {
        element(&subject, &index)?
    };
    interp.push(result);
    Ok(())
}

fn element(subject: &Value, index: &Value) -> EvalResult {
    let Some(seq) = subject.as_seq() else {
        return Err(type_mismatch("@", "a sequence to index", subject.type_name()));
    };
    if !index.is_number() {
        return Err(type_mismatch("@", "an integer or path index", index.type_name()));
    }
    let size = seq.size();
    let found = index
        .as_uint()
        .and_then(|i| usize::try_from(i).ok())
        .and_then(|i| seq.at(i));
    Ok(found.unwrap_or_else(|| Value::int(i64::try_from(size).unwrap_or(i64::MAX))))
}

fn walk(subject: &Value, path: &[Value]) -> EvalResult {
    let Some((step, rest)) = path.split_first() else {
        return Ok(subject.clone());
    };
    match step.as_seq() {
        Some(fan) => ensure_sufficient_stack(|| {
            fan.iter()
                .map(|member| {
                    let mut branch = Vec::with_capacity(path.len());
                    branch.push(member);
                    branch.extend_from_slice(rest);
                    walk(subject, &branch)
                })
                .collect::<EvalResult<Vec<_>>>()
                .map(Value::list)
        }),
        None => {
            let next = element(subject, step)?;
            ensure_sufficient_stack(|| walk(&next, rest))
        }
    }
}

fn count(interp: &mut Interpreter) -> EvalResult<()> {
    let value = interp.pop("count")?;
    let size = value.as_seq().map_or(1, |seq| seq.size());
    interp.push(Value::int(i64::try_from(size).unwrap_or(i64::MAX)));
    Ok(())
}

/// `n enum` → `[0 1 ... n-1]`.
fn enumerate(interp: &mut Interpreter) -> EvalResult<()> {
    let value = interp.pop("enum")?;
    let Some(n) = value.as_uint().and_then(|n| i64::try_from(n).ok()) else {
        return Err(type_mismatch("enum", "a non-negative count", &value.to_string()));
    };
    interp.push(Value::list((0..n).map(Value::int).collect()));
    Ok(())
}

/// Shallow copy, so later joins through the copy can't alias the original.
fn clone(interp: &mut Interpreter) -> EvalResult<()> {
    let value = interp.pop("clone")?;
    interp.push(value.materialize());
    Ok(())
}
