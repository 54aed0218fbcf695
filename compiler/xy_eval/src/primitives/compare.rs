//! `= < > <= >=` and `not`. Results are Integer `1` or `0`.

use std::cmp::Ordering;

use xy_patterns::{EvalResult, Value};

use super::PrimitiveTable;
use crate::Interpreter;

pub(super) fn register(table: &mut PrimitiveTable) {
    table.register("=", |interp| compare(interp, "=", Ordering::is_eq));
    table.register("<", |interp| compare(interp, "<", Ordering::is_lt));
    table.register(">", |interp| compare(interp, ">", Ordering::is_gt));
    table.register("<=", |interp| compare(interp, "<=", Ordering::is_le));
    table.register(">=", |interp| compare(interp, ">=", Ordering::is_ge));
    table.register("not", not);
}

fn flag(on: bool) -> Value {
    Value::int(i64::from(on))
}

fn compare(interp: &mut Interpreter, word: &str, holds: fn(Ordering) -> bool) -> EvalResult<()> {
    let (left, right) = interp.pop2(word)?;
    interp.push(flag(holds(left.compare(&right))));
    Ok(())
}

fn not(interp: &mut Interpreter) -> EvalResult<()> {
    let value = interp.pop("not")?;
    interp.push(flag(!value.is_truthy()));
    Ok(())
}
