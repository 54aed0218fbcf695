//! `+ - * % ^` and `_` (floor).
//!
//! Binary words pop the right operand first: `7 2 -` is `5`.

use xy_patterns::{ArithOp, EvalResult};

use super::PrimitiveTable;
use crate::Interpreter;

pub(super) fn register(table: &mut PrimitiveTable) {
    table.register("+", |interp| binary(interp, ArithOp::Add));
    table.register("-", |interp| binary(interp, ArithOp::Subtract));
    table.register("*", |interp| binary(interp, ArithOp::Multiply));
    table.register("%", |interp| binary(interp, ArithOp::Divide));
    table.register("^", |interp| binary(interp, ArithOp::Power));
    table.register("_", floor);
}

fn binary(interp: &mut Interpreter, op: ArithOp) -> EvalResult<()> {
    let (left, right) = interp.pop2(op.symbol())?;
    let result = left.arith(op, &right)?;
    interp.push(result);
    Ok(())
}

fn floor(interp: &mut Interpreter) -> EvalResult<()> {
    let value = interp.pop("_")?;
    let result = value.floor()?;
    interp.push(result);
    Ok(())
}
