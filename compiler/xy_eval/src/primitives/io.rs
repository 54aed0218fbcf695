//! `print println write getline millis`, routed through the interpreter's
//! handlers.

use std::time::{SystemTime, UNIX_EPOCH};

use num_bigint::BigInt;
use xy_patterns::{EvalResult, Value};

use super::PrimitiveTable;
use crate::Interpreter;

pub(super) fn register(table: &mut PrimitiveTable) {
    table.register("print", print);
    table.register("println", println);
    table.register("write", write);
    table.register("getline", getline);
    table.register("millis", millis);
}

fn print(interp: &mut Interpreter) -> EvalResult<()> {
    let value = interp.pop("print")?;
    interp.print_handler().print(&value.display_value());
    Ok(())
}

fn println(interp: &mut Interpreter) -> EvalResult<()> {
    let value = interp.pop("println")?;
    interp.print_handler().println(&value.display_value());
    Ok(())
}

/// Parse form, so strings come out quoted and escaped.
fn write(interp: &mut Interpreter) -> EvalResult<()> {
    let value = interp.pop("write")?;
    interp.print_handler().print(&value.to_string());
    Ok(())
}

/// Pushes the next input line, or `""` at end of input.
fn getline(interp: &mut Interpreter) -> EvalResult<()> {
    let line = interp.input_handler().read_line().unwrap_or_default();
    interp.push(Value::string(line));
    Ok(())
}

fn millis(interp: &mut Interpreter) -> EvalResult<()> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    interp.push(Value::integer(BigInt::from(elapsed.as_millis())));
    Ok(())
}
