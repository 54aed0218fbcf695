//! Words that rewire the machine itself: environment access, unquote, dip,
//! quote and whole-state capture.

use xy_patterns::{symbol_not_found, type_mismatch, EvalResult, Value};

use super::PrimitiveTable;
use crate::Interpreter;

pub(super) fn register(table: &mut PrimitiveTable) {
    table.register("set", set);
    table.register(";", get);
    table.register(".", unquote);
    table.register("`", dip);
    table.register("'", quote);
    table.register("$", capture);
    table.register("$$", install);
}

/// `value name set`
fn set(interp: &mut Interpreter) -> EvalResult<()> {
    let (value, name) = interp.pop2("set")?;
    let name = Interpreter::expect_symbol("set", &name)?;
    interp.env_mut().define(&name, value);
    Ok(())
}

/// `name ;`
fn get(interp: &mut Interpreter) -> EvalResult<()> {
    let name = interp.pop(";")?;
    let name = Interpreter::expect_symbol(";", &name)?;
    match interp.env().lookup(&name) {
        Some(value) => {
            let value = value.clone();
            interp.push(value);
            Ok(())
        }
        None => Err(symbol_not_found(&name)),
    }
}

/// `[program] .` runs the program next. A bound symbol unquotes its value;
/// anything else is queued as itself.
fn unquote(interp: &mut Interpreter) -> EvalResult<()> {
    let program = interp.pop(".")?;
    let bound = program
        .as_symbol()
        .and_then(|name| interp.env().lookup(name))
        .cloned();
    interp.unquote(bound.as_ref().unwrap_or(&program));
    Ok(())
}

/// `x [program] `` ` ``: run the program with `x` set aside, then restore it.
///
/// The restore is queued as `[x] 0 @`, which pushes `x` back without
/// evaluating it.
fn dip(interp: &mut Interpreter) -> EvalResult<()> {
    let (hidden, program) = interp.pop2("`")?;
    interp.push_front(Value::primitive("@"));
    interp.push_front(Value::int(0));
    interp.push_front(Value::list(vec![hidden]));
    interp.unquote(&program);
    Ok(())
}

/// `' item` pushes the next queued item, unevaluated, wrapped in a list.
fn quote(interp: &mut Interpreter) -> EvalResult<()> {
    let item = interp.pop_front("'")?;
    interp.push(Value::list(vec![item]));
    Ok(())
}

/// `[program] $` runs the program against `[stack] [queue]` snapshots.
fn capture(interp: &mut Interpreter) -> EvalResult<()> {
    let program = interp.pop("$")?;
    let (stack, queue) = interp.take_state();
    interp.push(Value::list(stack));
    interp.push(Value::list(queue));
    interp.unquote(&program);
    Ok(())
}

/// `stack queue $$` replaces the machine state.
fn install(interp: &mut Interpreter) -> EvalResult<()> {
    let (stack, queue) = interp.pop2("$$")?;
    let (Some(new_stack), Some(new_queue)) = (stack.as_seq(), queue.as_seq()) else {
        let offender = if stack.is_sequence() { &queue } else { &stack };
        return Err(type_mismatch("$$", "two sequences", offender.type_name()));
    };
    let (new_stack, new_queue) = (new_stack.to_vec(), new_queue.to_vec());
    tracing::trace!(stack = new_stack.len(), queue = new_queue.len(), "installing state");
    interp.install(new_stack, new_queue);
    Ok(())
}
