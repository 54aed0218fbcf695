//! Whole-program evaluator tests.
//!
//! Programs are built directly as value sequences (the form an external
//! parser hands the evaluator).


use crate::{buffer_handler, buffer_input_handler, Interpreter, Shuffle, Value};

pub(crate) fn sym(name: &str) -> Value {
    Value::symbol(name)
}

pub(crate) fn int(n: i64) -> Value {
    Value::int(n)
}

pub(crate) fn list<const N: usize>(items: [Value; N]) -> Value {
    Value::list(items.into())
}

pub(crate) fn shuffle(pattern: &str) -> Value {
    Value::shuffle(Shuffle::parse(pattern).unwrap())
}

/// Interpreter capturing output, with no input available.
pub(crate) fn interpreter() -> Interpreter {
    Interpreter::builder()
        .print_handler(buffer_handler())
        .input_handler(buffer_input_handler(Vec::<String>::new()))
        .build()
}

/// Run `program` to completion and return the machine.
pub(crate) fn run(program: impl IntoIterator<Item = Value>) -> Interpreter {
    let mut interp = interpreter();
    if let Err(err) = interp.eval(program) {
        panic!("program failed: {err}");
    }
    interp
}

/// Stack in parse form, bottom first, space separated.
pub(crate) fn stack_of(interp: &Interpreter) -> String {
    interp
        .stack()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
