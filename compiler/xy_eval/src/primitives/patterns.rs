//! `)` and `(`: destructure, substitute, run.
//!
//! Both pop a pattern `[head body...]` from the stack. `head` is matched
//! against a subject and `body` is rebuilt with the bindings and spliced
//! onto the front of the queue:
//!
//! ```text
//! 5 [[a] a a *] )      →  5 5 *  →  25
//! [[a b] b a] ( 1 2    →  2 1
//! ```
//!
//! `)` takes the subject from the stack, `(` from the front of the queue.
//! A quotation head of length N takes N items; any other head takes one.

use xy_patterns::{destructure, substitute, EvalResult, Value};

use super::PrimitiveTable;
use crate::Interpreter;

pub(super) fn register(table: &mut PrimitiveTable) {
    table.register(")", |interp| apply(interp, Side::Stack));
    table.register("(", |interp| apply(interp, Side::Queue));
}

#[derive(Copy, Clone)]
enum Side {
    Stack,
    Queue,
}

impl Side {
    fn word(self) -> &'static str {
        match self {
            Side::Stack => ")",
            Side::Queue => "(",
        }
    }
}

fn apply(interp: &mut Interpreter, side: Side) -> EvalResult<()> {
    let pattern = interp.pop(side.word())?;
    let (head, body) = split(&pattern);
    let Some(head) = head else {
        return Ok(());
    };
    let subject = take_subject(interp, side, &head)?;
    let bindings = destructure(&head, &subject);
    if let Some(body) = body {
        let Value::List(expanded) = substitute(&body, &bindings) else {
            return Ok(());
        };
        interp.splice_front(expanded.to_vec());
    }
    Ok(())
}

/// Head and (non-empty) body of a pattern. A non-quotation is all head.
fn split(pattern: &Value) -> (Option<Value>, Option<Value>) {
    if !pattern.is_quotation() {
        return (Some(pattern.clone()), None);
    }
    let Some(seq) = pattern.as_seq() else {
        return (None, None);
    };
    let body = if seq.size() > 1 { pattern.tail() } else { None };
    (seq.head(), body)
}

fn take_subject(interp: &mut Interpreter, side: Side, head: &Value) -> EvalResult {
    let width = match head.as_seq() {
        Some(seq) if head.is_quotation() => Some(seq.size()),
        _ => None,
    };
    match (side, width) {
        (Side::Stack, Some(n)) => interp.pop_n(side.word(), n).map(Value::list),
        (Side::Stack, None) => interp.pop(side.word()),
        (Side::Queue, Some(n)) => Ok(Value::list(interp.take_front(n))),
        (Side::Queue, None) => interp.pop_front(side.word()),
    }
}
