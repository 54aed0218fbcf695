//! Structural destructuring and template substitution.
//!
//! A pattern is a symbol or a (possibly nested) quotation of symbols.
//! Matching never fails: every pattern symbol receives a binding, missing
//! subject positions binding the empty list.
//!
//! - A lower-case symbol binds the single value at its position.
//! - A rest symbol (no lower-case letters, at least one upper-case one, e.g.
//!   `XS` or `T2`) binds a Slice of the subject from its position onward.
//! - A nested quotation pairs with the subject element at its position; a
//!   scalar element is treated as a one-element list.
//! - Anything else in a pattern (numbers, strings) binds nothing.

use rustc_hash::FxHashMap;

use crate::stack::ensure_sufficient_stack;
use crate::value::{Heap, Value};

/// Names bound by one match. Local to that match.
pub type Bindings = FxHashMap<Heap<str>, Value>;

/// Whether `name` captures the remainder of a sequence.
pub fn is_rest_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(char::is_lowercase)
        && name.chars().any(char::is_uppercase)
}

/// Match `pattern` against `subject`.
pub fn destructure(pattern: &Value, subject: &Value) -> Bindings {
    let mut bindings = Bindings::default();
    bind(pattern, subject, &mut bindings);
    tracing::trace!(bound = bindings.len(), %pattern, %subject, "destructured");
    bindings
}

fn bind(pattern: &Value, subject: &Value, bindings: &mut Bindings) {
    match pattern {
        Value::Symbol(name) => {
            bindings.insert(name.clone(), subject.clone());
        }
        _ if pattern.is_quotation() => {
            let subject = subject.clone().into_sequence();
            ensure_sufficient_stack(|| bind_elements(pattern, &subject, bindings));
        }
        _ => {}
    }
}

fn bind_elements(pattern: &Value, subject: &Value, bindings: &mut Bindings) {
    let (Some(elements), Some(items)) = (pattern.as_seq(), subject.as_seq()) else {
        return;
    };
    let size = items.size();
    for (position, element) in elements.iter().enumerate() {
        match &element {
            Value::Symbol(name) if is_rest_name(name) => {
                let rest = if position < size {
                    Value::slice(subject, position, size)
                } else {
                    Value::empty_list()
                };
                bindings.insert(name.clone(), rest);
            }
            _ => {
                let item = items.at(position).unwrap_or_else(Value::empty_list);
                bind(&element, &item, bindings);
            }
        }
    }
}

/// Rebuild `template` with every bound symbol replaced by its binding.
///
/// Always returns a fresh List; the template is not modified. A template
/// that is not a quotation is treated as a one-element list.
pub fn substitute(template: &Value, bindings: &Bindings) -> Value {
    match template.as_seq() {
        Some(elements) if template.is_quotation() => Value::list(
            elements
                .iter()
                .map(|element| substitute_element(element, bindings))
                .collect(),
        ),
        _ => Value::list(vec![substitute_element(template.clone(), bindings)]),
    }
}

fn substitute_element(element: Value, bindings: &Bindings) -> Value {
    match &element {
        Value::Symbol(name) => match bindings.get(&**name) {
            Some(bound) => bound.clone(),
            None => element,
        },
        _ if element.is_quotation() => {
            ensure_sufficient_stack(|| substitute(&element, bindings))
        }
        _ => element,
    }
}

#[cfg(test)]
mod tests;
