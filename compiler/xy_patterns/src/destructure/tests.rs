use super::*;
use pretty_assertions::assert_eq;

fn sym(name: &str) -> Value {
    Value::symbol(name)
}

fn ints(values: &[i64]) -> Value {
    Value::list(values.iter().map(|&n| Value::int(n)).collect())
}

fn bound(bindings: &Bindings, name: &str) -> String {
    bindings
        .get(name)
        .map_or_else(|| "<unbound>".to_string(), ToString::to_string)
}

#[test]
fn test_rest_names() {
    assert!(is_rest_name("XS"));
    assert!(is_rest_name("T2"));
    assert!(is_rest_name("A_B"));
    assert!(!is_rest_name("xs"));
    assert!(!is_rest_name("Xs"));
    assert!(!is_rest_name("_"));
    assert!(!is_rest_name(""));
}

#[test]
fn test_symbol_binds_whole_subject() {
    let bindings = destructure(&sym("x"), &ints(&[1, 2]));
    assert_eq!(bound(&bindings, "x"), "[1 2]");
}

#[test]
fn test_positional_binding() {
    let pattern = Value::list(vec![sym("a"), sym("b")]);
    let bindings = destructure(&pattern, &ints(&[1, 2]));
    assert_eq!(bound(&bindings, "a"), "1");
    assert_eq!(bound(&bindings, "b"), "2");
}

#[test]
fn test_missing_positions_bind_empty_list() {
    let pattern = Value::list(vec![sym("a"), sym("b"), sym("c")]);
    let bindings = destructure(&pattern, &ints(&[1]));
    assert_eq!(bound(&bindings, "b"), "[]");
    assert_eq!(bound(&bindings, "c"), "[]");
}

#[test]
fn test_rest_capture_is_slice() {
    let pattern = Value::list(vec![sym("h"), sym("T")]);
    let subject = ints(&[1, 2, 3]);
    let bindings = destructure(&pattern, &subject);
    assert_eq!(bound(&bindings, "h"), "1");
    assert_eq!(bound(&bindings, "T"), "[2 3]");
    assert!(matches!(bindings.get("T"), Some(Value::Slice(_))));
}

#[test]
fn test_rest_past_end_is_empty() {
    let pattern = Value::list(vec![sym("a"), sym("b"), sym("REST")]);
    let bindings = destructure(&pattern, &ints(&[1]));
    assert_eq!(bound(&bindings, "REST"), "[]");
}

#[test]
fn test_nested_pattern() {
    let pattern = Value::list(vec![Value::list(vec![sym("a"), sym("B")]), sym("c")]);
    let subject = Value::list(vec![ints(&[1, 2, 3]), Value::int(4)]);
    let bindings = destructure(&pattern, &subject);
    assert_eq!(bound(&bindings, "a"), "1");
    assert_eq!(bound(&bindings, "B"), "[2 3]");
    assert_eq!(bound(&bindings, "c"), "4");
}

#[test]
fn test_scalar_satisfies_one_element_pattern() {
    let pattern = Value::list(vec![Value::list(vec![sym("a")])]);
    let bindings = destructure(&pattern, &ints(&[5]));
    assert_eq!(bound(&bindings, "a"), "5");

    let bindings = destructure(&Value::list(vec![sym("a")]), &Value::int(9));
    assert_eq!(bound(&bindings, "a"), "9");
}

#[test]
fn test_string_subject_is_code_points() {
    let pattern = Value::list(vec![sym("c"), sym("CS")]);
    let bindings = destructure(&pattern, &Value::string("hi!"));
    assert_eq!(bound(&bindings, "c"), "104");
    assert_eq!(bound(&bindings, "CS"), r#""i!""#);
}

#[test]
fn test_literals_in_pattern_bind_nothing() {
    let pattern = Value::list(vec![Value::int(0), Value::string("s"), sym("x")]);
    let bindings = destructure(&pattern, &ints(&[7, 8, 9]));
    assert_eq!(bindings.len(), 1);
    assert_eq!(bound(&bindings, "x"), "9");
}

#[test]
fn test_string_slice_in_pattern_binds_nothing() {
    let text = Value::slice(&Value::string("xab"), 1, 3);
    let pattern = Value::list(vec![text, sym("y")]);
    let bindings = destructure(&pattern, &ints(&[1, 2]));
    assert_eq!(bindings.len(), 1);
    assert_eq!(bound(&bindings, "y"), "2");
}

#[test]
fn test_substitute_replaces_bound_symbols() {
    let pattern = Value::list(vec![sym("a")]);
    let bindings = destructure(&pattern, &ints(&[5]));
    let template = Value::list(vec![sym("a"), sym("a"), sym("*")]);
    assert_eq!(substitute(&template, &bindings).to_string(), "[5 5 *]");
}

#[test]
fn test_substitute_recurses_and_keeps_template() {
    let bindings = destructure(&Value::list(vec![sym("x")]), &ints(&[3]));
    let template = Value::list(vec![
        Value::list(vec![sym("x"), Value::string("x")]),
        sym("y"),
    ]);
    let result = substitute(&template, &bindings);
    assert_eq!(result.to_string(), r#"[[3 "x"] y]"#);
    assert_eq!(template.to_string(), r#"[[x "x"] y]"#);
}

#[test]
fn test_substitute_views_yield_lists() {
    let bindings = Bindings::default();
    let template = Value::slice(&Value::list(vec![sym("a"), sym("b"), sym("c")]), 1, 3);
    let result = substitute(&template, &bindings);
    assert!(matches!(result, Value::List(_)));
    assert_eq!(result.to_string(), "[b c]");
}

#[test]
fn test_substitute_keeps_string_slices_whole() {
    let bindings = destructure(&Value::list(vec![sym("a")]), &ints(&[1]));
    let text = Value::slice(&Value::string("_a_"), 1, 2);
    let result = substitute(&Value::list(vec![text, sym("a")]), &bindings);
    assert_eq!(result.to_string(), r#"["a" 1]"#);
}
