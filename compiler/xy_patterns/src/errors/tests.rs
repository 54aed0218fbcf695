use super::*;

// Kind → message

#[test]
fn stack_underflow_has_correct_kind() {
    let err = stack_underflow("+", 2, 0);
    assert_eq!(
        err.kind,
        EvalErrorKind::StackUnderflow {
            primitive: "+".to_string(),
            storage: Storage::Stack,
            needed: 2,
            available: 0,
        }
    );
    assert_eq!(err.message, "`+` stack underflow: needed 2, found 0");
}

#[test]
fn queue_underflow_reports_queue() {
    let err = queue_underflow("'", 1, 0);
    assert_eq!(err.message, "`'` queue underflow: needed 1, found 0");
}

#[test]
fn symbol_not_found_has_correct_kind() {
    let err = symbol_not_found("fac");
    assert_eq!(
        err.kind,
        EvalErrorKind::SymbolNotFound {
            name: "fac".to_string()
        }
    );
    assert_eq!(err.message, "symbol not found: fac");
}

#[test]
fn type_mismatch_message() {
    let err = type_mismatch("set", "symbol", "int");
    assert_eq!(err.message, "`set` expected symbol, got int");
}

#[test]
fn limit_reached_is_limit() {
    let err = limit_reached("step limit of 0");
    assert!(err.is_limit());
    assert!(!symbol_not_found("x").is_limit());
    assert_eq!(err.message, "limit reached: step limit of 0");
}

// Context decoration

#[test]
fn display_includes_word_and_span() {
    let err = stack_underflow("+", 2, 1)
        .with_word("+")
        .with_span(Span::new(4, 5));
    assert_eq!(
        err.to_string(),
        "`+` stack underflow: needed 2, found 1 (while executing `+`) at 4..5"
    );
}

#[test]
fn with_word_keeps_innermost() {
    let err = symbol_not_found("x").with_word(";").with_word(".");
    assert_eq!(err.word.as_deref(), Some(";"));
}
