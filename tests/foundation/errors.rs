//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use seqcomb_foundation::{Error, ErrorContext, ErrorKind, Value, ValueKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_not_sequence() {
    let err = Error::not_sequence(ValueKind::Float);
    assert!(err.is_not_sequence());
    assert!(matches!(
        err.kind,
        ErrorKind::NotSequence {
            kind: ValueKind::Float
        }
    ));
    assert_eq!(format!("{err}"), "float value is not sequence-like");
}

#[test]
fn error_from_scalar_traversal() {
    for (value, kind) in [
        (Value::Nil, ValueKind::Nil),
        (Value::Bool(true), ValueKind::Bool),
        (Value::Int(1), ValueKind::Int),
        (Value::Float(0.5), ValueKind::Float),
    ] {
        let err = value.traverse().unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotSequence { kind });
        assert!(err.context.is_none());
    }
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_with_context() {
    let err = Error::not_sequence(ValueKind::Int).with_context(
        ErrorContext::new()
            .with_operation("flatten")
            .with_position(3),
    );
    let ctx = err.context.as_ref().unwrap();
    assert_eq!(ctx.operation.as_deref(), Some("flatten"));
    assert_eq!(ctx.position, Some(3));
    assert_eq!(format!("{ctx}"), "in flatten at element 3");
}

#[test]
fn error_display_includes_context() {
    let nested = Value::vec([Value::vec([1]), Value::Nil]);
    let err = nested
        .traverse()
        .unwrap()
        .nth(1)
        .unwrap()
        .unwrap()
        .traverse()
        .unwrap_err()
        .with_context(ErrorContext::new().with_operation("flatten").with_position(1));
    assert_eq!(
        format!("{err}"),
        "nil value is not sequence-like (in flatten at element 1)"
    );
}

#[test]
fn error_clone_keeps_context() {
    let err = Error::not_sequence(ValueKind::Bool)
        .with_context(ErrorContext::new().with_operation("concat"));
    let cloned = err.clone();
    assert_eq!(cloned.kind, err.kind);
    assert_eq!(cloned.context, err.context);
}
