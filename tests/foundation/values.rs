//! Integration tests for Value types
//!
//! Tests Value variants, equality, hashing, display, and both traversals.

use seqcomb_foundation::{LazySeq, Sequence, Value, ValueIter, ValueKind};
use std::collections::HashSet;
use std::sync::Arc;

fn collect(iter: ValueIter) -> Vec<Value> {
    iter.map(Result::unwrap).collect()
}

// =============================================================================
// Value Construction
// =============================================================================

#[test]
fn value_scalars() {
    assert!(Value::Nil.is_nil());
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::Int(42).as_int(), Some(42));
    assert_eq!(Value::Int(42).as_float(), None);
    assert_eq!(Value::Float(1.5).as_float(), Some(1.5));
    assert_eq!(Value::String(Arc::from("hello")).as_str(), Some("hello"));
}

#[test]
fn value_from_conversions() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(7i32), Value::Int(7));
    assert_eq!(Value::from('x'), Value::from("x"));
    assert_eq!(Value::from(String::from("s")), Value::from("s"));
    assert_eq!(Value::from(vec![1, 2]), Value::vec([1, 2]));
    assert_eq!(Value::from(0..3).kind(), ValueKind::Range);
}

#[test]
fn value_kinds() {
    assert_eq!(Value::Nil.kind(), ValueKind::Nil);
    assert_eq!(Value::vec([1]).kind(), ValueKind::Vec);
    assert_eq!(Value::set([1]).kind(), ValueKind::Set);
    assert_eq!(Value::generator(Vec::<Value>::new).kind(), ValueKind::Lazy);
    assert!(Value::from("abc").is_sequence());
    assert!(!Value::Int(1).is_sequence());
}

// =============================================================================
// Equality and Hashing
// =============================================================================

#[test]
fn value_float_equality_is_bitwise() {
    assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    assert_ne!(Value::Float(0.0), Value::Float(-0.0));
}

#[test]
fn value_int_and_float_differ() {
    assert_ne!(Value::Int(1), Value::Float(1.0));
}

#[test]
fn value_hash_set_membership() {
    let mut set = HashSet::new();
    set.insert(Value::vec([1, 2]));
    set.insert(Value::vec([1, 2]));
    set.insert(Value::set([3, 4]));
    set.insert(Value::set([4, 3]));
    assert_eq!(set.len(), 2);
}

#[test]
fn value_lazy_identity() {
    let a = Value::generator(|| vec![Value::Int(1)]);
    let b = Value::generator(|| vec![Value::Int(1)]);
    assert_eq!(a, a.clone());
    assert_ne!(a, b);
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn value_display() {
    assert_eq!(format!("{}", Value::Nil), "nil");
    assert_eq!(format!("{}", Value::from("raw")), "raw");
    assert_eq!(format!("{:?}", Value::from("raw")), "\"raw\"");
    assert_eq!(
        format!("{}", Value::vec([Value::Int(1), Value::from("two")])),
        "[1 \"two\"]"
    );
    assert_eq!(format!("{}", Value::from(2..5)), "(range 2 5)");
}

// =============================================================================
// Traversal
// =============================================================================

#[test]
fn traverse_vector_in_order() {
    let items = collect(Value::vec([3, 1, 2]).traverse().unwrap());
    assert_eq!(items, vec![Value::Int(3), Value::Int(1), Value::Int(2)]);
}

#[test]
fn traverse_text_yields_characters() {
    let items = collect(Value::from("héllo").traverse().unwrap());
    assert_eq!(items.len(), 5);
    assert_eq!(items[1], Value::from("é"));
}

#[test]
fn traverse_nested_treats_text_as_atomic() {
    assert!(Value::from("abc").traverse_nested().is_none());
    assert!(Value::Int(1).traverse_nested().is_none());
    assert!(Value::vec([1]).traverse_nested().is_some());
}

#[test]
fn traverse_range() {
    let items = collect(Value::from(-1..2).traverse().unwrap());
    assert_eq!(items, vec![Value::Int(-1), Value::Int(0), Value::Int(1)]);
    assert!(collect(Value::from(5..5).traverse().unwrap()).is_empty());
}

#[test]
fn traverse_set_yields_every_member_once() {
    let items: HashSet<Value> = collect(Value::set([1, 2, 3]).traverse().unwrap())
        .into_iter()
        .collect();
    assert_eq!(items.len(), 3);
    assert!(items.contains(&Value::Int(2)));
}

#[test]
fn traverse_is_restartable() {
    let value = Value::generator(|| (0..3).map(Value::Int));
    let first = collect(value.traverse().unwrap());
    let second = collect(value.traverse().unwrap());
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

// =============================================================================
// Sequence Implementors
// =============================================================================

#[derive(Debug)]
struct Countdown(i64);

impl Sequence for Countdown {
    fn traverse(&self) -> ValueIter {
        ValueIter::from_values((1..=self.0).rev().map(Value::Int))
    }
}

#[test]
fn custom_sequence_traversal() {
    let value = Value::lazy(Countdown(3));
    let items = collect(value.traverse().unwrap());
    assert_eq!(items, vec![Value::Int(3), Value::Int(2), Value::Int(1)]);
}

#[test]
fn custom_sequence_is_unprotected_by_default() {
    let seq = LazySeq::new(Countdown(1));
    assert!(seq.protected().is_none());
    assert!(seq.ptr_eq(&seq.clone()));
}
