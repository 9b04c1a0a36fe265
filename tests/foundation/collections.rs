//! Integration tests for persistent collections
//!
//! Tests SeqVec and SeqSet snapshots as seen through Value traversals.

use seqcomb_foundation::Value;
use seqcomb_foundation::collections::{SeqSet, SeqVec};
use std::collections::HashSet;

// =============================================================================
// SeqVec
// =============================================================================

#[test]
fn vector_empty() {
    let v: SeqVec<Value> = SeqVec::new();
    assert!(v.is_empty());
    assert_eq!(v.len(), 0);
    assert_eq!(v.iter().count(), 0);
}

#[test]
fn vector_structural_sharing() {
    let v: SeqVec<Value> = (0..1000).map(Value::Int).collect();

    let v2 = v.clone();
    assert_eq!(v, v2);

    let drained: Vec<Value> = v2.into_iter().collect();
    assert_eq!(drained.len(), 1000);
    assert_eq!(v.len(), 1000);
}

#[test]
fn vector_iteration_order() {
    let v: SeqVec<i64> = (0..5).collect();
    let borrowed: Vec<i64> = v.iter().copied().collect();
    let by_ref: Vec<i64> = (&v).into_iter().copied().collect();
    let owned: Vec<i64> = v.into_iter().collect();
    assert_eq!(borrowed, vec![0, 1, 2, 3, 4]);
    assert_eq!(by_ref, borrowed);
    assert_eq!(owned, borrowed);
}

#[test]
fn vector_traversal_leaves_value_intact() {
    let value = Value::vec([1, 2, 3]);
    let drained = value.traverse().unwrap().count();
    assert_eq!(drained, 3);
    assert_eq!(value.as_vec().map(SeqVec::len), Some(3));
}

// =============================================================================
// SeqSet
// =============================================================================

#[test]
fn set_collect_deduplicates() {
    let s: SeqSet<Value> = [Value::Int(1), Value::Int(1), Value::Int(2)]
        .into_iter()
        .collect();
    assert_eq!(s.len(), 2);
    assert!(!s.is_empty());
}

#[test]
fn set_equality_ignores_insertion_order() {
    let a: SeqSet<i64> = [1, 2, 3].into_iter().collect();
    let b: SeqSet<i64> = [3, 1, 2].into_iter().collect();
    assert_eq!(a, b);

    let mut hashed = HashSet::new();
    hashed.insert(a);
    assert!(hashed.contains(&b));
}

#[test]
fn set_traversal_yields_every_member() {
    let value = Value::set([1, 2, 3]);
    let members: HashSet<Value> = value.traverse().unwrap().map(Result::unwrap).collect();
    assert_eq!(members.len(), 3);
    assert_eq!(value.as_set().map(SeqSet::len), Some(3));
}
