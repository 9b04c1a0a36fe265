//! Integration tests for Concat

use seqcomb_combinators::{Concat, concat, flatten_values};
use seqcomb_foundation::{ErrorKind, Value, ValueKind};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn items(c: &Concat) -> Vec<Value> {
    c.iter().map(Result::unwrap).collect()
}

#[test]
fn concat_of_nothing_is_empty() {
    assert!(items(&concat(Vec::<Value>::new())).is_empty());
    assert!(Concat::empty().is_empty());
}

#[test]
fn concat_spreads_each_argument_one_level() {
    let c = concat([Value::vec([1, 2]), Value::vec([Value::vec([3])]), Value::set([4])]);
    assert_eq!(
        items(&c),
        vec![Value::Int(1), Value::Int(2), Value::vec([3]), Value::Int(4)]
    );
}

#[test]
fn concat_keeps_lone_argument_intact_when_nested() {
    let lone = Value::from(Concat::of(Value::vec([1, 2])));
    let outer = concat([Value::vec([0]), lone]);
    assert_eq!(items(&outer), vec![Value::Int(0), Value::vec([1, 2])]);
}

#[test]
fn concat_spreads_lone_argument_when_iterated_directly() {
    let c = Concat::of(Value::vec([1, 2]));
    assert!(c.is_protected());
    assert_eq!(items(&c), vec![Value::Int(1), Value::Int(2)]);
}

#[test]
fn concat_treats_text_as_atomic() {
    assert_eq!(items(&concat(["ab", "cd"])), vec![Value::from("ab"), Value::from("cd")]);
    assert_eq!(items(&concat(["ab"])), vec![Value::from("ab")]);
}

#[test]
fn concat_emits_scalars_whole() {
    let c = concat([Value::Int(1), Value::Nil, Value::vec([2])]);
    assert_eq!(items(&c), vec![Value::Int(1), Value::Nil, Value::Int(2)]);
}

#[test]
fn concat_is_restartable_over_generators() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let generated = Value::generator(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        (0..3).map(Value::Int)
    });
    let c = concat([generated, Value::vec([9])]);

    let first = items(&c);
    let second = items(&c);
    assert_eq!(first, second);
    assert_eq!(first.len(), 4);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn concat_does_not_traverse_at_construction() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let generated = Value::generator(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Vec::<Value>::new()
    });
    let c = concat([generated, Value::vec([1])]);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    drop(c.iter());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn concat_over_infinite_argument() {
    let naturals = Value::generator(|| (0..).map(Value::Int));
    let c = concat([naturals, Value::vec([-1])]);
    let head: Vec<Value> = c.iter().take(3).map(Result::unwrap).collect();
    assert_eq!(head, vec![Value::Int(0), Value::Int(1), Value::Int(2)]);
}

#[test]
fn concat_of_concats() {
    let inner = Value::from(concat([Value::vec([1]), Value::vec([2])]));
    let outer = concat([inner, Value::vec([3])]);
    assert_eq!(items(&outer), vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
}

#[test]
fn flattening_a_concat_of_scalars_reports_the_scalar() {
    let joined = Value::from(concat([Value::vec([Value::vec([1])]), Value::Int(2)]));
    let mut iter = flatten_values(&joined);
    assert!(matches!(iter.next(), Some(Ok(Value::Int(1)))));
    let err = iter.next().unwrap().unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotSequence { kind: ValueKind::Int });
    assert!(iter.next().is_none());
}

#[test]
fn concat_accessors() {
    let c = concat([1, 2, 3]);
    assert_eq!(c.len(), 3);
    assert!(!c.is_protected());
    assert_eq!(c.args()[1], Value::Int(2));
}
