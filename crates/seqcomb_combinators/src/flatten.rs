//! One-level flattening.
//!
//! [`flatten`] concatenates the inner sequences of a sequence of sequences,
//! removing exactly one level of nesting. It only ever holds the outer
//! iterator and the inner iterator currently being drained.
//!
//! [`flatten_values`] is the duck-typed rendition over [`Value`]: an outer
//! element that turns out not to be sequence-like produces an error at the
//! moment it is reached.

use std::fmt;
use std::iter::{Enumerate, FusedIterator, Map};

use seqcomb_foundation::{ErrorContext, Result, Value, ValueIter};

use crate::adapt::UntilError;

/// Concatenates the inner sequences of `iterables`, in order.
///
/// ```
/// use seqcomb_combinators::flatten;
///
/// let flat: Vec<i32> = flatten(vec![vec![1], vec![2, 3]]).collect();
/// assert_eq!(flat, vec![1, 2, 3]);
///
/// let empty: Vec<i32> = flatten(vec![Vec::<i32>::new(), vec![]]).collect();
/// assert!(empty.is_empty());
/// ```
pub fn flatten<I>(iterables: I) -> Flatten<I::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    Flatten::new(iterables.into_iter())
}

/// Iterator returned by [`flatten`].
pub struct Flatten<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
    outer: I,
    inner: Option<<I::Item as IntoIterator>::IntoIter>,
}

impl<I> Flatten<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
    pub(crate) fn new(outer: I) -> Self {
        Self { outer, inner: None }
    }
}

impl<I> Iterator for Flatten<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
    type Item = <I::Item as IntoIterator>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = &mut self.inner {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
                self.inner = None;
            }
            self.inner = Some(self.outer.next()?.into_iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.inner.as_ref().map_or((0, Some(0)), Iterator::size_hint);
        match self.outer.size_hint() {
            (0, Some(0)) => (lo, hi),
            _ => (lo, None),
        }
    }
}

impl<I> FusedIterator for Flatten<I>
where
    I: FusedIterator,
    I::Item: IntoIterator,
{
}

impl<I> Clone for Flatten<I>
where
    I: Iterator + Clone,
    I::Item: IntoIterator,
    <I::Item as IntoIterator>::IntoIter: Clone,
{
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<I> fmt::Debug for Flatten<I>
where
    I: Iterator + fmt::Debug,
    I::Item: IntoIterator,
    <I::Item as IntoIterator>::IntoIter: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flatten")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

type Elements = Map<Enumerate<ValueIter>, fn((usize, Result<Value>)) -> ValueIter>;

/// Concatenates the elements of each element of `iterables`.
///
/// Unlike `concat` and `crush`, this is the plain traversal at both levels:
/// text elements are spread into their characters.
///
/// ```
/// use seqcomb_combinators::flatten_values;
/// use seqcomb_foundation::Value;
///
/// let nested = Value::vec([Value::vec([1]), Value::from("ab")]);
/// let flat: Vec<Value> = flatten_values(&nested).map(Result::unwrap).collect();
/// assert_eq!(flat, vec![Value::Int(1), Value::from("a"), Value::from("b")]);
/// ```
#[must_use]
pub fn flatten_values(iterables: &Value) -> FlattenValues {
    tracing::trace!(kind = %iterables.kind(), "flatten traversal started");
    let outer = iterables.traverse().unwrap_or_else(|err| {
        ValueIter::failed(err.with_context(ErrorContext::new().with_operation("flatten")))
    });
    let elements: Elements = outer
        .enumerate()
        .map(traverse_element as fn((usize, Result<Value>)) -> ValueIter);
    FlattenValues {
        inner: UntilError::new(Flatten::new(elements)),
    }
}

fn traverse_element((position, item): (usize, Result<Value>)) -> ValueIter {
    match item.and_then(|value| value.traverse()) {
        Ok(items) => items,
        Err(err) if err.context.is_none() => ValueIter::failed(err.with_context(
            ErrorContext::new()
                .with_operation("flatten")
                .with_position(position),
        )),
        Err(err) => ValueIter::failed(err),
    }
}

/// Iterator returned by [`flatten_values`].
#[derive(Debug)]
pub struct FlattenValues {
    inner: UntilError<Flatten<Elements>>,
}

impl Iterator for FlattenValues {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl FusedIterator for FlattenValues {}
