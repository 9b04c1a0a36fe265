//! Iterator plumbing shared by the duck-typed combinators.

use std::iter::FusedIterator;

use seqcomb_foundation::{Result, Value, ValueIter};

/// Forwards items until the first error, then stops for good.
///
/// Behaves like an empty iterator once the wrapped iterator has produced
/// an error or run out.
#[derive(Debug)]
pub(crate) struct UntilError<I> {
    inner: Option<I>,
}

impl<I> UntilError<I> {
    pub(crate) fn new(inner: I) -> Self {
        Self { inner: Some(inner) }
    }
}

impl<I> Iterator for UntilError<I>
where
    I: Iterator<Item = Result<Value>>,
{
    type Item = Result<Value>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.as_mut()?.next();
        if !matches!(item, Some(Ok(_))) {
            self.inner = None;
        }
        item
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // An error may cut the wrapped iterator short.
        self.inner
            .as_ref()
            .map_or((0, Some(0)), |i| (0, i.size_hint().1))
    }
}

impl<I> FusedIterator for UntilError<I> where I: Iterator<Item = Result<Value>> {}

/// What a single element expands to inside a one-level flattening.
#[derive(Debug)]
pub(crate) enum Expansion<N> {
    /// The element itself, emitted whole.
    One(Option<Value>),
    /// The element's own traversal.
    Nested(N),
}

impl<N> Expansion<N> {
    pub(crate) fn one(value: Value) -> Self {
        Self::One(Some(value))
    }
}

impl<N> Iterator for Expansion<N>
where
    N: Iterator<Item = Result<Value>>,
{
    type Item = Result<Value>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::One(value) => value.take().map(Ok),
            Self::Nested(items) => items.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::One(value) => {
                let n = usize::from(value.is_some());
                (n, Some(n))
            }
            Self::Nested(items) => items.size_hint(),
        }
    }
}

/// Expands a value the way a one-level flattening does: a protected lazy
/// sequence contributes its shielded value whole, anything with a nested
/// traversal contributes its elements, and everything else (text included)
/// contributes itself.
pub(crate) fn expand_one_level(value: Value) -> Expansion<ValueIter> {
    if let Some(shielded) = value.as_lazy().and_then(|seq| seq.protected()) {
        return Expansion::one(shielded.clone());
    }
    match value.traverse_nested() {
        Some(items) => Expansion::Nested(items),
        None => Expansion::one(value),
    }
}
