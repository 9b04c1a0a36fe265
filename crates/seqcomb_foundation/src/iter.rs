//! Owned traversal over a [`Value`].

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Range;
use std::sync::Arc;

use crate::Result;
use crate::error::Error;
use crate::value::Value;

/// A traversal over the elements of a sequence-like value.
///
/// Items are `Result`s so that failures deep inside lazily nested sequences
/// surface exactly when the offending element is reached. The iterator is
/// fused: after an error or the end it yields `None` forever.
///
/// A `ValueIter` owns an O(1) snapshot of what it traverses and holds no
/// borrow, so any number of them can run over the same value at once.
pub struct ValueIter {
    inner: Inner,
}

enum Inner {
    Done,
    Failed(Option<Error>),
    Vec(im::vector::ConsumingIter<Value>),
    Set(im::hashset::ConsumingIter<Value>),
    Chars { text: Arc<str>, offset: usize },
    Range(Range<i64>),
    Lazy(Box<dyn Iterator<Item = Result<Value>>>),
}

impl ValueIter {
    /// A traversal with no elements.
    #[must_use]
    pub fn empty() -> Self {
        Self { inner: Inner::Done }
    }

    /// A traversal that yields `err` once and then ends.
    #[must_use]
    pub fn failed(err: Error) -> Self {
        Self {
            inner: Inner::Failed(Some(err)),
        }
    }

    /// Adapts a fallible iterator.
    pub fn from_results<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Result<Value>>,
        I::IntoIter: 'static,
    {
        Self {
            inner: Inner::Lazy(Box::new(iter.into_iter())),
        }
    }

    /// Adapts an infallible iterator.
    pub fn from_values<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: 'static,
    {
        Self::from_results(iter.into_iter().map(Ok))
    }

    pub(crate) fn vec(items: im::vector::ConsumingIter<Value>) -> Self {
        Self {
            inner: Inner::Vec(items),
        }
    }

    pub(crate) fn set(items: im::hashset::ConsumingIter<Value>) -> Self {
        Self {
            inner: Inner::Set(items),
        }
    }

    pub(crate) fn chars(text: Arc<str>) -> Self {
        Self {
            inner: Inner::Chars { text, offset: 0 },
        }
    }

    pub(crate) fn range(range: Range<i64>) -> Self {
        Self {
            inner: Inner::Range(range),
        }
    }

    fn advance(&mut self) -> Option<Result<Value>> {
        match &mut self.inner {
            Inner::Done => None,
            Inner::Failed(err) => err.take().map(Err),
            Inner::Vec(items) => items.next().map(Ok),
            Inner::Set(items) => items.next().map(Ok),
            Inner::Chars { text, offset } => {
                let ch = text[*offset..].chars().next()?;
                *offset += ch.len_utf8();
                Some(Ok(Value::from(ch)))
            }
            Inner::Range(range) => range.next().map(Value::Int).map(Ok),
            Inner::Lazy(items) => items.next(),
        }
    }
}

impl Iterator for ValueIter {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.advance();
        if !matches!(item, Some(Ok(_))) {
            self.inner = Inner::Done;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Inner::Done => (0, Some(0)),
            Inner::Failed(err) => {
                let n = usize::from(err.is_some());
                (n, Some(n))
            }
            Inner::Vec(items) => items.size_hint(),
            Inner::Set(items) => items.size_hint(),
            Inner::Chars { text, offset } => {
                let bytes = text.len() - *offset;
                (bytes.div_ceil(4), Some(bytes))
            }
            Inner::Range(range) => range.size_hint(),
            Inner::Lazy(items) => items.size_hint(),
        }
    }
}

impl FusedIterator for ValueIter {}

impl fmt::Debug for ValueIter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.inner {
            Inner::Done => "done",
            Inner::Failed(_) => "failed",
            Inner::Vec(_) => "vec",
            Inner::Set(_) => "set",
            Inner::Chars { .. } => "chars",
            Inner::Range(_) => "range",
            Inner::Lazy(_) => "lazy",
        };
        f.debug_struct("ValueIter").field("state", &state).finish()
    }
}
