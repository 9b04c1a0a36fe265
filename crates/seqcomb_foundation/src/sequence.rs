//! The traversal capability.
//!
//! A [`Sequence`] is anything that can start a fresh traversal of its
//! elements on demand. Built-in containers get this from [`Value`] directly;
//! everything lazy (generators, `concat`, `crush`) plugs in through this
//! trait and is stored in a [`Value::Lazy`] behind a [`LazySeq`] handle.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::iter::ValueIter;
use crate::value::Value;

/// A replayable, lazily evaluated sequence of values.
///
/// Every call to [`traverse`](Sequence::traverse) must start from scratch
/// and share no cursor state with earlier traversals.
pub trait Sequence: fmt::Debug + Send + Sync {
    /// Starts a new traversal.
    fn traverse(&self) -> ValueIter;

    /// The single value this sequence shields from an enclosing one-level
    /// flattening, if any.
    ///
    /// A flattening combinator that meets a sequence returning `Some(v)`
    /// emits `v` whole instead of traversing the sequence.
    fn protected(&self) -> Option<&Value> {
        None
    }
}

/// Shared handle to a [`Sequence`].
///
/// Cloning is O(1). Equality and hashing are by identity.
#[derive(Clone)]
pub struct LazySeq(Arc<dyn Sequence>);

impl LazySeq {
    /// Wraps a sequence.
    pub fn new(seq: impl Sequence + 'static) -> Self {
        Self(Arc::new(seq))
    }

    /// Starts a new traversal of the wrapped sequence.
    #[must_use]
    pub fn traverse(&self) -> ValueIter {
        self.0.traverse()
    }

    /// See [`Sequence::protected`].
    #[must_use]
    pub fn protected(&self) -> Option<&Value> {
        self.0.protected()
    }

    /// Returns true if both handles point at the same sequence.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }

    fn addr(&self) -> usize {
        Arc::as_ptr(&self.0).cast::<()>() as usize
    }
}

impl fmt::Debug for LazySeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl PartialEq for LazySeq {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for LazySeq {}

impl Hash for LazySeq {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

/// A sequence produced by calling a closure once per traversal.
///
/// This is the replayable counterpart of a generator expression: the closure
/// builds a fresh iterator every time the sequence is traversed.
pub struct Generator<F> {
    make: F,
}

impl<F> Generator<F> {
    /// Creates a generator from an iterator factory.
    pub fn new(make: F) -> Self {
        Self { make }
    }
}

impl<F> fmt::Debug for Generator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<generator>")
    }
}

impl<F, I> Sequence for Generator<F>
where
    F: Fn() -> I + Send + Sync,
    I: IntoIterator<Item = Value>,
    I::IntoIter: 'static,
{
    fn traverse(&self) -> ValueIter {
        ValueIter::from_values((self.make)())
    }
}
