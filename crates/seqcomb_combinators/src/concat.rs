//! Literal-style concatenation of values and sequences.
//!
//! A [`Concat`] lets sequence literals be combined with lazy sequences
//! without building intermediate collections. Every argument that is
//! sequence-like is spread one level deep; everything else, text included,
//! is emitted as it is.
//!
//! Wrapping a single value in its own `Concat` shields it from an enclosing
//! concat: the outer one emits the wrapped value whole.
//!
//! ```
//! use seqcomb_combinators::Concat;
//! use seqcomb_foundation::Value;
//!
//! let spread = Concat::new([Value::Int(1), Value::vec([2, 3]), Value::Int(4)]);
//! let items: Vec<Value> = spread.iter().map(Result::unwrap).collect();
//! assert_eq!(items, vec![Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4)]);
//!
//! let shielded = Concat::new([Value::Int(1), Concat::of(Value::vec([2])).into(), Value::Int(3)]);
//! let items: Vec<Value> = shielded.iter().map(Result::unwrap).collect();
//! assert_eq!(items, vec![Value::Int(1), Value::vec([2]), Value::Int(3)]);
//! ```

use std::iter::FusedIterator;
use std::slice;
use std::sync::Arc;

use seqcomb_foundation::{Result, Sequence, Value, ValueIter};

use crate::adapt::{Expansion, UntilError, expand_one_level};
use crate::flatten::Flatten;

/// A reusable, lazily evaluated concatenation.
///
/// Construction stores the arguments without looking at them. Each call to
/// [`iter`](Concat::iter) starts over from the stored arguments.
#[derive(Clone, Debug)]
pub enum Concat {
    /// Exactly one argument. An enclosing concat emits it whole; iterating
    /// this concat directly spreads it like any other argument.
    Protected(Value),
    /// Zero arguments, or two or more.
    Spread(Arc<[Value]>),
}

impl Concat {
    /// Creates a concat over `args`.
    pub fn new<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut args: Vec<Value> = args.into_iter().map(Into::into).collect();
        if args.len() == 1 {
            if let Some(only) = args.pop() {
                return Self::Protected(only);
            }
        }
        Self::Spread(args.into())
    }

    /// Creates a single-argument concat, the form that shields its argument
    /// from an enclosing concat.
    pub fn of(value: impl Into<Value>) -> Self {
        Self::Protected(value.into())
    }

    /// Creates a concat with no arguments.
    #[must_use]
    pub fn empty() -> Self {
        Self::Spread(Arc::from([]))
    }

    /// Returns the stored arguments.
    #[must_use]
    pub fn args(&self) -> &[Value] {
        match self {
            Self::Protected(only) => slice::from_ref(only),
            Self::Spread(args) => args,
        }
    }

    /// Returns the number of stored arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.args().len()
    }

    /// Returns true if there are no stored arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args().is_empty()
    }

    /// Returns true for the single-argument, shielding form.
    #[must_use]
    pub const fn is_protected(&self) -> bool {
        matches!(self, Self::Protected(_))
    }

    /// Starts a new traversal.
    #[must_use]
    pub fn iter(&self) -> ConcatIter {
        tracing::trace!(args = self.len(), "concat traversal started");
        let args = match self {
            Self::Protected(only) => Args::One(Some(only.clone())),
            Self::Spread(args) => Args::Many {
                args: Arc::clone(args),
                next: 0,
            },
        };
        let expanded: Expanded = args.map(expand_one_level as fn(Value) -> Expansion<ValueIter>);
        ConcatIter {
            inner: UntilError::new(Flatten::new(expanded)),
        }
    }
}

impl Default for Concat {
    fn default() -> Self {
        Self::empty()
    }
}

impl Sequence for Concat {
    fn traverse(&self) -> ValueIter {
        ValueIter::from_results(self.iter())
    }

    fn protected(&self) -> Option<&Value> {
        match self {
            Self::Protected(only) => Some(only),
            Self::Spread(_) => None,
        }
    }
}

impl From<Concat> for Value {
    fn from(concat: Concat) -> Self {
        Value::lazy(concat)
    }
}

impl<'a> IntoIterator for &'a Concat {
    type Item = Result<Value>;
    type IntoIter = ConcatIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Creates a [`Concat`] over `args`.
pub fn concat<I>(args: I) -> Concat
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    Concat::new(args)
}

/// Cursor over a concat's stored arguments.
#[derive(Debug)]
enum Args {
    One(Option<Value>),
    Many { args: Arc<[Value]>, next: usize },
}

impl Iterator for Args {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        match self {
            Self::One(only) => only.take(),
            Self::Many { args, next } => {
                let arg = args.get(*next)?.clone();
                *next += 1;
                Some(arg)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = match self {
            Self::One(only) => usize::from(only.is_some()),
            Self::Many { args, next } => args.len().saturating_sub(*next),
        };
        (n, Some(n))
    }
}

impl FusedIterator for Args {}

type Expanded = std::iter::Map<Args, fn(Value) -> Expansion<ValueIter>>;

/// Iterator returned by [`Concat::iter`].
///
/// Holds the argument cursor and at most one argument's traversal.
#[derive(Debug)]
pub struct ConcatIter {
    inner: UntilError<Flatten<Expanded>>,
}

impl Iterator for ConcatIter {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl FusedIterator for ConcatIter {}
