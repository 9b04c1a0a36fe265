//! Core value type for the duck-typed combinators.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Range;
use std::sync::Arc;

use crate::Result;
use crate::collections::{SeqSet, SeqVec};
use crate::error::Error;
use crate::iter::ValueIter;
use crate::sequence::{Generator, LazySeq, Sequence};
use crate::types::ValueKind;

/// Dynamically typed value.
///
/// Values are immutable and cheaply cloneable (O(1) for every variant).
/// Whether a value is sequence-like is decided by its variant:
///
/// - scalars (`Nil`, `Bool`, `Int`, `Float`) are always atomic;
/// - `String` can be traversed character by character when it is the thing
///   being traversed, but is atomic when found nested inside a sequence;
/// - `Vec`, `Set`, `Range` and `Lazy` are sequence-like everywhere.
#[derive(Clone)]
pub enum Value {
    /// The nil value (an ordinary element, not "missing").
    Nil,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Text.
    String(Arc<str>),
    /// Persistent vector.
    Vec(SeqVec<Value>),
    /// Persistent set.
    Set(SeqSet<Value>),
    /// Half-open integer range, produced lazily.
    Range(Range<i64>),
    /// Replayable lazy sequence.
    Lazy(LazySeq),
}

impl Value {
    /// Builds a vector value.
    pub fn vec<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::Vec(items.into_iter().map(Into::into).collect())
    }

    /// Builds a set value.
    pub fn set<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::Set(items.into_iter().map(Into::into).collect())
    }

    /// Wraps a lazy sequence.
    pub fn lazy(seq: impl Sequence + 'static) -> Self {
        Self::Lazy(LazySeq::new(seq))
    }

    /// Wraps an iterator factory as a replayable generator.
    ///
    /// ```
    /// use seqcomb_foundation::Value;
    ///
    /// let evens = Value::generator(|| (0..3).map(|n| Value::Int(n * 2)));
    /// let items: Vec<Value> = evens.traverse().unwrap().map(Result::unwrap).collect();
    /// assert_eq!(items, vec![Value::Int(0), Value::Int(2), Value::Int(4)]);
    /// ```
    pub fn generator<F, I>(make: F) -> Self
    where
        F: Fn() -> I + Send + Sync + 'static,
        I: IntoIterator<Item = Value>,
        I::IntoIter: 'static,
    {
        Self::lazy(Generator::new(make))
    }

    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Nil => ValueKind::Nil,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::String(_) => ValueKind::String,
            Self::Vec(_) => ValueKind::Vec,
            Self::Set(_) => ValueKind::Set,
            Self::Range(_) => ValueKind::Range,
            Self::Lazy(_) => ValueKind::Lazy,
        }
    }

    /// Returns true if this value is nil.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns true if [`traverse`](Self::traverse) succeeds for this value.
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        self.kind().is_sequence()
    }

    /// Starts a traversal over this value's elements.
    ///
    /// Text is traversed as one single-character string per `char`.
    ///
    /// # Errors
    ///
    /// Returns a not-sequence-like error for scalars.
    pub fn traverse(&self) -> Result<ValueIter> {
        match self {
            Self::String(text) => Ok(ValueIter::chars(Arc::clone(text))),
            other => other.traverse_nested().ok_or_else(|| {
                let kind = other.kind();
                tracing::debug!(%kind, "value is not sequence-like");
                Error::not_sequence(kind)
            }),
        }
    }

    /// Starts a traversal over this value's elements when it is found nested
    /// inside another sequence.
    ///
    /// Returns `None` for scalars and for text, which is atomic when nested.
    #[must_use]
    pub fn traverse_nested(&self) -> Option<ValueIter> {
        match self {
            Self::Nil | Self::Bool(_) | Self::Int(_) | Self::Float(_) | Self::String(_) => None,
            Self::Vec(items) => Some(ValueIter::vec(items.clone().into_iter())),
            Self::Set(items) => Some(ValueIter::set(items.clone().into_iter())),
            Self::Range(range) => Some(ValueIter::range(range.clone())),
            Self::Lazy(seq) => Some(seq.traverse()),
        }
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a float value.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a vector reference.
    #[must_use]
    pub const fn as_vec(&self) -> Option<&SeqVec<Value>> {
        match self {
            Self::Vec(v) => Some(v),
            _ => None,
        }
    }

    /// Attempts to extract a set reference.
    #[must_use]
    pub const fn as_set(&self) -> Option<&SeqSet<Value>> {
        match self {
            Self::Set(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a lazy sequence handle.
    #[must_use]
    pub const fn as_lazy(&self) -> Option<&LazySeq> {
        match self {
            Self::Lazy(seq) => Some(seq),
            _ => None,
        }
    }
}

// Implement PartialEq manually to handle float comparison
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Vec(a), Self::Vec(b)) => a == b,
            (Self::Set(a), Self::Set(b)) => a == b,
            (Self::Range(a), Self::Range(b)) => a == b,
            (Self::Lazy(a), Self::Lazy(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Nil => {}
            Self::Bool(b) => b.hash(state),
            Self::Int(n) => n.hash(state),
            Self::Float(n) => n.to_bits().hash(state),
            Self::String(s) => s.hash(state),
            Self::Vec(v) => v.hash(state),
            Self::Set(s) => s.hash(state),
            Self::Range(r) => r.hash(state),
            Self::Lazy(seq) => seq.hash(state),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n:?}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Vec(v) => write!(f, "{v:?}"),
            Self::Set(s) => write!(f, "#{s:?}"),
            Self::Range(r) => write!(f, "(range {} {})", r.start, r.end),
            Self::Lazy(seq) => write!(f, "{seq:?}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Vec(v) => {
                write!(f, "[")?;
                for (i, item) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item:?}")?;
                }
                write!(f, "]")
            }
            Self::Set(s) => {
                write!(f, "#{{")?;
                for (i, item) in s.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item:?}")?;
                }
                write!(f, "}}")
            }
            other => fmt::Debug::fmt(other, f),
        }
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        let mut buf = [0u8; 4];
        Self::String(Arc::from(&*c.encode_utf8(&mut buf)))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<Range<i64>> for Value {
    fn from(r: Range<i64>) -> Self {
        Self::Range(r)
    }
}

impl From<LazySeq> for Value {
    fn from(seq: LazySeq) -> Self {
        Self::Lazy(seq)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::vec(v)
    }
}
