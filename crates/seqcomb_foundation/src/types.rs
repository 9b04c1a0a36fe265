//! Kind descriptors for values.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of a [`Value`](crate::Value), without its payload.
///
/// Used in diagnostics and to answer capability questions without
/// holding on to the value itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValueKind {
    /// The nil value.
    Nil,
    /// Boolean.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// Text.
    String,
    /// Ordered persistent vector.
    Vec,
    /// Unordered persistent set.
    Set,
    /// Half-open integer range.
    Range,
    /// Replayable lazy sequence (generator, concat, crush).
    Lazy,
}

impl ValueKind {
    /// Returns true if values of this kind can produce a traversal at all.
    ///
    /// Text counts: traversing it directly yields its characters.
    #[must_use]
    pub const fn is_sequence(self) -> bool {
        !matches!(self, Self::Nil | Self::Bool | Self::Int | Self::Float)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Vec => "vec",
            Self::Set => "set",
            Self::Range => "range",
            Self::Lazy => "lazy",
        };
        f.write_str(name)
    }
}
