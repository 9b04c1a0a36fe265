//! Dynamic values, traversal capabilities, and errors for seqcomb.
//!
//! This crate provides:
//! - [`Value`] - The dynamically typed value the duck-typed combinators work on
//! - [`ValueKind`] - Kind descriptors used in diagnostics
//! - [`Sequence`] / [`LazySeq`] - The "can produce a traversal" capability
//! - [`ValueIter`] - Owned, restartable-per-call traversal over a value
//! - [`Error`] - Rich error types with context
//! - Persistent collections ([`SeqVec`], [`SeqSet`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod iter;
pub mod sequence;
pub mod types;
pub mod value;

pub use collections::{SeqSet, SeqVec};
pub use error::{Error, ErrorContext, ErrorKind};
pub use iter::ValueIter;
pub use sequence::{Generator, LazySeq, Sequence};
pub use types::ValueKind;
pub use value::Value;

/// Result type alias using the seqcomb error type.
pub type Result<T> = std::result::Result<T, Error>;
