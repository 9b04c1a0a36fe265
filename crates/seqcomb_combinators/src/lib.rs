//! Lazy sequence combinators for seqcomb.
//!
//! This crate provides:
//! - [`common_prefix`] / [`disparate_suffix`] - Pairwise comparison of two sequences
//! - [`flatten`] / [`flatten_values`] - One-level flattening
//! - [`Concat`] - Reusable concatenation that keeps a lone argument intact
//! - [`Crush`] - Reusable recursive flattening
//!
//! Every combinator is lazy: nothing is pulled from an input until the
//! caller asks for the next output, so infinite inputs work as long as only
//! a finite prefix is consumed. The duck-typed combinators work on
//! [`Value`](seqcomb_foundation::Value) and report a non-sequence-like
//! element as an error item at the moment that element is reached.
//!
//! ```
//! use seqcomb_combinators::{Concat, Crush};
//! use seqcomb_foundation::Value;
//!
//! let joined = Concat::new([Value::vec([1, 2]), Value::vec([Value::vec([3])])]);
//! let crushed: Vec<Value> = Crush::new(joined).iter().map(Result::unwrap).collect();
//! assert_eq!(crushed, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod adapt;
pub mod concat;
pub mod config;
pub mod crush;
pub mod flatten;
pub mod prefix;

pub use concat::{Concat, ConcatIter, concat};
pub use config::CrushConfig;
pub use crush::{Crush, CrushIter, crush};
pub use flatten::{Flatten, FlattenValues, flatten, flatten_values};
pub use prefix::{CommonPrefix, DisparateSuffix, Slot, common_prefix, disparate_suffix};
