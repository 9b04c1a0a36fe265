//! Seqcomb - Lazy combinators over sequence-like values
//!
//! This crate re-exports all layers of the seqcomb system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: seqcomb_combinators — prefix/suffix, flatten, concat, crush
//! Layer 0: seqcomb_foundation  — Core types (Value, Sequence, Error)
//! ```

pub use seqcomb_combinators as combinators;
pub use seqcomb_foundation as foundation;

pub use seqcomb_combinators::{
    Concat, Crush, CrushConfig, Slot, common_prefix, concat, crush, disparate_suffix, flatten,
    flatten_values,
};
pub use seqcomb_foundation::{Error, ErrorKind, Result, Sequence, Value};
