//! Configuration for recursive flattening.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for [`Crush`](crate::Crush).
///
/// Controls how many levels of nesting a crush removes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CrushConfig {
    /// Maximum number of nesting levels removed below the input
    /// (`None` = unbounded).
    ///
    /// Sequence-like elements found below this depth are emitted whole.
    pub max_depth: Option<usize>,
}

impl CrushConfig {
    /// Creates a configuration that flattens to any depth.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self { max_depth: None }
    }

    /// Builder method to bound the flattening depth.
    #[must_use]
    pub const fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Builder method to remove any depth bound.
    #[must_use]
    pub const fn without_max_depth(mut self) -> Self {
        self.max_depth = None;
        self
    }

    /// Returns true if `depth` more levels may still be flattened.
    pub(crate) const fn allows(self, depth: usize) -> bool {
        match self.max_depth {
            Some(max) => depth < max,
            None => true,
        }
    }
}
