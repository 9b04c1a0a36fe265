//! Recursive flattening.
//!
//! A [`Crush`] flattens its input to any depth, yielding every atomic value
//! reachable from it in depth-first, left-to-right order.
//!
//! The input itself is traversed with [`Value::traverse`], so text given
//! directly to a crush is broken into characters. Everything found inside
//! the input is traversed with [`Value::traverse_nested`], so nested text
//! stays whole:
//!
//! ```
//! use seqcomb_combinators::Crush;
//! use seqcomb_foundation::Value;
//!
//! let direct: Vec<Value> = Crush::new("123").iter().map(Result::unwrap).collect();
//! assert_eq!(direct, vec![Value::from("1"), Value::from("2"), Value::from("3")]);
//!
//! let nested: Vec<Value> = Crush::new(Value::vec(["123"])).iter().map(Result::unwrap).collect();
//! assert_eq!(nested, vec![Value::from("123")]);
//! ```

use std::iter::FusedIterator;

use seqcomb_foundation::{ErrorContext, Result, Sequence, Value, ValueIter};

use crate::config::CrushConfig;

/// A reusable, lazily evaluated recursive flattening of one input value.
///
/// The input must be sequence-like. That is checked when a traversal
/// starts, not at construction: iterating a crush over a scalar yields a
/// single not-sequence-like error.
#[derive(Clone, Debug)]
pub struct Crush {
    input: Value,
    config: CrushConfig,
}

impl Crush {
    /// Creates an unbounded crush over `input`.
    pub fn new(input: impl Into<Value>) -> Self {
        Self::with_config(input, CrushConfig::default())
    }

    /// Creates a crush with explicit configuration.
    pub fn with_config(input: impl Into<Value>, config: CrushConfig) -> Self {
        Self {
            input: input.into(),
            config,
        }
    }

    /// Builder method to bound the flattening depth.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.config = self.config.with_max_depth(depth);
        self
    }

    /// Returns the input value.
    #[must_use]
    pub fn input(&self) -> &Value {
        &self.input
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> CrushConfig {
        self.config
    }

    /// Starts a new traversal.
    ///
    /// If the input is not sequence-like, the first item is the error.
    #[must_use]
    pub fn iter(&self) -> CrushIter {
        self.try_iter()
            .unwrap_or_else(|err| CrushIter::new(ValueIter::failed(err), self.config))
    }

    /// Starts a new traversal, reporting a non-sequence-like input up front.
    ///
    /// # Errors
    ///
    /// Returns a not-sequence-like error if the input is a scalar.
    pub fn try_iter(&self) -> Result<CrushIter> {
        tracing::trace!(
            kind = %self.input.kind(),
            max_depth = ?self.config.max_depth,
            "crush traversal started"
        );
        let source = self
            .input
            .traverse()
            .map_err(|err| err.with_context(ErrorContext::new().with_operation("crush")))?;
        Ok(CrushIter::new(source, self.config))
    }
}

impl Sequence for Crush {
    fn traverse(&self) -> ValueIter {
        ValueIter::from_results(self.iter())
    }
}

impl From<Crush> for Value {
    fn from(crush: Crush) -> Self {
        Value::lazy(crush)
    }
}

impl<'a> IntoIterator for &'a Crush {
    type Item = Result<Value>;
    type IntoIter = CrushIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Creates an unbounded [`Crush`] over `input`.
pub fn crush(input: impl Into<Value>) -> Crush {
    Crush::new(input)
}

/// Iterator returned by [`Crush::iter`].
///
/// Keeps one traversal per nesting level currently being walked, innermost
/// last. Pulling an item never recurses, however deep the input is nested.
#[derive(Debug)]
pub struct CrushIter {
    stack: Vec<ValueIter>,
    config: CrushConfig,
}

impl CrushIter {
    fn new(source: ValueIter, config: CrushConfig) -> Self {
        Self {
            stack: vec![source],
            config,
        }
    }
}

impl Iterator for CrushIter {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let depth = self.stack.len().checked_sub(1)?;
            let value = match self.stack[depth].next() {
                Some(Ok(value)) => value,
                Some(Err(err)) => {
                    self.stack.clear();
                    return Some(Err(err));
                }
                None => {
                    self.stack.pop();
                    continue;
                }
            };
            if self.config.allows(depth) {
                if let Some(items) = value.traverse_nested() {
                    self.stack.push(items);
                    continue;
                }
            }
            return Some(Ok(value));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.stack.is_empty() {
            (0, Some(0))
        } else {
            (0, None)
        }
    }
}

impl FusedIterator for CrushIter {}
