//! Error types for seqcomb.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::types::ValueKind;

/// The main error type for seqcomb operations.
#[derive(Debug, Clone, Error)]
#[error("{kind}{}", .context.as_ref().map_or_else(String::new, |ctx| format!(" ({ctx})")))]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a not-sequence-like error for a value of the given kind.
    #[must_use]
    pub fn not_sequence(kind: ValueKind) -> Self {
        Self::new(ErrorKind::NotSequence { kind })
    }

    /// Returns true if this is a not-sequence-like error.
    #[must_use]
    pub const fn is_not_sequence(&self) -> bool {
        matches!(self.kind, ErrorKind::NotSequence { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A value was expected to be sequence-like but has no traversal.
    #[error("{kind} value is not sequence-like")]
    NotSequence {
        /// The kind of the offending value.
        kind: ValueKind,
    },
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// The combinator that was traversing (`"crush"`, `"flatten"`, ...).
    pub operation: Option<String>,
    /// Zero-based position of the offending element in the outer sequence.
    pub position: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation name.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Sets the element position.
    #[must_use]
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = &self.operation {
            write!(f, "in {operation}")?;
            if let Some(position) = self.position {
                write!(f, " at element {position}")?;
            }
        }
        Ok(())
    }
}
