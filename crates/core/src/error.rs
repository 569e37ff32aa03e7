//! Canonical failure reasons using Railway-Oriented Programming.
//!
//! All failures are explicit, typed, and recoverable. Broken preconditions
//! are a different severity and go through [`invariant`](crate::invariant).

use thiserror::Error;

use crate::outcome::Outcome;

/// The standard fallible container for lift operations.
///
/// Callers that need a domain-specific reason type use
/// [`Outcome<T, E>`](Outcome) directly; this alias fixes the reason to the
/// canonical [`Error`].
pub type Fallible<T> = Outcome<T, Error>;

/// Canonical reason attached when absence or rejection is surfaced as a
/// typed failure.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
pub enum Error {
    /// A required value was absent.
    #[error("required value was absent: {context}")]
    Absent { context: String },

    /// A value was present but failed a domain predicate.
    #[error("value rejected: {reason}")]
    Rejected { reason: String },

    /// Catch-all for reasons produced outside this crate.
    #[error("unknown error: {0}")]
    Unknown(String),
}

impl Error {
    /// Create an absence error.
    pub fn absent(context: impl Into<String>) -> Self {
        Self::Absent {
            context: context.into(),
        }
    }

    /// Create a rejection error.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }
}
