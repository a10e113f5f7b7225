//! Error types for the diff crate.

use std::fmt;

use catdiff_types::NodeKind;

/// Which input of a comparison an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Reference,
    Candidate,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference => f.write_str("reference"),
            Self::Candidate => f.write_str("candidate"),
        }
    }
}

/// Errors that abort a comparison. Structural differences are never errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DiffError {
    /// A comparison root was not a branch.
    #[error("invalid input: {side} root must be an object, got {actual}")]
    InvalidInput { side: Side, actual: NodeKind },

    /// The trees nest deeper than the configured limit.
    #[error("nesting depth limit of {limit} exceeded at {path}")]
    DepthLimitExceeded { path: String, limit: usize },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
