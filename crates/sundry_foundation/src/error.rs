//! Error types for sundry operations.
//!
//! Uses `thiserror` for ergonomic error definition. The library signals
//! exactly one condition: an operation's required argument was nil, absent,
//! or of the wrong shape. Callers match on [`ErrorKind`] rather than
//! parsing messages.

use thiserror::Error;

use crate::kind::Kind;

/// Result alias for fallible sundry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for sundry operations.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an invalid-argument error.
    #[must_use]
    pub fn invalid_argument(expected: &'static str, actual: Kind) -> Self {
        Self::new(ErrorKind::InvalidArgument { expected, actual })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required argument was nil, absent, or of the wrong shape.
    #[error("invalid argument: expected {expected}, got {actual}")]
    InvalidArgument {
        /// Description of the accepted shapes.
        expected: &'static str,
        /// The kind that was actually supplied.
        actual: Kind,
    },
}
