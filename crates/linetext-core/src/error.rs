//! Error types.
//!
//! Every failure here is a violation of the caller's input contract. None is
//! transient, so nothing is retried or corrected: the error goes straight
//! back to the immediate caller.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = TextError> = std::result::Result<T, E>;

/// Errors raised while building or querying a `Text` or a `Position`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    /// A line passed to line-based construction contains a separator.
    ///
    /// `escaped` is the offending line with `\r` and `\n` rendered as
    /// visible escapes.
    #[error("the line contains a line separator: `{escaped}`")]
    InvalidLine { escaped: String },

    /// An argument is outside the accepted domain.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
}

/// Rejected arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    /// A search sequence contains a separator. Matching across a line
    /// boundary is not supported.
    #[error("the search sequence contains a line separator: `{escaped}`")]
    SeparatorInSequence { escaped: String },

    /// A position was requested with a negative coordinate.
    #[error("position coordinates must not be negative (line {line}, column {column})")]
    NegativeCoordinate { line: i64, column: i64 },
}
