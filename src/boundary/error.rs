//! Rich in-process error representation.
//!
//! Internal code signals failures with `VectorError` and propagates them
//! with `?`. Nothing in this type ever crosses the external interface:
//! the boundary runner flattens it to a [`StatusCode`] at the last moment.

use thiserror::Error;

use super::status::StatusCode;

/// Result alias used throughout the crate's internals.
pub type VectorResult<T> = Result<T, VectorError>;

/// Internal failure, carrying enough context for diagnostics.
///
/// Each variant maps to exactly one [`StatusCode`]; the mapping lives in
/// [`VectorError::status`] and nowhere else.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum VectorError {
    /// A required input was missing or null.
    #[error("required argument was missing or null")]
    InvalidArgument,

    /// An index or position fell outside the valid range.
    #[error("index {index} is out of bounds for size {size}")]
    OutOfBounds { index: u32, size: u32 },

    /// A resize was attempted on a fixed-size collection.
    #[error("cannot resize a fixed-size collection")]
    NotImplemented,

    /// An allocation failed.
    #[error("allocation failed")]
    OutOfMemory,

    /// Anything unclassified.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl VectorError {
    /// Build an out-of-bounds error for `index` against a collection of
    /// `size` elements.
    #[must_use]
    pub const fn out_of_bounds(index: u32, size: u32) -> Self {
        VectorError::OutOfBounds { index, size }
    }

    /// Build an unclassified error with a diagnostic message.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        VectorError::Unexpected(message.into())
    }

    /// The flat status code this error translates to at the boundary.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            VectorError::InvalidArgument => StatusCode::InvalidArgument,
            VectorError::OutOfBounds { .. } => StatusCode::OutOfBounds,
            VectorError::NotImplemented => StatusCode::NotImplemented,
            VectorError::OutOfMemory => StatusCode::OutOfMemory,
            VectorError::Unexpected(_) => StatusCode::Unexpected,
        }
    }
}

impl From<std::collections::TryReserveError> for VectorError {
    fn from(_: std::collections::TryReserveError) -> Self {
        VectorError::OutOfMemory
    }
}
