//! Flat status codes returned by every boundary call.

use serde::{Deserialize, Serialize};

/// Outcome of a boundary call.
///
/// Exactly one code is produced per invocation. `Success` means the
/// operation ran to completion; every other code means the operation had
/// no effect beyond what its contract documents, and every output slot
/// was left defensively cleared.
///
/// The discriminants are stable and may cross process boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
#[repr(i32)]
pub enum StatusCode {
    /// The operation completed.
    Success = 0,
    /// A required input was missing or null.
    InvalidArgument = 1,
    /// An index or position fell outside the valid range.
    OutOfBounds = 2,
    /// A resize was attempted on a fixed-size collection.
    NotImplemented = 3,
    /// An allocation failed.
    OutOfMemory = 4,
    /// Anything unclassified, including contained panics.
    Unexpected = 5,
}

impl StatusCode {
    /// Check whether this code reports success.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, StatusCode::Success)
    }

    /// Get the numeric value carried across the boundary.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StatusCode::Success => "Success",
            StatusCode::InvalidArgument => "InvalidArgument",
            StatusCode::OutOfBounds => "OutOfBounds",
            StatusCode::NotImplemented => "NotImplemented",
            StatusCode::OutOfMemory => "OutOfMemory",
            StatusCode::Unexpected => "Unexpected",
        };
        write!(f, "{}({})", name, self.code())
    }
}
