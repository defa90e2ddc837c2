//! Numeric error codes
//!
//! Codes are grouped by the thousands digit, see [`super::ErrorCategory`].
//! A code never changes meaning once published; retired codes are not reused.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code carried in every error body.
///
/// Serialized as a bare number (`7002`, not `"TableCapacityExceeded"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ---- request ----
    /// Well-formed input that breaks a boundary rule
    ValidationFailed = 2,
    /// Body failed to parse (syntax, missing or unknown field, negative count)
    InvalidRequest = 5,
    /// Body was not sent as JSON
    UnsupportedMediaType = 9,

    // ---- tables ----
    TableNotFound = 7001,
    /// Party does not fit in the table's empty seats
    TableCapacityExceeded = 7002,
    /// New capacity would be below the seats already taken
    TableCapacityViolation = 7003,

    // ---- guests ----
    /// No arrived guest with that name
    GuestNotFound = 8001,
    /// Name already assigned to a table
    GuestAlreadyListed = 8002,
    GuestAlreadySeated = 8003,
    /// Name was never put on a guest list
    SeatingAssignmentNotFound = 8004,

    // ---- system ----
    InternalError = 9001,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Stock English message, used when no specific message is given
    pub const fn message(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "Validation failed",
            Self::InvalidRequest => "Invalid request body",
            Self::UnsupportedMediaType => {
                "Expected request with `Content-Type: application/json`"
            }
            Self::TableNotFound => "Table not found",
            Self::TableCapacityExceeded => "Not enough empty seats at the table",
            Self::TableCapacityViolation => "Capacity cannot be lower than seated guests",
            Self::GuestNotFound => "Guest not found",
            Self::GuestAlreadyListed => "Guest is already on the guest list",
            Self::GuestAlreadySeated => "Guest is already seated",
            Self::SeatingAssignmentNotFound => "Guest has no seating assignment",
            Self::InternalError => "Internal server error",
        }
    }

    const ALL: [ErrorCode; 11] = [
        Self::ValidationFailed,
        Self::InvalidRequest,
        Self::UnsupportedMediaType,
        Self::TableNotFound,
        Self::TableCapacityExceeded,
        Self::TableCapacityViolation,
        Self::GuestNotFound,
        Self::GuestAlreadyListed,
        Self::GuestAlreadySeated,
        Self::SeatingAssignmentNotFound,
        Self::InternalError,
    ];
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// A number that is not a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error code {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|code| code.code() == value)
            .ok_or(InvalidErrorCode(value))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
