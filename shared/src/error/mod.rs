//! Unified error system for the seating service
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ErrorBody`]: JSON body of every error response
//!
//! # Error Code Ranges
//!
//! - 0xxx: Request errors
//! - 7xxx: Table errors
//! - 8xxx: Guest errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorBody, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::TableNotFound);
//!
//! let err = AppError::with_message(ErrorCode::TableCapacityExceeded, "Table 3 is full")
//!     .with_detail("table_id", 3);
//!
//! let body = ErrorBody::from(&err);
//! assert_eq!(body.code, 7002);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
