//! Shared types for the seating service
//!
//! Wire models for tables and guests plus the unified error system
//! used by the seating server and any client that talks to it.

pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};
