//! Input validation helpers
//!
//! Boundary checks for values that arrive in request paths. The ledger
//! itself accepts any name; these limits belong to the transport.

use crate::utils::AppError;

/// Guest names
pub const MAX_NAME_LEN: usize = 200;

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.chars().count()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate a guest name taken from the URL path
pub fn validate_guest_name(name: &str) -> Result<(), AppError> {
    validate_required_text(name, "name", MAX_NAME_LEN)
}
