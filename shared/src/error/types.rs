//! AppError and the JSON error body

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Error returned by every fallible handler.
///
/// Carries the numeric [`ErrorCode`], a message meant for people, and
/// optional context such as the table id or guest name involved.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<Map<String, Value>>,
}

impl AppError {
    /// Error with the code's stock message
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.message())
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Attach one piece of context; later keys overwrite earlier ones
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// Input passed parsing but broke a boundary rule (blank name, too long...)
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Request body could not be parsed into the expected payload
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Request body was not sent as `application/json`
    pub fn unsupported_media_type(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::UnsupportedMediaType, msg)
    }
}

/// JSON body sent with every non-2xx response
///
/// ```json
/// { "code": 7002, "message": "Table 1 cannot seat 4 more guests (2 empty seats)",
///   "details": { "table_id": 1, "requested": 4, "available": 2 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Map<String, Value>>,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.code.code(),
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.http_status();

        match self.code.category() {
            ErrorCategory::System => {
                tracing::error!(code = %self.code, message = %self.message, "Request failed");
            }
            _ => {
                tracing::debug!(code = %self.code, status = status.as_u16(), "Request rejected");
            }
        }

        (status, axum::Json(ErrorBody::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_new_uses_stock_message() {
        let err = AppError::new(ErrorCode::TableNotFound);
        assert_eq!(err.message, "Table not found");
        assert!(err.details.is_none());
        assert_eq!(err.to_string(), "Table not found");
    }

    #[test]
    fn test_details_accumulate() {
        let err = AppError::with_message(ErrorCode::TableCapacityExceeded, "table 1 is full")
            .with_detail("table_id", 1)
            .with_detail("available", 0)
            .with_detail("available", 2);

        let details = err.details.unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details["table_id"], 1);
        assert_eq!(details["available"], 2);
    }

    #[test]
    fn test_boundary_constructors() {
        assert_eq!(
            AppError::unsupported_media_type("not json").http_status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            AppError::invalid_request("bad body").code,
            ErrorCode::InvalidRequest
        );
        assert_eq!(
            AppError::validation("name must not be empty").http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_error_body_wire_shape() {
        let err = AppError::with_message(ErrorCode::GuestAlreadyListed, "Alice already listed")
            .with_detail("name", "Alice");
        let json = serde_json::to_value(ErrorBody::from(&err)).unwrap();
        assert_eq!(json["code"], 8002);
        assert_eq!(json["message"], "Alice already listed");
        assert_eq!(json["details"]["name"], "Alice");

        let bare = serde_json::to_string(&ErrorBody::from(&AppError::new(ErrorCode::GuestNotFound)))
            .unwrap();
        assert!(!bare.contains("details"));
        let back: ErrorBody = serde_json::from_str(&bare).unwrap();
        assert_eq!(back.code, 8001);
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::new(ErrorCode::GuestAlreadySeated).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = AppError::new(ErrorCode::InternalError).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
