//! Status code for each error code

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::TableNotFound | Self::GuestNotFound => StatusCode::NOT_FOUND,
            Self::GuestAlreadyListed | Self::GuestAlreadySeated => StatusCode::CONFLICT,
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::TableCapacityExceeded
            | Self::TableCapacityViolation
            | Self::SeatingAssignmentNotFound => StatusCode::BAD_REQUEST,
        }
    }
}
