use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Seating ledger errors
///
/// Every failed ledger call leaves the seating state exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Table {0} not found")]
    TableNotFound(i64),

    #[error("Guest {0} is not seated")]
    GuestNotFound(String),

    #[error("No seating assignment for guest {0}")]
    AssignmentNotFound(String),

    /// The assignment (or arrival record) points at a table that does not exist
    #[error("Table {table_id} assigned to guest {name} not found")]
    AssignedTableMissing { name: String, table_id: i64 },

    #[error("Table {table_id} cannot seat {requested} more guests ({available} empty seats)")]
    CapacityExceeded {
        table_id: i64,
        requested: u64,
        available: u32,
    },

    #[error("Table {table_id} capacity {capacity} is below its {seated_count} seated guests")]
    CapacityViolation {
        table_id: i64,
        capacity: u32,
        seated_count: u32,
    },

    #[error("Guest {name} is already on the guest list of table {table_id}")]
    DuplicateGuest { name: String, table_id: i64 },

    #[error("Guest {name} is already seated at table {table_id}")]
    AlreadySeated { name: String, table_id: i64 },

    /// A departing party holds more seats than its table has recorded
    #[error("Table {table_id} records {seated_count} seated guests but {releasing} are leaving")]
    SeatCountMismatch {
        table_id: i64,
        seated_count: u32,
        releasing: u64,
    },
}

impl LedgerError {
    /// Error code reported to API clients
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::TableNotFound(_) | Self::AssignedTableMissing { .. } => ErrorCode::TableNotFound,
            Self::GuestNotFound(_) => ErrorCode::GuestNotFound,
            Self::AssignmentNotFound(_) => ErrorCode::SeatingAssignmentNotFound,
            Self::CapacityExceeded { .. } => ErrorCode::TableCapacityExceeded,
            Self::CapacityViolation { .. } => ErrorCode::TableCapacityViolation,
            Self::DuplicateGuest { .. } => ErrorCode::GuestAlreadyListed,
            Self::AlreadySeated { .. } => ErrorCode::GuestAlreadySeated,
            Self::SeatCountMismatch { .. } => ErrorCode::InternalError,
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        let app = AppError::with_message(err.code(), err.to_string());
        match err {
            LedgerError::TableNotFound(table_id) => app.with_detail("table_id", table_id),
            LedgerError::GuestNotFound(name) | LedgerError::AssignmentNotFound(name) => {
                app.with_detail("name", name)
            }
            LedgerError::AssignedTableMissing { name, table_id }
            | LedgerError::DuplicateGuest { name, table_id }
            | LedgerError::AlreadySeated { name, table_id } => app
                .with_detail("name", name)
                .with_detail("table_id", table_id),
            LedgerError::CapacityExceeded {
                table_id,
                requested,
                available,
            } => app
                .with_detail("table_id", table_id)
                .with_detail("requested", requested)
                .with_detail("available", available),
            LedgerError::CapacityViolation {
                table_id,
                capacity,
                seated_count,
            } => app
                .with_detail("table_id", table_id)
                .with_detail("capacity", capacity)
                .with_detail("seated_count", seated_count),
            LedgerError::SeatCountMismatch {
                table_id,
                seated_count,
                releasing,
            } => app
                .with_detail("table_id", table_id)
                .with_detail("seated_count", seated_count)
                .with_detail("releasing", releasing),
        }
    }
}

pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_capacity_exceeded_maps_to_bad_request() {
        let app: AppError = LedgerError::CapacityExceeded {
            table_id: 3,
            requested: 2,
            available: 1,
        }
        .into();
        assert_eq!(app.code, ErrorCode::TableCapacityExceeded);
        assert_eq!(app.http_status(), StatusCode::BAD_REQUEST);
        let details = app.details.unwrap();
        assert_eq!(details["requested"], 2);
        assert_eq!(details["available"], 1);
    }

    #[test]
    fn test_not_found_variants_keep_distinct_messages() {
        let missing_guest: AppError = LedgerError::GuestNotFound("Bob".into()).into();
        assert_eq!(missing_guest.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(missing_guest.message, "Guest Bob is not seated");

        let missing_table: AppError = LedgerError::AssignedTableMissing {
            name: "Bob".into(),
            table_id: 9,
        }
        .into();
        assert_eq!(missing_table.code, ErrorCode::TableNotFound);
        assert_eq!(missing_table.message, "Table 9 assigned to guest Bob not found");

        let no_assignment: AppError = LedgerError::AssignmentNotFound("Bob".into()).into();
        assert_eq!(no_assignment.http_status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_seat_count_mismatch_is_internal() {
        let app: AppError = LedgerError::SeatCountMismatch {
            table_id: 2,
            seated_count: 1,
            releasing: 3,
        }
        .into();
        assert_eq!(app.code, ErrorCode::InternalError);
        assert_eq!(app.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(app.details.unwrap()["releasing"], 3);
    }

    #[test]
    fn test_duplicate_guest_is_conflict() {
        let app: AppError = LedgerError::DuplicateGuest {
            name: "Alice".into(),
            table_id: 1,
        }
        .into();
        assert_eq!(app.http_status(), StatusCode::CONFLICT);
        assert_eq!(app.details.unwrap()["name"], "Alice");
    }
}
