//! Grouping of error codes by thousands digit

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Which part of the service produced an error
///
/// | Range | Category |
/// |-------|----------|
/// | below 1000 | `Request` |
/// | 7xxx | `Table` |
/// | 8xxx | `Guest` |
/// | anything else | `System` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Request,
    Table,
    Guest,
    System,
}

impl ErrorCategory {
    pub fn from_code(code: u16) -> Self {
        match code / 1000 {
            0 => Self::Request,
            7 => Self::Table,
            8 => Self::Guest,
            _ => Self::System,
        }
    }
}

impl ErrorCode {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
