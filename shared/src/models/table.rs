//! Table Model

use serde::{Deserialize, Serialize};

/// Table entity (桌台)
///
/// `capacity` is the number of seats the table offers, `seated_count` the
/// number currently occupied by arrived parties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub id: i64,
    pub capacity: u32,
    pub seated_count: u32,
}

impl Table {
    pub fn new(id: i64, capacity: u32) -> Self {
        Self {
            id,
            capacity,
            seated_count: 0,
        }
    }

    /// Seats still free at this table
    pub fn empty_seats(&self) -> u32 {
        self.capacity.saturating_sub(self.seated_count)
    }
}

/// Create table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableCreate {
    pub id: i64,
    pub capacity: u32,
}

/// Update table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableUpdate {
    pub capacity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_seats() {
        let mut table = Table::new(1, 10);
        assert_eq!(table.empty_seats(), 10);
        table.seated_count = 7;
        assert_eq!(table.empty_seats(), 3);
    }

    #[test]
    fn test_table_create_rejects_unknown_fields() {
        let ok: TableCreate = serde_json::from_str(r#"{"id":3,"capacity":8}"#).unwrap();
        assert_eq!(ok.id, 3);
        assert_eq!(ok.capacity, 8);

        let err = serde_json::from_str::<TableCreate>(r#"{"id":3,"capacity":8,"zone":1}"#);
        assert!(err.is_err());
    }
}
