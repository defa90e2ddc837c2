//! Seating state behind the ledger lock
//!
//! All methods here run with the ledger mutex held and must not call back
//! into [`super::SeatingLedger`]. Each mutating method validates first and
//! only then writes, so an `Err` always leaves the maps untouched.

use chrono::Utc;
use shared::models::{ArrivedGuest, GuestListEntry, Table, seats_for_party};
use std::collections::HashMap;

use super::{LedgerError, LedgerResult, LedgerStats};

#[derive(Debug, Default)]
pub(super) struct SeatingState {
    /// table_id -> guest list, in insertion order
    guest_list: HashMap<i64, Vec<GuestListEntry>>,
    /// table_id -> table record
    tables: HashMap<i64, Table>,
    /// name -> currently seated party
    arrived: HashMap<String, ArrivedGuest>,
    /// name -> assigned table_id
    assignments: HashMap<String, i64>,
}

impl SeatingState {
    // =========================================================================
    // Tables
    // =========================================================================

    pub(super) fn create_table(&mut self, id: i64, capacity: u32) -> LedgerResult<Table> {
        // Replacing a table keeps its occupancy so seat counts still reconcile
        let seated_count = self.tables.get(&id).map_or(0, |t| t.seated_count);
        if capacity < seated_count {
            return Err(LedgerError::CapacityViolation {
                table_id: id,
                capacity,
                seated_count,
            });
        }

        let table = Table {
            id,
            capacity,
            seated_count,
        };
        self.tables.insert(id, table);
        tracing::info!(table_id = id, capacity, seated_count, "Table created");
        Ok(table)
    }

    pub(super) fn get_table(&self, id: i64) -> LedgerResult<Table> {
        self.tables
            .get(&id)
            .copied()
            .ok_or(LedgerError::TableNotFound(id))
    }

    pub(super) fn update_table_capacity(&mut self, id: i64, capacity: u32) -> LedgerResult<Table> {
        let table = self
            .tables
            .get_mut(&id)
            .ok_or(LedgerError::TableNotFound(id))?;
        if capacity < table.seated_count {
            return Err(LedgerError::CapacityViolation {
                table_id: id,
                capacity,
                seated_count: table.seated_count,
            });
        }

        let previous = table.capacity;
        table.capacity = capacity;
        tracing::info!(table_id = id, previous, capacity, "Table capacity updated");
        Ok(*table)
    }

    pub(super) fn list_tables(&self) -> Vec<Table> {
        let mut tables: Vec<Table> = self.tables.values().copied().collect();
        tables.sort_by_key(|t| t.id);
        tables
    }

    // =========================================================================
    // Guest list
    // =========================================================================

    pub(super) fn add_guest_to_list(
        &mut self,
        name: &str,
        table_id: i64,
        party_size: u32,
    ) -> LedgerResult<GuestListEntry> {
        self.ensure_unassigned(name)?;
        let seats = self.seats_for(table_id, party_size)?;

        // First reference to an unknown table creates it, sized for this party
        self.tables.entry(table_id).or_insert_with(|| {
            tracing::info!(table_id, capacity = seats, "Table created from guest list");
            Table::new(table_id, seats)
        });

        let entry = GuestListEntry {
            table_id,
            name: name.to_string(),
            party_size,
        };
        self.guest_list
            .entry(table_id)
            .or_default()
            .push(entry.clone());
        self.assignments.insert(name.to_string(), table_id);

        tracing::debug!(table_id, guest = name, party_size, "Guest added to list");
        Ok(entry)
    }

    /// Add a guest to the list and grow the table so every listed party fits
    pub(super) fn reserve_guest(
        &mut self,
        name: &str,
        table_id: i64,
        party_size: u32,
    ) -> LedgerResult<(GuestListEntry, Table)> {
        self.ensure_unassigned(name)?;
        let seats = self.seats_for(table_id, party_size)?;

        let reserved = self.reserved_seats(table_id) + u64::from(seats);
        let required = u32::try_from(reserved).map_err(|_| LedgerError::CapacityExceeded {
            table_id,
            requested: u64::from(seats),
            available: self.tables.get(&table_id).map_or(0, Table::empty_seats),
        })?;

        let entry = self.add_guest_to_list(name, table_id, party_size)?;
        let table = self
            .tables
            .get_mut(&table_id)
            .ok_or(LedgerError::TableNotFound(table_id))?;
        if table.capacity < required {
            tracing::info!(
                table_id,
                previous = table.capacity,
                capacity = required,
                "Table capacity raised to fit guest list"
            );
            table.capacity = required;
        }

        Ok((entry, *table))
    }

    pub(super) fn list_guest_list_entries(&self) -> Vec<GuestListEntry> {
        self.guest_list.values().flatten().cloned().collect()
    }

    pub(super) fn get_seating_assignment(&self, name: &str) -> LedgerResult<i64> {
        self.assignments
            .get(name)
            .copied()
            .ok_or_else(|| LedgerError::AssignmentNotFound(name.to_string()))
    }

    // =========================================================================
    // Arrivals
    // =========================================================================

    pub(super) fn seat_arriving_guest(
        &mut self,
        name: &str,
        party_size: u32,
    ) -> LedgerResult<ArrivedGuest> {
        let table_id = self.get_seating_assignment(name)?;
        if self.arrived.contains_key(name) {
            return Err(LedgerError::AlreadySeated {
                name: name.to_string(),
                table_id,
            });
        }

        let table = self.tables.get_mut(&table_id).ok_or_else(|| {
            tracing::error!(table_id, guest = name, "Seating assignment points at a missing table");
            LedgerError::AssignedTableMissing {
                name: name.to_string(),
                table_id,
            }
        })?;

        // Check against current occupancy, not the invitation's party size
        let requested = u64::from(party_size) + 1;
        let occupied = u64::from(table.seated_count) + requested;
        let seated_count = match u32::try_from(occupied) {
            Ok(count) if count <= table.capacity => count,
            _ => {
                tracing::warn!(
                    table_id,
                    guest = name,
                    requested,
                    available = table.empty_seats(),
                    "Not enough empty seats"
                );
                return Err(LedgerError::CapacityExceeded {
                    table_id,
                    requested,
                    available: table.empty_seats(),
                });
            }
        };

        let previous = table.seated_count;
        table.seated_count = seated_count;

        let guest = ArrivedGuest {
            name: name.to_string(),
            table_id,
            party_size,
            arrival_time: Utc::now(),
        };
        self.arrived.insert(name.to_string(), guest.clone());

        tracing::info!(table_id, guest = name, previous, seated_count, "Guest seated");
        Ok(guest)
    }

    pub(super) fn remove_guest(&mut self, name: &str) -> LedgerResult<ArrivedGuest> {
        let (table_id, seats) = match self.arrived.get(name) {
            Some(guest) => (guest.table_id, guest.seats()),
            None => return Err(LedgerError::GuestNotFound(name.to_string())),
        };

        let table = self.tables.get_mut(&table_id).ok_or_else(|| {
            tracing::error!(table_id, guest = name, "Seated guest points at a missing table");
            LedgerError::AssignedTableMissing {
                name: name.to_string(),
                table_id,
            }
        })?;

        let previous = table.seated_count;
        let seated_count = u32::try_from(seats)
            .ok()
            .and_then(|seats| previous.checked_sub(seats))
            .ok_or_else(|| {
                tracing::error!(
                    table_id,
                    guest = name,
                    seated_count = previous,
                    releasing = seats,
                    "Seated count is below the departing party"
                );
                LedgerError::SeatCountMismatch {
                    table_id,
                    seated_count: previous,
                    releasing: seats,
                }
            })?;
        table.seated_count = seated_count;

        let guest = self
            .arrived
            .remove(name)
            .ok_or_else(|| LedgerError::GuestNotFound(name.to_string()))?;

        tracing::info!(table_id, guest = name, previous, seated_count, "Guest left");
        Ok(guest)
    }

    pub(super) fn get_guest(&self, name: &str) -> LedgerResult<ArrivedGuest> {
        self.arrived
            .get(name)
            .cloned()
            .ok_or_else(|| LedgerError::GuestNotFound(name.to_string()))
    }

    pub(super) fn list_arrived_guests(&self) -> Vec<ArrivedGuest> {
        self.arrived.values().cloned().collect()
    }

    // =========================================================================
    // Seats
    // =========================================================================

    pub(super) fn total_empty_seats(&self) -> u64 {
        self.tables
            .values()
            .map(|t| u64::from(t.empty_seats()))
            .sum()
    }

    pub(super) fn stats(&self) -> LedgerStats {
        let total_capacity = self.tables.values().map(|t| u64::from(t.capacity)).sum();
        let seated = self.tables.values().map(|t| u64::from(t.seated_count)).sum();
        LedgerStats {
            tables: self.tables.len(),
            listed_guests: self.assignments.len(),
            arrived_guests: self.arrived.len(),
            total_capacity,
            seated,
            empty_seats: self.total_empty_seats(),
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn ensure_unassigned(&self, name: &str) -> LedgerResult<()> {
        match self.assignments.get(name) {
            Some(&table_id) => Err(LedgerError::DuplicateGuest {
                name: name.to_string(),
                table_id,
            }),
            None => Ok(()),
        }
    }

    fn seats_for(&self, table_id: i64, party_size: u32) -> LedgerResult<u32> {
        seats_for_party(party_size).ok_or_else(|| LedgerError::CapacityExceeded {
            table_id,
            requested: u64::from(party_size) + 1,
            available: self.tables.get(&table_id).map_or(0, Table::empty_seats),
        })
    }

    /// Seats reserved by every party on a table's guest list
    fn reserved_seats(&self, table_id: i64) -> u64 {
        self.guest_list.get(&table_id).map_or(0, |entries| {
            entries.iter().map(|e| u64::from(e.party_size) + 1).sum()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Table 1 (capacity 10) with "A" seated as a party of 3
    fn state_with_seated_guest() -> SeatingState {
        let mut state = SeatingState::default();
        state.create_table(1, 10).unwrap();
        state.add_guest_to_list("A", 1, 2).unwrap();
        state.seat_arriving_guest("A", 2).unwrap();
        state
    }

    #[test]
    fn test_remove_guest_with_missing_table_keeps_arrival() {
        let mut state = state_with_seated_guest();
        state.tables.remove(&1);

        assert_eq!(
            state.remove_guest("A"),
            Err(LedgerError::AssignedTableMissing {
                name: "A".to_string(),
                table_id: 1,
            })
        );
        assert!(state.arrived.contains_key("A"));
        assert_eq!(state.get_seating_assignment("A"), Ok(1));
    }

    #[test]
    fn test_seat_with_missing_table_records_nothing() {
        let mut state = SeatingState::default();
        state.add_guest_to_list("B", 2, 0).unwrap();
        state.create_table(3, 4).unwrap();
        state.tables.remove(&2);

        assert_eq!(
            state.seat_arriving_guest("B", 0),
            Err(LedgerError::AssignedTableMissing {
                name: "B".to_string(),
                table_id: 2,
            })
        );
        assert!(state.arrived.is_empty());
        assert_eq!(state.get_table(3).unwrap().seated_count, 0);
    }

    #[test]
    fn test_remove_guest_reports_seat_count_mismatch() {
        let mut state = state_with_seated_guest();
        state.tables.get_mut(&1).unwrap().seated_count = 1;

        assert_eq!(
            state.remove_guest("A"),
            Err(LedgerError::SeatCountMismatch {
                table_id: 1,
                seated_count: 1,
                releasing: 3,
            })
        );
        assert_eq!(state.get_table(1).unwrap().seated_count, 1);
        assert!(state.arrived.contains_key("A"));
    }

    #[test]
    fn test_remove_guest_releases_exact_seats() {
        let mut state = state_with_seated_guest();
        assert_eq!(state.get_table(1).unwrap().seated_count, 3);

        let guest = state.remove_guest("A").unwrap();
        assert_eq!(guest.seats(), 3);
        assert_eq!(state.get_table(1).unwrap().seated_count, 0);
        assert!(state.arrived.is_empty());
    }
}
