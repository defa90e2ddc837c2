//! SeatingLedger - In-memory seating state with capacity enforcement
//!
//! The ledger owns four related maps:
//! - guest list entries per table (invitations)
//! - table records (capacity / seated_count)
//! - arrived guests (parties physically seated)
//! - seating assignments (guest name -> table id)
//!
//! # Concurrency
//!
//! Every read and write goes through one `parking_lot::Mutex`. Reads do not
//! get a shared path: a reader must never see a table whose seated_count has
//! been bumped before the matching arrival record exists. Each public method
//! locks exactly once and never calls another public method while holding
//! the lock.
//!
//! # Arrival Flow
//!
//! ```text
//! seat_arriving_guest(name, party_size)
//!     ├─ 1. Resolve table via seating assignment   (AssignmentNotFound)
//!     ├─ 2. Reject a guest who is already seated   (AlreadySeated)
//!     ├─ 3. Load the table                         (AssignedTableMissing)
//!     ├─ 4. seated_count + party_size + 1 <= capacity ? (CapacityExceeded)
//!     └─ 5. Record arrival + bump seated_count
//! ```

mod error;
mod state;


pub use error::{LedgerError, LedgerResult};

use parking_lot::Mutex;
use serde::Serialize;
use shared::models::{ArrivedGuest, GuestListEntry, Table};
use std::sync::Arc;

use state::SeatingState;

/// Point-in-time counters taken under a single lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LedgerStats {
    pub tables: usize,
    pub listed_guests: usize,
    pub arrived_guests: usize,
    pub total_capacity: u64,
    pub seated: u64,
    pub empty_seats: u64,
}

/// Shared handle to the seating state
///
/// Cloning is cheap (`Arc`); every clone sees the same ledger. Independent
/// ledgers are created with [`SeatingLedger::new`].
#[derive(Clone, Default)]
pub struct SeatingLedger {
    state: Arc<Mutex<SeatingState>>,
}

impl std::fmt::Debug for SeatingLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stats = self.stats();
        f.debug_struct("SeatingLedger")
            .field("tables", &stats.tables)
            .field("arrived_guests", &stats.arrived_guests)
            .finish()
    }
}

impl SeatingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Tables
    // =========================================================================

    /// Register a table, replacing any existing record with the same id.
    ///
    /// A replaced table keeps its current seated_count; the new capacity may
    /// not drop below it.
    pub fn create_table(&self, id: i64, capacity: u32) -> LedgerResult<Table> {
        self.state.lock().create_table(id, capacity)
    }

    pub fn get_table(&self, id: i64) -> LedgerResult<Table> {
        self.state.lock().get_table(id)
    }

    /// Replace a table's capacity, keeping its seated_count.
    pub fn update_table_capacity(&self, id: i64, capacity: u32) -> LedgerResult<Table> {
        self.state.lock().update_table_capacity(id, capacity)
    }

    /// All tables, ordered by id
    pub fn list_tables(&self) -> Vec<Table> {
        self.state.lock().list_tables()
    }

    // =========================================================================
    // Guest list
    // =========================================================================

    /// Put `name` on the guest list of `table_id`.
    ///
    /// Does not touch seated_count. Fails with `DuplicateGuest` if the name is
    /// already assigned to any table. An unknown table is created with room
    /// for exactly this party.
    pub fn add_guest_to_list(
        &self,
        name: &str,
        table_id: i64,
        party_size: u32,
    ) -> LedgerResult<GuestListEntry> {
        self.state.lock().add_guest_to_list(name, table_id, party_size)
    }

    /// Same as [`add_guest_to_list`](Self::add_guest_to_list), then raise the
    /// table's capacity (never lower it) so every listed party fits.
    pub fn reserve_guest(
        &self,
        name: &str,
        table_id: i64,
        party_size: u32,
    ) -> LedgerResult<(GuestListEntry, Table)> {
        self.state.lock().reserve_guest(name, table_id, party_size)
    }

    /// Every guest list entry across all tables, in no particular order
    pub fn list_guest_list_entries(&self) -> Vec<GuestListEntry> {
        self.state.lock().list_guest_list_entries()
    }

    /// Table id a guest is assigned to
    pub fn get_seating_assignment(&self, name: &str) -> LedgerResult<i64> {
        self.state.lock().get_seating_assignment(name)
    }

    // =========================================================================
    // Arrivals
    // =========================================================================

    /// Seat an arriving guest with `party_size` companions at their assigned
    /// table. The party may differ from the invitation as long as the table
    /// has `party_size + 1` empty seats right now.
    pub fn seat_arriving_guest(&self, name: &str, party_size: u32) -> LedgerResult<ArrivedGuest> {
        self.state.lock().seat_arriving_guest(name, party_size)
    }

    /// Release a seated party's seats. The guest list entry and seating
    /// assignment stay, so the guest may arrive again.
    pub fn remove_guest(&self, name: &str) -> LedgerResult<ArrivedGuest> {
        self.state.lock().remove_guest(name)
    }

    pub fn get_guest(&self, name: &str) -> LedgerResult<ArrivedGuest> {
        self.state.lock().get_guest(name)
    }

    /// Every seated party, in no particular order
    pub fn list_arrived_guests(&self) -> Vec<ArrivedGuest> {
        self.state.lock().list_arrived_guests()
    }

    // =========================================================================
    // Seats
    // =========================================================================

    /// Sum of `capacity - seated_count` over all tables
    pub fn total_empty_seats(&self) -> u64 {
        self.state.lock().total_empty_seats()
    }

    pub fn stats(&self) -> LedgerStats {
        self.state.lock().stats()
    }
}
