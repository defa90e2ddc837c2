//! Guest Models
//!
//! A guest on the list is an invitation; an arrived guest is a party that
//! is physically seated. `party_size` counts companions only, so a party
//! always takes `party_size + 1` seats.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Seats taken by a party of `party_size` companions plus the named guest.
///
/// Returns `None` when the count does not fit in a `u32`.
pub fn seats_for_party(party_size: u32) -> Option<u32> {
    party_size.checked_add(1)
}

/// Guest list entry (邀请名单)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuestListEntry {
    #[serde(rename = "table")]
    pub table_id: i64,
    pub name: String,
    #[serde(rename = "accompanying_guests")]
    pub party_size: u32,
}

/// Arrived guest (已入座)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivedGuest {
    pub name: String,
    #[serde(rename = "table")]
    pub table_id: i64,
    #[serde(rename = "accompanying_guests")]
    pub party_size: u32,
    #[serde(rename = "time_arrived")]
    pub arrival_time: DateTime<Utc>,
}

impl ArrivedGuest {
    /// Seats this party occupies
    pub fn seats(&self) -> u64 {
        u64::from(self.party_size) + 1
    }
}

/// Add guest to list payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuestListAdd {
    pub table: i64,
    pub accompanying_guests: u32,
}

/// Guest arrival payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuestArrival {
    pub accompanying_guests: u32,
}

/// `{ "name": ... }` acknowledgement returned by list/arrival endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestName {
    pub name: String,
}

/// `GET /guest_list` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestListResponse {
    pub guests: Vec<GuestListEntry>,
}

/// `GET /guests` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrivedGuestsResponse {
    pub guests: Vec<ArrivedGuest>,
}

/// `GET /seats_empty` response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptySeatsResponse {
    pub seats_empty: u64,
}
