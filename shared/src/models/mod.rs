//! Data models
//!
//! Shared between seating-server and its clients (via API).
//! Table IDs are `i64`; seat counts are `u32`.

pub mod guest;
pub mod table;

// Re-exports
pub use guest::*;
pub use table::*;
