//! Persisted domain records.
//!
//! # Responsibility
//! - Define the records stored as JSON blobs in the key-value store.
//! - Keep field names aligned with the persisted camelCase wire format.
//!
//! # Invariants
//! - Ids are creation-time derived and strictly increasing within a process.
//! - `Habit::completed_dates` never holds the same day twice when mutated
//!   through `Habit::toggle_date`.

pub mod habit;
pub mod id;
pub mod user;
