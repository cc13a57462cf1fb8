//! Key-value persistence boundary.
//!
//! # Responsibility
//! - Define the backend contract (`KeyValueStore`) over string keys/values.
//! - Provide SQLite and in-memory backends.
//! - Wrap backends in `StorageAdapter`, the only storage surface services use.
//!
//! # Invariants
//! - Reads degrade gracefully: a failing or corrupt read is "absent".
//! - Writes surface failure to the caller as `StoreError`.
//! - Values are opaque strings; JSON encoding is the adapter's concern.

mod adapter;
pub mod keys;
mod kv;
mod memory;
mod sqlite;

pub use adapter::StorageAdapter;
pub use kv::{KeyValueStore, StoreError, StoreResult};
pub use memory::MemoryKeyValueStore;
pub use sqlite::SqliteKeyValueStore;
