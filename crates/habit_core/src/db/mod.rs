//! SQLite bootstrap for the device key-value store.
//!
//! # Responsibility
//! - Open and configure SQLite connections that back `SqliteKeyValueStore`.
//! - Apply schema migrations in deterministic order.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - No key-value reads/writes happen before migrations succeed.
//! - The schema only knows opaque keys and values; domain records live in
//!   JSON blobs owned by the services.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure while opening or migrating the key-value store.
#[derive(Debug)]
pub enum DbError {
    /// The backing file (or in-memory db) could not be opened.
    Open {
        mode: &'static str,
        source: rusqlite::Error,
    },
    /// Migration `version` failed; the store stays at its previous version.
    Migration {
        version: u32,
        source: rusqlite::Error,
    },
    /// The store was written by a newer binary.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    Sqlite(rusqlite::Error),
}

impl DbError {
    /// Short machine-readable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Open { .. } => "kv_open_failed",
            Self::Migration { .. } => "kv_migration_failed",
            Self::UnsupportedSchemaVersion { .. } => "kv_schema_too_new",
            Self::Sqlite(_) => "kv_sqlite_error",
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { mode, source } => write!(f, "failed to open {mode} store: {source}"),
            Self::Migration { version, source } => {
                write!(f, "store migration {version} failed: {source}")
            }
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "store schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::Migration { source, .. } => Some(source),
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
