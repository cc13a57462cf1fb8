//! SQLite-backed key-value store.
//!
//! # Invariants
//! - One row per key in `kv`; `set_item` replaces the whole value.
//! - `multi_remove` is all-or-nothing.

use super::kv::{KeyValueStore, StoreResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Key-value store over a migrated connection from `db::open_db*`.
pub struct SqliteKeyValueStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKeyValueStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStore for SqliteKeyValueStore<'_> {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1;", [key])?;
        Ok(())
    }

    fn multi_remove(&self, keys: &[&str]) -> StoreResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        for key in keys {
            tx.execute("DELETE FROM kv WHERE key = ?1;", [key])?;
        }
        tx.commit()?;
        Ok(())
    }
}
