//! Storage policy layer shared by the services.
//!
//! # Invariants
//! - `get*` never returns an error; backend and decode failures are logged at
//!   `warn` and reported as absent.
//! - `set*`, `remove*` and `clear` log at `error` and return the failure.
//! - Log events carry the key only, never the stored value.

use super::keys;
use super::kv::{KeyValueStore, StoreResult};
use crate::model::user::User;
use log::{debug, error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Read-tolerant, write-strict wrapper over a `KeyValueStore`.
pub struct StorageAdapter<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> StorageAdapter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the raw value under `key`, or `None` when absent or unreadable.
    pub fn get(&self, key: &str) -> Option<String> {
        match self.store.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                warn!("event=kv_get module=storage status=error key={key} error={err}");
                None
            }
        }
    }

    pub fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.store.set_item(key, value).map_err(|err| {
            error!("event=kv_set module=storage status=error key={key} error={err}");
            err
        })
    }

    pub fn remove(&self, key: &str) -> StoreResult<()> {
        self.store.remove_item(key).map_err(|err| {
            error!("event=kv_remove module=storage status=error key={key} error={err}");
            err
        })
    }

    /// Removes every key in `keys` in one backend call.
    pub fn clear(&self, keys: &[&str]) -> StoreResult<()> {
        self.store.multi_remove(keys).map_err(|err| {
            error!(
                "event=kv_clear module=storage status=error key_count={} error={err}",
                keys.len()
            );
            err
        })?;
        debug!(
            "event=kv_clear module=storage status=ok key_count={}",
            keys.len()
        );
        Ok(())
    }

    /// Decodes the JSON value under `key`; corrupt JSON counts as absent.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("event=kv_decode module=storage status=error key={key} error={err}");
                None
            }
        }
    }

    pub fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value).map_err(|err| {
            error!("event=kv_encode module=storage status=error key={key} error={err}");
            err
        })?;
        self.set(key, &raw)
    }

    /// Persists `user` as the current session user.
    pub fn save_user(&self, user: &User) -> StoreResult<()> {
        self.set_json(keys::USER, user)
    }

    pub fn get_user(&self) -> Option<User> {
        self.get_json(keys::USER)
    }

    pub fn remove_user(&self) -> StoreResult<()> {
        self.remove(keys::USER)
    }
}
