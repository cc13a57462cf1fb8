use super::kv::{KeyValueStore, StoreResult};
use std::cell::RefCell;
use std::collections::HashMap;

/// Process-local backend for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn multi_remove(&self, keys: &[&str]) -> StoreResult<()> {
        let mut entries = self.entries.borrow_mut();
        for key in keys {
            entries.remove(*key);
        }
        Ok(())
    }
}
