use habit_core::{KeyValueStore, MemoryKeyValueStore, StoreError, StoreResult};
use std::cell::Cell;

/// Memory store whose reads and/or writes can be switched to fail.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: MemoryKeyValueStore,
    pub fail_reads: Cell<bool>,
    pub fail_writes: Cell<bool>,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn check(flag: &Cell<bool>, op: &str) -> StoreResult<()> {
        if flag.get() {
            return Err(StoreError::Backend(format!("{op} disabled")));
        }
        Ok(())
    }
}

impl KeyValueStore for FlakyStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Self::check(&self.fail_reads, "read")?;
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        Self::check(&self.fail_writes, "write")?;
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        Self::check(&self.fail_writes, "remove")?;
        self.inner.remove_item(key)
    }

    fn multi_remove(&self, keys: &[&str]) -> StoreResult<()> {
        Self::check(&self.fail_writes, "remove")?;
        self.inner.multi_remove(keys)
    }
}
