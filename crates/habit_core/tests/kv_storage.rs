mod common;

use common::FlakyStore;
use habit_core::db::open_db_in_memory;
use habit_core::storage::keys;
use habit_core::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StorageAdapter, StoreError, User,
};

#[test]
fn sqlite_store_overwrites_and_removes() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);

    assert_eq!(store.get_item("k").unwrap(), None);
    store.set_item("k", "one").unwrap();
    store.set_item("k", "two").unwrap();
    assert_eq!(store.get_item("k").unwrap().as_deref(), Some("two"));

    store.remove_item("k").unwrap();
    assert_eq!(store.get_item("k").unwrap(), None);
    store.remove_item("k").unwrap();
}

#[test]
fn sqlite_multi_remove_leaves_other_keys() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);
    store.set_item(keys::ALL_USERS, "[]").unwrap();
    store.set_item(keys::ALL_HABITS, "[]").unwrap();
    store.set_item(keys::THEME, "true").unwrap();

    let adapter = StorageAdapter::new(&store);
    adapter.clear(keys::CORE_KEYS).unwrap();

    assert_eq!(store.get_item(keys::ALL_USERS).unwrap(), None);
    assert_eq!(store.get_item(keys::ALL_HABITS).unwrap(), None);
    assert_eq!(store.get_item(keys::THEME).unwrap().as_deref(), Some("true"));
}

#[test]
fn adapter_treats_failed_reads_as_absent() {
    let store = FlakyStore::new();
    store.inner.set_item("k", "v").unwrap();
    store.fail_reads.set(true);

    let adapter = StorageAdapter::new(&store);
    assert_eq!(adapter.get("k"), None);
    assert_eq!(adapter.get_json::<Vec<String>>("k"), None);
}

#[test]
fn adapter_surfaces_failed_writes() {
    let store = FlakyStore::new();
    store.fail_writes.set(true);
    let adapter = StorageAdapter::new(&store);

    assert!(matches!(adapter.set("k", "v"), Err(StoreError::Backend(_))));
    assert!(matches!(adapter.remove("k"), Err(StoreError::Backend(_))));
    assert!(adapter.clear(&["k"]).is_err());
    assert!(store.inner.is_empty());
}

#[test]
fn adapter_treats_corrupt_json_as_absent() {
    let store = MemoryKeyValueStore::new();
    store.set_item(keys::USER, "{not json").unwrap();
    store.set_item(keys::ALL_HABITS, "").unwrap();

    let adapter = StorageAdapter::new(&store);
    assert_eq!(adapter.get_user(), None);
    assert_eq!(adapter.get_json::<Vec<String>>(keys::ALL_HABITS), None);
}

#[test]
fn session_user_round_trips_with_camel_case_keys() {
    let store = MemoryKeyValueStore::new();
    let adapter = StorageAdapter::new(&store);
    let user = User::new("Ada", "ada@example.com", "secret");

    adapter.save_user(&user).unwrap();
    assert_eq!(adapter.get_user(), Some(user.clone()));

    let raw = store.get_item(keys::USER).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["createdAt"], user.created_at.as_str());
    assert_eq!(json["email"], "ada@example.com");

    adapter.remove_user().unwrap();
    assert_eq!(adapter.get_user(), None);
}
