mod common;

use common::FlakyStore;
use habit_core::db::open_db_in_memory;
use habit_core::storage::keys;
use habit_core::{
    AuthError, AuthService, KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, User,
};

#[test]
fn register_then_login_returns_same_user() {
    let store = MemoryKeyValueStore::new();
    let auth = AuthService::new(&store);

    let registered = auth.register("A", "a@b.com", "secret").unwrap();
    let logged_in = auth.login("a@b.com", "secret").unwrap();

    assert_eq!(logged_in.email, "a@b.com");
    assert_eq!(logged_in, registered);
}

#[test]
fn register_rejects_duplicate_email_without_appending() {
    let store = MemoryKeyValueStore::new();
    let auth = AuthService::new(&store);
    auth.register("A", "a@b.com", "secret").unwrap();

    let err = auth.register("B", "a@b.com", "other-secret").unwrap_err();
    assert_eq!(err, AuthError::UserExists);
    assert_eq!(err.to_string(), "User already exists");
    assert_eq!(stored_users(&store).len(), 1);
}

#[test]
fn duplicate_email_check_is_case_sensitive() {
    let store = MemoryKeyValueStore::new();
    let auth = AuthService::new(&store);
    auth.register("A", "a@b.com", "secret").unwrap();
    auth.register("A2", "A@b.com", "secret").unwrap();

    assert_eq!(stored_users(&store).len(), 2);
}

#[test]
fn register_stores_session_user_as_side_effect() {
    let store = MemoryKeyValueStore::new();
    let auth = AuthService::new(&store);

    let user = auth.register("Ada", "ada@example.com", "secret").unwrap();
    assert_eq!(auth.get_current_user(), Some(user));
}

#[test]
fn login_rejects_wrong_password_and_unknown_email() {
    let store = MemoryKeyValueStore::new();
    let auth = AuthService::new(&store);
    auth.register("A", "a@b.com", "secret").unwrap();
    auth.logout();

    assert_eq!(
        auth.login("a@b.com", "Secret").unwrap_err(),
        AuthError::InvalidCredentials
    );
    assert_eq!(
        auth.login("x@b.com", "secret").unwrap_err().message(),
        "Invalid credentials"
    );
    assert_eq!(auth.get_current_user(), None);
}

#[test]
fn login_persists_session_and_logout_clears_it() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);
    let auth = AuthService::new(&store);
    auth.register("A", "a@b.com", "secret").unwrap();
    auth.logout();
    assert_eq!(auth.get_current_user(), None);

    let user = auth.login("a@b.com", "secret").unwrap();
    assert_eq!(auth.get_current_user(), Some(user));

    auth.logout();
    assert_eq!(auth.get_current_user(), None);
    assert_eq!(store.get_item(keys::USER).unwrap(), None);
}

#[test]
fn write_failures_map_to_generic_messages() {
    let store = FlakyStore::new();
    let auth = AuthService::new(&store);
    auth.register("A", "a@b.com", "secret").unwrap();

    store.fail_writes.set(true);
    assert_eq!(
        auth.register("B", "b@b.com", "secret").unwrap_err(),
        AuthError::RegistrationFailed
    );
    assert_eq!(
        auth.login("a@b.com", "secret").unwrap_err(),
        AuthError::LoginFailed
    );
}

#[test]
fn logout_swallows_storage_failures() {
    let store = FlakyStore::new();
    let auth = AuthService::new(&store);
    auth.register("A", "a@b.com", "secret").unwrap();

    store.fail_writes.set(true);
    auth.logout();
    store.fail_writes.set(false);
    assert!(auth.get_current_user().is_some());
}

#[test]
fn unreadable_store_reports_no_current_user() {
    let store = FlakyStore::new();
    let auth = AuthService::new(&store);
    auth.register("A", "a@b.com", "secret").unwrap();

    store.fail_reads.set(true);
    assert_eq!(auth.get_current_user(), None);
    assert_eq!(
        auth.login("a@b.com", "secret").unwrap_err(),
        AuthError::InvalidCredentials
    );
}

#[test]
fn corrupt_session_entry_reads_as_logged_out() {
    let store = MemoryKeyValueStore::new();
    store.set_item(keys::USER, "null").unwrap();
    let auth = AuthService::new(&store);

    assert_eq!(auth.get_current_user(), None);
}

fn stored_users(store: &MemoryKeyValueStore) -> Vec<User> {
    let raw = store.get_item(keys::ALL_USERS).unwrap().unwrap();
    serde_json::from_str(&raw).unwrap()
}
