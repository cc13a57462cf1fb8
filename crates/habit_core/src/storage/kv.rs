use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a key-value backend or of encoding a value for it.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Encode(serde_json::Error),
    /// Backend-specific failure without a richer error type.
    Backend(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode stored value: {err}"),
            Self::Backend(message) => write!(f, "storage backend failure: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::Backend(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Raw string key-value backend.
///
/// Implementations report every failure; policy about which failures are
/// swallowed lives in `StorageAdapter`.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
    fn remove_item(&self, key: &str) -> StoreResult<()>;
    fn multi_remove(&self, keys: &[&str]) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        (**self).remove_item(key)
    }

    fn multi_remove(&self, keys: &[&str]) -> StoreResult<()> {
        (**self).multi_remove(keys)
    }
}
