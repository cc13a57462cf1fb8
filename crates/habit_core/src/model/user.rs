//! Registered user record.

use crate::model::id::{next_record_id, timestamp_now};
use serde::{Deserialize, Serialize};

/// A registered account.
///
/// `password` is stored and compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    /// Unique across all users, compared case-sensitively.
    pub email: String,
    pub password: String,
    /// RFC 3339 UTC creation time.
    pub created_at: String,
}

impl User {
    /// Builds a new user with a fresh id and creation timestamp.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: next_record_id(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
            created_at: timestamp_now(),
        }
    }

    pub fn has_credentials(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}
