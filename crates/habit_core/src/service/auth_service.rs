//! Account registration and session handling.
//!
//! # Responsibility
//! - Maintain the registered user list under `@all_users`.
//! - Maintain the session user under `@habit_tracker_user`.
//!
//! # Invariants
//! - Emails are unique by exact, case-sensitive comparison.
//! - Credentials are compared verbatim.
//! - Expected failures are `AuthError` values, never panics.

use crate::model::user::User;
use crate::storage::{keys, KeyValueStore, StorageAdapter};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AuthResult<T> = Result<T, AuthError>;

/// Expected auth failures, each with fixed user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Registration email is already taken.
    UserExists,
    /// No user matches the email/password pair.
    InvalidCredentials,
    /// Storage rejected a registration write.
    RegistrationFailed,
    /// Storage rejected the session write during login.
    LoginFailed,
}

impl AuthError {
    pub fn message(self) -> &'static str {
        match self {
            Self::UserExists => "User already exists",
            Self::InvalidCredentials => "Invalid credentials",
            Self::RegistrationFailed => "Registration failed",
            Self::LoginFailed => "Login failed",
        }
    }
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for AuthError {}

/// Registration, login and session lookup over a key-value store.
pub struct AuthService<S: KeyValueStore> {
    storage: StorageAdapter<S>,
}

impl<S: KeyValueStore> AuthService<S> {
    pub fn new(store: S) -> Self {
        Self {
            storage: StorageAdapter::new(store),
        }
    }

    /// Registers a new user.
    ///
    /// # Contract
    /// - Fails with `UserExists` when any stored user has the same email; the
    ///   stored list is left untouched.
    /// - Appends the user, rewrites `@all_users`, then stores the user as the
    ///   session user.
    /// - The stored session is a side effect only: callers must not treat a
    ///   successful registration as a login.
    pub fn register(&self, name: &str, email: &str, password: &str) -> AuthResult<User> {
        let mut users = self.load_users();
        if users.iter().any(|user| user.email == email) {
            info!("event=auth_register module=auth status=rejected reason=user_exists");
            return Err(AuthError::UserExists);
        }

        let user = User::new(name, email, password);
        users.push(user.clone());

        let persisted = self
            .storage
            .set_json(keys::ALL_USERS, &users)
            .and_then(|()| self.storage.save_user(&user));
        if let Err(err) = persisted {
            error!("event=auth_register module=auth status=error error={err}");
            return Err(AuthError::RegistrationFailed);
        }

        info!(
            "event=auth_register module=auth status=ok user_id={} user_count={}",
            user.id,
            users.len()
        );
        Ok(user)
    }

    /// Logs in the first user matching both email and password.
    pub fn login(&self, email: &str, password: &str) -> AuthResult<User> {
        let Some(user) = self
            .load_users()
            .into_iter()
            .find(|user| user.has_credentials(email, password))
        else {
            info!("event=auth_login module=auth status=rejected reason=invalid_credentials");
            return Err(AuthError::InvalidCredentials);
        };

        if let Err(err) = self.storage.save_user(&user) {
            error!("event=auth_login module=auth status=error error={err}");
            return Err(AuthError::LoginFailed);
        }

        info!("event=auth_login module=auth status=ok user_id={}", user.id);
        Ok(user)
    }

    /// Clears the session user. Best effort: failures are only logged.
    pub fn logout(&self) {
        match self.storage.remove_user() {
            Ok(()) => info!("event=auth_logout module=auth status=ok"),
            Err(err) => warn!("event=auth_logout module=auth status=error error={err}"),
        }
    }

    /// Returns the session user, or `None` when absent or unreadable.
    pub fn get_current_user(&self) -> Option<User> {
        self.storage.get_user()
    }

    fn load_users(&self) -> Vec<User> {
        self.storage
            .get_json::<Vec<User>>(keys::ALL_USERS)
            .unwrap_or_default()
    }
}
