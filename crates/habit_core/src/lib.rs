//! Core domain logic for the habit tracker.
//! This crate is the single source of truth for habit, progress and account
//! invariants; UI layers call into it through the services and utilities.

pub mod dates;
pub mod db;
pub mod logging;
pub mod model;
pub mod progress;
pub mod service;
pub mod storage;
pub mod validation;

pub use dates::{format_date, get_greeting, get_today_string};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::habit::{Habit, HabitCompletion, HabitFrequency};
pub use model::user::User;
pub use progress::{
    calculate_progress, filter_habits, get_streak_count, get_weekly_progress, progress_message,
    HabitFilter, ProgressSummary, StreakTier,
};
pub use service::auth_service::{AuthError, AuthResult, AuthService};
pub use service::habit_service::HabitService;
pub use storage::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StorageAdapter, StoreError,
    StoreResult,
};
pub use validation::{
    validate_email, validate_habit_name, validate_name, validate_password, Validation,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
