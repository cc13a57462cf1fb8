//! Fixed storage keys.

/// Current session user.
pub const USER: &str = "@habit_tracker_user";
/// Vestigial habit list key; no active code path reads it.
pub const LEGACY_HABITS: &str = "@habit_tracker_habits";
/// Every registered user.
pub const ALL_USERS: &str = "@all_users";
/// Every habit of every user.
pub const ALL_HABITS: &str = "@all_habits";
/// Completion records; read-only.
pub const HABIT_COMPLETIONS: &str = "@habit_completions";
/// Dark-mode flag owned by the presentation layer.
pub const THEME: &str = "@habit_tracker_theme";

/// Keys owned by the core, cleared together on a full reset.
pub const CORE_KEYS: &[&str] = &[USER, LEGACY_HABITS, ALL_USERS, ALL_HABITS, HABIT_COMPLETIONS];
