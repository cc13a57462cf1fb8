//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Run input validation before calling core services.
//! - Keep error semantics simple: response envelopes with a message.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Store access is serialized process-wide, so one call's
//!   read-modify-write never interleaves with another's.
//! - Passwords never cross back over the boundary.

use habit_core::dates::{
    days_in_month, format_day, is_today, month_name, parse_day, WEEK_DAYS,
};
use habit_core::db::open_db;
use habit_core::progress::streak_count_as_of;
use habit_core::storage::keys;
use habit_core::{
    core_version as core_version_inner, filter_habits, get_greeting,
    init_logging as init_logging_inner, ping as ping_inner, validate_email, validate_habit_name,
    validate_name, validate_password, AuthService, Habit, HabitFilter, HabitFrequency,
    HabitService, ProgressSummary, SqliteKeyValueStore, StorageAdapter, StreakTier, User,
};
use log::warn;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock, PoisonError};

const DB_FILE_NAME: &str = "habit_tracker.sqlite3";
const DB_PATH_ENV: &str = "HABIT_TRACKER_DB_PATH";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static STORE_LOCK: Mutex<()> = Mutex::new(());

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Account fields safe to hand to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserItem {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

impl From<User> for UserItem {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Response envelope for auth calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    pub ok: bool,
    pub user: Option<UserItem>,
    /// Human-readable result for the UI.
    pub message: String,
}

impl AuthResponse {
    fn success(message: impl Into<String>, user: User) -> Self {
        Self {
            ok: true,
            user: Some(user.into()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            user: None,
            message: message.into(),
        }
    }
}

/// One habit row with view-ready derived fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitItem {
    pub id: String,
    pub name: String,
    /// `daily|weekly`.
    pub frequency: String,
    pub user_id: String,
    pub created_at: String,
    pub completed_dates: Vec<String>,
    pub completed_today: bool,
    pub streak: u32,
    /// `none|spark|charged|on_fire|legendary`, derived from `streak`.
    pub streak_tier: String,
}

/// Response envelope for habit listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitListResponse {
    pub items: Vec<HabitItem>,
    pub message: String,
}

/// Generic response envelope for habit mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitActionResponse {
    pub ok: bool,
    pub habit_id: Option<String>,
    /// Completion state after a toggle; `None` for other actions.
    pub completed: Option<bool>,
    pub message: String,
}

impl HabitActionResponse {
    fn success(message: impl Into<String>, habit_id: String, completed: Option<bool>) -> Self {
        Self {
            ok: true,
            habit_id: Some(habit_id),
            completed,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            habit_id: None,
            completed: None,
            message: message.into(),
        }
    }
}

/// Dashboard numbers for the progress screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressResponse {
    pub today_progress: u8,
    /// Seven values, oldest first.
    pub weekly: Vec<u8>,
    pub weekly_average: u8,
    pub completed_today: u32,
    pub total_habits: u32,
    pub overall_streak: u32,
    pub greeting: String,
    /// Encouragement line picked from `today_progress`.
    pub message: String,
}

/// Month grid metadata for the calendar header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub name: String,
    pub days: u32,
    /// Sunday-first short weekday labels.
    pub week_days: Vec<String>,
}

/// Registers an account after validating all fields.
///
/// # FFI contract
/// - Never panics.
/// - A successful registration is not a login; the UI must route to login.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_register(name: String, email: String, password: String) -> AuthResponse {
    let name = name.trim();
    let email = email.trim();
    let checks = [
        validate_name(name),
        validate_email(email),
        validate_password(&password),
    ];
    if let Some(message) = checks.into_iter().find_map(|check| check.into_result().err()) {
        return AuthResponse::failure(message);
    }

    match with_store(|store| AuthService::new(store).register(name, email, &password)) {
        Ok(Ok(user)) => AuthResponse::success("Account created.", user),
        Ok(Err(err)) => AuthResponse::failure(err.message()),
        Err(err) => AuthResponse::failure(format!("auth_register failed: {err}")),
    }
}

/// Logs in with exact email/password match.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_login(email: String, password: String) -> AuthResponse {
    let email = email.trim();
    if let Err(message) = validate_email(email).into_result() {
        return AuthResponse::failure(message);
    }

    match with_store(|store| AuthService::new(store).login(email, &password)) {
        Ok(Ok(user)) => AuthResponse::success("Logged in.", user),
        Ok(Err(err)) => AuthResponse::failure(err.message()),
        Err(err) => AuthResponse::failure(format!("auth_login failed: {err}")),
    }
}

/// Clears the session user. Best effort; never fails.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_logout() {
    if let Err(err) = with_store(|store| AuthService::new(store).logout()) {
        warn!("event=ffi_logout module=ffi status=error error={err}");
    }
}

/// Returns the session user, if any.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_current_user() -> Option<UserItem> {
    with_store(|store| AuthService::new(store).get_current_user())
        .ok()
        .flatten()
        .map(UserItem::from)
}

/// Creates a habit after validating its name and frequency.
#[flutter_rust_bridge::frb(sync)]
pub fn habit_create(name: String, frequency: String, user_id: String) -> HabitActionResponse {
    let name = name.trim();
    if let Err(message) = validate_habit_name(name).into_result() {
        return HabitActionResponse::failure(message);
    }
    let Some(frequency) = HabitFrequency::parse(&frequency) else {
        return HabitActionResponse::failure(format!("unsupported frequency `{frequency}`"));
    };

    match with_store(|store| HabitService::new(store).create_habit(name, frequency, &user_id)) {
        Ok(Ok(habit)) => HabitActionResponse::success("Habit created.", habit.id, None),
        Ok(Err(err)) => HabitActionResponse::failure(format!("habit_create failed: {err}")),
        Err(err) => HabitActionResponse::failure(format!("habit_create failed: {err}")),
    }
}

/// Lists habits, optionally for one user, with a list filter.
///
/// `filter` is `all|today|completed`; empty means `all`.
#[flutter_rust_bridge::frb(sync)]
pub fn habit_list(user_id: Option<String>, filter: String) -> HabitListResponse {
    let Some(filter) = HabitFilter::parse(&filter) else {
        return HabitListResponse {
            items: Vec::new(),
            message: format!("unsupported filter `{filter}`"),
        };
    };

    let habits = match with_store(|store| load_habits(&HabitService::new(store), user_id)) {
        Ok(habits) => habits,
        Err(err) => {
            return HabitListResponse {
                items: Vec::new(),
                message: format!("habit_list failed: {err}"),
            };
        }
    };

    let today = habit_core::dates::today();
    let today_string = format_day(today);
    let items = filter_habits(&habits, filter, &today_string)
        .into_iter()
        .map(|habit| {
            let streak = streak_count_as_of(habit, today);
            HabitItem {
                id: habit.id.clone(),
                name: habit.name.clone(),
                frequency: habit.frequency.as_str().to_string(),
                user_id: habit.user_id.clone(),
                created_at: habit.created_at.clone(),
                completed_dates: habit.completed_dates.clone(),
                completed_today: habit.is_completed_on(&today_string),
                streak,
                streak_tier: StreakTier::from_streak(streak).as_str().to_string(),
            }
        })
        .collect::<Vec<_>>();
    let message = if items.is_empty() {
        "No habits found.".to_string()
    } else {
        format!("Found {} habit(s).", items.len())
    };

    HabitListResponse { items, message }
}

/// Flips completion of one habit for `date` (`YYYY-MM-DD`, default today).
#[flutter_rust_bridge::frb(sync)]
pub fn habit_toggle(habit_id: String, date: Option<String>) -> HabitActionResponse {
    let date = match date {
        Some(raw) => match parse_day(&raw) {
            Some(day) => format_day(day),
            None => return HabitActionResponse::failure(format!("invalid date `{raw}`")),
        },
        None => habit_core::get_today_string(),
    };

    let result =
        with_store(|store| HabitService::new(store).toggle_habit_completion(&habit_id, &date));
    toggle_response("habit_toggle", habit_id, result)
}

/// Deletes one habit by id.
#[flutter_rust_bridge::frb(sync)]
pub fn habit_delete(habit_id: String) -> HabitActionResponse {
    match with_store(|store| HabitService::new(store).delete_habit(&habit_id)) {
        Ok(Ok(())) => HabitActionResponse::success("Habit deleted.", habit_id, None),
        Ok(Err(err)) => HabitActionResponse::failure(format!("habit_delete failed: {err}")),
        Err(err) => HabitActionResponse::failure(format!("habit_delete failed: {err}")),
    }
}

/// Toggles today's completion (flips; see core `mark_habit_complete`).
#[flutter_rust_bridge::frb(sync)]
pub fn habit_mark_complete(habit_id: String) -> HabitActionResponse {
    let result = with_store(|store| HabitService::new(store).mark_habit_complete(&habit_id));
    toggle_response("habit_mark_complete", habit_id, result)
}

/// Toggles today's completion (flips; see core `unmark_habit_complete`).
#[flutter_rust_bridge::frb(sync)]
pub fn habit_unmark_complete(habit_id: String) -> HabitActionResponse {
    let result = with_store(|store| HabitService::new(store).unmark_habit_complete(&habit_id));
    toggle_response("habit_unmark_complete", habit_id, result)
}

/// Progress dashboard for one user's habits, or all habits when `None`.
///
/// Unreadable storage yields an all-zero dashboard.
#[flutter_rust_bridge::frb(sync)]
pub fn progress_summary(user_id: Option<String>) -> ProgressResponse {
    let habits = with_store(|store| load_habits(&HabitService::new(store), user_id))
        .unwrap_or_default();
    let summary = ProgressSummary::current(&habits);

    ProgressResponse {
        today_progress: summary.today_progress,
        weekly: summary.weekly.to_vec(),
        weekly_average: summary.weekly_average,
        completed_today: saturating_u32(summary.completed_today),
        total_habits: saturating_u32(summary.total_habits),
        overall_streak: summary.overall_streak,
        greeting: get_greeting().to_string(),
        message: summary.message.to_string(),
    }
}

/// Calendar header data for `year`/`month`; `None` when `month` is not 1..=12.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_month(year: i32, month: u32) -> Option<CalendarMonth> {
    let days = days_in_month(year, month)?;
    let name = month_name(month)?;
    Some(CalendarMonth {
        year,
        month,
        name: name.to_string(),
        days,
        week_days: WEEK_DAYS.iter().map(|day| day.to_string()).collect(),
    })
}

/// Whether `date` (`YYYY-MM-DD`) is today's UTC calendar day.
#[flutter_rust_bridge::frb(sync)]
pub fn date_is_today(date: String) -> bool {
    is_today(&date)
}

/// Loads the dark-mode flag; `false` when unset or unreadable.
#[flutter_rust_bridge::frb(sync)]
pub fn theme_load() -> bool {
    with_store(|store| StorageAdapter::new(store).get_json::<bool>(keys::THEME))
        .ok()
        .flatten()
        .unwrap_or(false)
}

/// Saves the dark-mode flag. Returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn theme_save(dark_mode: bool) -> String {
    match with_store(|store| StorageAdapter::new(store).set_json(keys::THEME, &dark_mode)) {
        Ok(Ok(())) => String::new(),
        Ok(Err(err)) => format!("theme_save failed: {err}"),
        Err(err) => format!("theme_save failed: {err}"),
    }
}

/// Removes every core-owned key (users, session, habits, completions).
///
/// Returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn storage_clear() -> String {
    match with_store(|store| StorageAdapter::new(store).clear(keys::CORE_KEYS)) {
        Ok(Ok(())) => String::new(),
        Ok(Err(err)) => format!("storage_clear failed: {err}"),
        Err(err) => format!("storage_clear failed: {err}"),
    }
}

fn load_habits(
    service: &HabitService<&SqliteKeyValueStore<'_>>,
    user_id: Option<String>,
) -> Vec<Habit> {
    match user_id {
        Some(user_id) => service.get_user_habits(&user_id),
        None => service.get_all_habits(),
    }
}

fn toggle_response(
    operation: &str,
    habit_id: String,
    result: Result<habit_core::StoreResult<Option<bool>>, String>,
) -> HabitActionResponse {
    match result {
        Ok(Ok(Some(completed))) => {
            let message = if completed {
                "Habit completed."
            } else {
                "Habit completion cleared."
            };
            HabitActionResponse::success(message, habit_id, Some(completed))
        }
        Ok(Ok(None)) => HabitActionResponse::failure(format!("habit not found: {habit_id}")),
        Ok(Err(err)) => HabitActionResponse::failure(format!("{operation} failed: {err}")),
        Err(err) => HabitActionResponse::failure(format!("{operation} failed: {err}")),
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn with_store<T>(f: impl FnOnce(&SqliteKeyValueStore<'_>) -> T) -> Result<T, String> {
    let _guard = STORE_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let conn = open_db(resolve_db_path()).map_err(|err| format!("store open failed: {err}"))?;
    let store = SqliteKeyValueStore::new(&conn);
    Ok(f(&store))
}
