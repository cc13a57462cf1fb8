//! Input validation predicates for auth and habit forms.
//!
//! # Invariants
//! - Predicates never fail; rejection is a `Validation` value.
//! - `message` is set only when `is_valid` is false.
//! - Lengths count Unicode scalar values.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

pub const MIN_PASSWORD_CHARS: usize = 6;
pub const MIN_NAME_CHARS: usize = 2;
pub const MAX_HABIT_NAME_CHARS: usize = 50;

/// Outcome of one validation predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub is_valid: bool,
    pub message: Option<String>,
}

impl Validation {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
        }
    }

    /// Converts into `Err(message)` on failure, for `?`-style chaining.
    pub fn into_result(self) -> Result<(), String> {
        match self.message {
            Some(message) if !self.is_valid => Err(message),
            _ => Ok(()),
        }
    }
}

pub fn validate_email(email: &str) -> Validation {
    if EMAIL_RE.is_match(email) {
        Validation::valid()
    } else {
        Validation::invalid("Please enter a valid email address")
    }
}

pub fn validate_password(password: &str) -> Validation {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Validation::invalid(format!(
            "Password must be at least {MIN_PASSWORD_CHARS} characters long"
        ));
    }
    Validation::valid()
}

pub fn validate_name(name: &str) -> Validation {
    if name.trim().chars().count() < MIN_NAME_CHARS {
        return Validation::invalid(format!(
            "Name must be at least {MIN_NAME_CHARS} characters long"
        ));
    }
    Validation::valid()
}

pub fn validate_habit_name(name: &str) -> Validation {
    let length = name.trim().chars().count();
    if length == 0 {
        return Validation::invalid("Habit name is required");
    }
    // Message wording is user-facing copy; 50 itself is accepted.
    if length > MAX_HABIT_NAME_CHARS {
        return Validation::invalid(format!(
            "Habit name must be less than {MAX_HABIT_NAME_CHARS} characters"
        ));
    }
    Validation::valid()
}
