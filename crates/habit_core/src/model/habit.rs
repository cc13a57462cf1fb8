//! Habit and completion records.
//!
//! # Invariants
//! - `completed_dates` entries are `YYYY-MM-DD` strings in insertion order.
//! - `frequency` is descriptive only; completion is always tracked per day.

use crate::model::id::{next_record_id, timestamp_now};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Declared cadence of a habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitFrequency {
    Daily,
    Weekly,
}

impl HabitFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            _ => None,
        }
    }
}

impl Display for HabitFrequency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked recurring activity and its completion history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub frequency: HabitFrequency,
    /// Owning user. Storage holds habits of every user in one collection.
    pub user_id: String,
    pub created_at: String,
    pub completed_dates: Vec<String>,
}

impl Habit {
    /// Creates a habit with a fresh id and no completions.
    pub fn new(
        name: impl Into<String>,
        frequency: HabitFrequency,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            id: next_record_id(),
            name: name.into(),
            frequency,
            user_id: user_id.into(),
            created_at: timestamp_now(),
            completed_dates: Vec::new(),
        }
    }

    pub fn is_completed_on(&self, date: &str) -> bool {
        self.completed_dates.iter().any(|completed| completed == date)
    }

    /// Flips completion for `date`.
    ///
    /// Removes the first occurrence when present, otherwise appends. Returns
    /// whether the habit is completed on `date` afterwards.
    pub fn toggle_date(&mut self, date: &str) -> bool {
        match self
            .completed_dates
            .iter()
            .position(|completed| completed == date)
        {
            Some(index) => {
                self.completed_dates.remove(index);
                false
            }
            None => {
                self.completed_dates.push(date.to_string());
                true
            }
        }
    }
}

/// Per-day completion record.
///
/// Readable through `HabitService::get_all_completions`; no write path
/// produces these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitCompletion {
    pub id: String,
    pub habit_id: String,
    pub date: String,
    pub completed_at: String,
}
