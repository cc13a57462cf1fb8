//! Habit CRUD and completion toggling.
//!
//! # Responsibility
//! - Maintain every user's habits in the single `@all_habits` collection.
//! - Flip per-day completion state.
//!
//! # Invariants
//! - Reads never fail: an unreadable collection is an empty one.
//! - Writes always replace the whole collection.
//! - No validation happens here; callers validate names first.
//!
//! # Known limitation
//! Mutations are unguarded read-modify-write cycles over the whole
//! collection. Two interleaved calls can lose an update (last write wins).

use crate::dates::get_today_string;
use crate::model::habit::{Habit, HabitCompletion, HabitFrequency};
use crate::storage::{keys, KeyValueStore, StorageAdapter, StoreResult};
use log::{debug, info};

/// Habit use cases over a key-value store.
pub struct HabitService<S: KeyValueStore> {
    storage: StorageAdapter<S>,
}

impl<S: KeyValueStore> HabitService<S> {
    pub fn new(store: S) -> Self {
        Self {
            storage: StorageAdapter::new(store),
        }
    }

    /// Creates a habit with no completions and appends it to the collection.
    pub fn create_habit(
        &self,
        name: &str,
        frequency: HabitFrequency,
        user_id: &str,
    ) -> StoreResult<Habit> {
        let habit = Habit::new(name, frequency, user_id);
        let mut habits = self.get_all_habits();
        habits.push(habit.clone());
        self.save_habits(&habits)?;

        info!(
            "event=habit_create module=habit status=ok habit_id={} frequency={}",
            habit.id, habit.frequency
        );
        Ok(habit)
    }

    /// Every stored habit of every user, in stored order.
    pub fn get_all_habits(&self) -> Vec<Habit> {
        self.storage
            .get_json::<Vec<Habit>>(keys::ALL_HABITS)
            .unwrap_or_default()
    }

    pub fn get_user_habits(&self, user_id: &str) -> Vec<Habit> {
        self.get_all_habits()
            .into_iter()
            .filter(|habit| habit.user_id == user_id)
            .collect()
    }

    /// Flips completion of `date` for one habit.
    ///
    /// Returns `Ok(None)` without writing when no habit has `habit_id`,
    /// otherwise `Ok(Some(completed))` with the state after the flip.
    pub fn toggle_habit_completion(
        &self,
        habit_id: &str,
        date: &str,
    ) -> StoreResult<Option<bool>> {
        let mut habits = self.get_all_habits();
        let Some(habit) = habits.iter_mut().find(|habit| habit.id == habit_id) else {
            debug!("event=habit_toggle module=habit status=skipped reason=not_found habit_id={habit_id}");
            return Ok(None);
        };

        let completed = habit.toggle_date(date);
        self.save_habits(&habits)?;

        info!(
            "event=habit_toggle module=habit status=ok habit_id={habit_id} date={date} completed={completed}"
        );
        Ok(Some(completed))
    }

    /// Removes the habit with `habit_id` and rewrites the remainder.
    ///
    /// The collection is rewritten even when nothing matched.
    pub fn delete_habit(&self, habit_id: &str) -> StoreResult<()> {
        let mut habits = self.get_all_habits();
        let before = habits.len();
        habits.retain(|habit| habit.id != habit_id);
        self.save_habits(&habits)?;

        info!(
            "event=habit_delete module=habit status=ok habit_id={habit_id} removed={}",
            before - habits.len()
        );
        Ok(())
    }

    /// Toggles today's completion.
    ///
    /// Despite the name this flips the current state, same as
    /// `unmark_habit_complete`.
    pub fn mark_habit_complete(&self, habit_id: &str) -> StoreResult<Option<bool>> {
        self.toggle_habit_completion(habit_id, &get_today_string())
    }

    /// Toggles today's completion; see `mark_habit_complete`.
    pub fn unmark_habit_complete(&self, habit_id: &str) -> StoreResult<Option<bool>> {
        self.toggle_habit_completion(habit_id, &get_today_string())
    }

    /// Stored completion records. Nothing in the core writes these.
    pub fn get_all_completions(&self) -> Vec<HabitCompletion> {
        self.storage
            .get_json::<Vec<HabitCompletion>>(keys::HABIT_COMPLETIONS)
            .unwrap_or_default()
    }

    fn save_habits(&self, habits: &[Habit]) -> StoreResult<()> {
        self.storage.set_json(keys::ALL_HABITS, habits)
    }
}
