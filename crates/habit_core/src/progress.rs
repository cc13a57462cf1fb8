//! Progress, streak and filtering projections over habit history.
//!
//! # Responsibility
//! - Derive dashboard numbers from in-memory habits without touching storage.
//! - Offer `*_as_of` variants taking an explicit "today" for deterministic
//!   callers; the plain variants read the clock.
//!
//! # Invariants
//! - Percentages are integers in `0..=100`, rounded half up.
//! - An empty habit slice always yields `0` progress.
//! - Streak walks stop at the first missed day and never look back more than
//!   `STREAK_LOOKBACK_DAYS` days.

use crate::dates::{days_before, format_day, today};
use crate::model::habit::{Habit, HabitFrequency};
use chrono::NaiveDate;

/// Longest streak that can be detected.
pub const STREAK_LOOKBACK_DAYS: u32 = 30;
/// Days covered by weekly progress, today included.
pub const WEEK_LENGTH: usize = 7;
/// Minimum daily progress that keeps the overall streak alive.
pub const OVERALL_STREAK_MIN_PROGRESS: u8 = 50;

/// Habit list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HabitFilter {
    #[default]
    All,
    /// Habits due every day.
    Today,
    /// Habits already completed today.
    Completed,
}

impl HabitFilter {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Some(Self::All),
            "today" => Some(Self::Today),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Badge level derived from a single habit streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StreakTier {
    None,
    Spark,
    Charged,
    OnFire,
    Legendary,
}

impl StreakTier {
    pub fn from_streak(streak: u32) -> Self {
        match streak {
            30.. => Self::Legendary,
            14.. => Self::OnFire,
            7.. => Self::Charged,
            3.. => Self::Spark,
            _ => Self::None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Spark => "spark",
            Self::Charged => "charged",
            Self::OnFire => "on_fire",
            Self::Legendary => "legendary",
        }
    }
}

/// Encouragement line for a day's progress percentage.
pub fn progress_message(progress: u8) -> &'static str {
    match progress {
        100.. => "Perfect day! You're on fire!",
        80.. => "Amazing progress! Keep it up!",
        60.. => "Great job! You're doing well!",
        40.. => "Good start! Keep going!",
        1.. => "Every step counts!",
        0 => "Ready to start your day?",
    }
}

/// Number of habits completed on `date`.
pub fn completed_count(habits: &[Habit], date: &str) -> usize {
    habits
        .iter()
        .filter(|habit| habit.is_completed_on(date))
        .count()
}

/// Share of `habits` completed on `date`, as a rounded percentage.
pub fn calculate_progress(habits: &[Habit], date: &str) -> u8 {
    percent(completed_count(habits, date), habits.len())
}

/// Progress for the seven days ending today, oldest first.
pub fn get_weekly_progress(habits: &[Habit]) -> [u8; WEEK_LENGTH] {
    weekly_progress_as_of(habits, today())
}

pub fn weekly_progress_as_of(habits: &[Habit], today: NaiveDate) -> [u8; WEEK_LENGTH] {
    std::array::from_fn(|index| {
        let offset = (WEEK_LENGTH - 1 - index) as u64;
        days_before(today, offset)
            .map_or(0, |day| calculate_progress(habits, &format_day(day)))
    })
}

/// Consecutive completed days of `habit`, walking back from today.
pub fn get_streak_count(habit: &Habit) -> u32 {
    streak_count_as_of(habit, today())
}

pub fn streak_count_as_of(habit: &Habit, today: NaiveDate) -> u32 {
    count_back_from(today, |day| habit.is_completed_on(day))
}

/// Consecutive days on which at least half of all habits were completed.
pub fn overall_streak_as_of(habits: &[Habit], today: NaiveDate) -> u32 {
    count_back_from(today, |day| {
        calculate_progress(habits, day) >= OVERALL_STREAK_MIN_PROGRESS
    })
}

/// Applies a list filter relative to `today`.
pub fn filter_habits<'a>(
    habits: &'a [Habit],
    filter: HabitFilter,
    today: &str,
) -> Vec<&'a Habit> {
    habits
        .iter()
        .filter(|habit| match filter {
            HabitFilter::All => true,
            HabitFilter::Today => habit.frequency == HabitFrequency::Daily,
            HabitFilter::Completed => habit.is_completed_on(today),
        })
        .collect()
}

/// Dashboard snapshot for one set of habits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSummary {
    pub today_progress: u8,
    /// Oldest first; last entry equals `today_progress`.
    pub weekly: [u8; WEEK_LENGTH],
    /// Rounded mean of `weekly`.
    pub weekly_average: u8,
    pub completed_today: usize,
    pub total_habits: usize,
    pub overall_streak: u32,
    /// `progress_message` of `today_progress`.
    pub message: &'static str,
}

impl ProgressSummary {
    pub fn current(habits: &[Habit]) -> Self {
        Self::as_of(habits, today())
    }

    pub fn as_of(habits: &[Habit], today: NaiveDate) -> Self {
        let today_string = format_day(today);
        let weekly = weekly_progress_as_of(habits, today);
        let weekly_sum = weekly.iter().map(|value| usize::from(*value)).sum::<usize>();

        let today_progress = calculate_progress(habits, &today_string);

        Self {
            today_progress,
            weekly,
            weekly_average: percent_of_sum(weekly_sum, WEEK_LENGTH),
            completed_today: completed_count(habits, &today_string),
            total_habits: habits.len(),
            overall_streak: overall_streak_as_of(habits, today),
            message: progress_message(today_progress),
        }
    }
}

fn count_back_from(today: NaiveDate, mut hit: impl FnMut(&str) -> bool) -> u32 {
    let mut streak = 0;
    for offset in 0..STREAK_LOOKBACK_DAYS {
        let Some(day) = days_before(today, u64::from(offset)) else {
            break;
        };
        if !hit(&format_day(day)) {
            break;
        }
        streak += 1;
    }
    streak
}

fn percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    // Integer round-half-up of part * 100 / whole.
    let rounded = (part * 200 + whole) / (whole * 2);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}

fn percent_of_sum(sum: usize, count: usize) -> u8 {
    if count == 0 {
        return 0;
    }
    let rounded = (sum * 2 + count) / (count * 2);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::{percent, percent_of_sum, progress_message, HabitFilter, StreakTier};

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(1, 40), 3);
        assert_eq!(percent(5, 5), 100);
    }

    #[test]
    fn average_rounds_half_up() {
        assert_eq!(percent_of_sum(0, 7), 0);
        assert_eq!(percent_of_sum(350, 7), 50);
        assert_eq!(percent_of_sum(100, 7), 14);
        assert_eq!(percent_of_sum(700, 7), 100);
    }

    #[test]
    fn streak_tiers() {
        assert_eq!(StreakTier::from_streak(0), StreakTier::None);
        assert_eq!(StreakTier::from_streak(2), StreakTier::None);
        assert_eq!(StreakTier::from_streak(3), StreakTier::Spark);
        assert_eq!(StreakTier::from_streak(7), StreakTier::Charged);
        assert_eq!(StreakTier::from_streak(14), StreakTier::OnFire);
        assert_eq!(StreakTier::from_streak(30), StreakTier::Legendary);
        assert_eq!(StreakTier::from_streak(45).as_str(), "legendary");
        assert_eq!(StreakTier::from_streak(14).as_str(), "on_fire");
    }

    #[test]
    fn progress_message_bands() {
        assert_eq!(progress_message(100), "Perfect day! You're on fire!");
        assert_eq!(progress_message(80), "Amazing progress! Keep it up!");
        assert_eq!(progress_message(79), "Great job! You're doing well!");
        assert_eq!(progress_message(40), "Good start! Keep going!");
        assert_eq!(progress_message(1), "Every step counts!");
        assert_eq!(progress_message(0), "Ready to start your day?");
    }

    #[test]
    fn filter_parse_defaults_to_all() {
        assert_eq!(HabitFilter::parse(""), Some(HabitFilter::All));
        assert_eq!(HabitFilter::parse("Completed"), Some(HabitFilter::Completed));
        assert_eq!(HabitFilter::parse("weekly"), None);
    }
}
