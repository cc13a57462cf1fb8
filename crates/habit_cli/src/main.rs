//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `habit_core` linkage.
//! - Print a deterministic in-memory progress snapshot for quick sanity checks.

use habit_core::{
    get_greeting, get_today_string, HabitFrequency, HabitService, MemoryKeyValueStore,
    ProgressSummary,
};

fn main() {
    println!("habit_core ping={}", habit_core::ping());
    println!("habit_core version={}", habit_core::core_version());

    let store = MemoryKeyValueStore::new();
    let habits = HabitService::new(&store);
    let outcome = habits
        .create_habit("Smoke check", HabitFrequency::Daily, "cli")
        .and_then(|habit| habits.mark_habit_complete(&habit.id));
    if let Err(err) = outcome {
        eprintln!("habit_core smoke failed: {err}");
        std::process::exit(1);
    }

    let summary = ProgressSummary::current(&habits.get_user_habits("cli"));
    println!("{} today={}", get_greeting(), get_today_string());
    println!(
        "progress today={} weekly={:?} streak={}",
        summary.today_progress, summary.weekly, summary.overall_streak
    );
}
