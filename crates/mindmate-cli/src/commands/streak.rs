use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;
use mindmate_core::storage::export;
use mindmate_core::{Companion, Database, MarkResult, MomentumSnapshot, SharedStreakTracker};

use super::{today_or, CommandResult};

#[derive(Subcommand)]
pub enum StreakAction {
    /// Mark a habit done for today
    Mark {
        /// Habit name (case-sensitive)
        habit: String,
        /// Date to mark instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Current and longest streaks plus the momentum score
    Status {
        /// Evaluate streaks as of this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export every mark as CSV
    Export {
        /// Destination file
        path: PathBuf,
    },
}

pub fn run(action: StreakAction) -> CommandResult {
    let tracker = SharedStreakTracker::load(Database::open()?)?;

    match action {
        StreakAction::Mark { habit, date } => {
            let today = today_or(date);
            let result = tracker.mark(&habit, today)?;
            let companion = Companion::new();
            match result {
                MarkResult::Created => println!("Marked '{habit}' for {today}."),
                MarkResult::AlreadyMarked => println!("Already marked {today} for '{habit}'."),
            }
            println!("{}", companion.streak_ack(result));
            println!();
            println!("{}", active_summary(&tracker.snapshot(today)));
        }
        StreakAction::Status { date, json } => {
            let snapshot = tracker.snapshot(today_or(date));
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                println!("{}", momentum_report(&snapshot));
            }
        }
        StreakAction::Export { path } => {
            let marks = tracker.marks();
            export::export_to(&path, |w| export::write_marks(w, &marks))?;
            println!("{}", path.display());
        }
    }
    Ok(())
}

fn plural_days(n: u32) -> &'static str {
    if n == 1 {
        "day"
    } else {
        "days"
    }
}

fn active_summary(snapshot: &MomentumSnapshot) -> String {
    if snapshot.habits.is_empty() {
        return "No streaks. Start tracking a habit!".to_string();
    }
    let lines: Vec<String> = snapshot
        .active()
        .map(|h| format!("• {}: {} {}", h.habit, h.current, plural_days(h.current)))
        .collect();
    if lines.is_empty() {
        return "No active streaks today.".to_string();
    }
    format!("Active Streaks:\n{}", lines.join("\n"))
}

fn momentum_report(snapshot: &MomentumSnapshot) -> String {
    if snapshot.habits.is_empty() {
        return "No streaks yet. Create one with `mindmate streak mark <habit>`.".to_string();
    }
    let lines: Vec<String> = snapshot
        .habits
        .iter()
        .map(|h| {
            format!(
                "• {} — current: {} {}, longest: {} {}",
                h.habit,
                h.current,
                plural_days(h.current),
                h.longest,
                plural_days(h.longest)
            )
        })
        .collect();
    format!(
        "Your Momentum:\n{}\n\nTotal Momentum Score: {}%",
        lines.join("\n"),
        snapshot.momentum
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindmate_core::StreakTracker;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn summaries_for_empty_tracker() {
        let snap = StreakTracker::new().snapshot(d(1));
        assert_eq!(active_summary(&snap), "No streaks. Start tracking a habit!");
        assert!(momentum_report(&snap).starts_with("No streaks yet"));
    }

    #[test]
    fn active_summary_skips_broken_streaks() {
        let mut tracker = StreakTracker::new();
        tracker.mark("walk", d(1)).unwrap();
        tracker.mark("read", d(2)).unwrap();
        let snap = tracker.snapshot(d(2));
        assert_eq!(active_summary(&snap), "Active Streaks:\n• read: 1 day");

        let snap = tracker.snapshot(d(5));
        assert_eq!(active_summary(&snap), "No active streaks today.");
    }

    #[test]
    fn momentum_report_lists_every_habit() {
        let mut tracker = StreakTracker::new();
        tracker.mark("walk", d(1)).unwrap();
        tracker.mark("walk", d(2)).unwrap();
        let report = momentum_report(&tracker.snapshot(d(2)));
        assert_eq!(
            report,
            "Your Momentum:\n• walk — current: 2 days, longest: 2 days\n\nTotal Momentum Score: 100%"
        );
    }
}
