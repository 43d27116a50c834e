use chrono::NaiveDate;
use indexmap::IndexMap;

use super::{validate_habit, HabitLedger, HabitMark, HabitStreak, InvalidHabitError, MarkResult, MomentumSnapshot};

/// Mapping from habit name to its ledger.
///
/// Single-writer and synchronous. Wrap it in [`super::SharedStreakTracker`]
/// when several callers mark habits concurrently or marks must be persisted.
#[derive(Debug, Clone, Default)]
pub struct StreakTracker {
    ledgers: IndexMap<String, HabitLedger>,
}

impl StreakTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild ledgers from previously stored marks.
    ///
    /// Blank habit names and duplicate pairs are skipped.
    pub fn from_marks<I>(marks: I) -> Self
    where
        I: IntoIterator<Item = HabitMark>,
    {
        let mut tracker = Self::new();
        for mark in marks {
            if let Err(err) = tracker.mark(&mark.habit, mark.date) {
                tracing::warn!(%err, date = %mark.date, "skipping stored mark");
            }
        }
        tracing::debug!(habits = tracker.ledgers.len(), "rebuilt streak ledgers");
        tracker
    }

    /// Mark `habit` done on `today`.
    ///
    /// # Errors
    /// Returns [`InvalidHabitError`] when `habit` is empty or whitespace-only.
    pub fn mark(&mut self, habit: &str, today: NaiveDate) -> Result<MarkResult, InvalidHabitError> {
        validate_habit(habit)?;
        let created = self
            .ledgers
            .entry(habit.to_string())
            .or_default()
            .insert(today);
        Ok(if created {
            MarkResult::Created
        } else {
            MarkResult::AlreadyMarked
        })
    }

    pub fn is_marked(&self, habit: &str, date: NaiveDate) -> bool {
        self.ledgers
            .get(habit)
            .is_some_and(|ledger| ledger.contains(date))
    }

    /// Unknown habits have a current streak of zero.
    pub fn current_streak(&self, habit: &str, today: NaiveDate) -> u32 {
        self.ledgers
            .get(habit)
            .map_or(0, |ledger| ledger.current_streak(today))
    }

    /// Unknown habits have a longest streak of zero.
    pub fn longest_streak(&self, habit: &str) -> u32 {
        self.ledgers
            .get(habit)
            .map_or(0, HabitLedger::longest_streak)
    }

    pub fn ledger(&self, habit: &str) -> Option<&HabitLedger> {
        self.ledgers.get(habit)
    }

    /// Habit names in order of first mark.
    pub fn habits(&self) -> impl Iterator<Item = &str> {
        self.ledgers.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.ledgers.is_empty()
    }

    /// Every mark, grouped by habit in order of first mark.
    pub fn marks(&self) -> Vec<HabitMark> {
        self.ledgers
            .iter()
            .flat_map(|(habit, ledger)| ledger.dates().map(move |date| HabitMark::new(habit.clone(), date)))
            .collect()
    }

    pub fn snapshot(&self, today: NaiveDate) -> MomentumSnapshot {
        let habits = self
            .ledgers
            .iter()
            .filter(|(_, ledger)| !ledger.is_empty())
            .map(|(habit, ledger)| HabitStreak {
                habit: habit.clone(),
                current: ledger.current_streak(today),
                longest: ledger.longest_streak(),
            })
            .collect();
        MomentumSnapshot::from_streaks(today, habits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, day).unwrap()
    }

    #[test]
    fn mark_twice_reports_already_marked() {
        let mut tracker = StreakTracker::new();
        assert_eq!(tracker.mark("walk", d(1, 1)).unwrap(), MarkResult::Created);
        let current = tracker.current_streak("walk", d(1, 1));
        let longest = tracker.longest_streak("walk");

        assert_eq!(tracker.mark("walk", d(1, 1)).unwrap(), MarkResult::AlreadyMarked);
        assert_eq!(tracker.current_streak("walk", d(1, 1)), current);
        assert_eq!(tracker.longest_streak("walk"), longest);
        assert_eq!(tracker.ledger("walk").unwrap().len(), 1);
    }

    #[test]
    fn blank_habit_is_rejected_without_creating_a_ledger() {
        let mut tracker = StreakTracker::new();
        assert!(tracker.mark("", d(1, 1)).is_err());
        assert!(tracker.mark("  ", d(1, 1)).is_err());
        assert!(tracker.is_empty());
    }

    #[test]
    fn unknown_habit_reads_as_zero() {
        let tracker = StreakTracker::new();
        assert_eq!(tracker.current_streak("nope", d(1, 1)), 0);
        assert_eq!(tracker.longest_streak("nope"), 0);
        assert!(!tracker.is_marked("nope", d(1, 1)));
    }

    #[test]
    fn habit_names_are_case_and_whitespace_sensitive() {
        let mut tracker = StreakTracker::new();
        tracker.mark("Walk", d(1, 1)).unwrap();
        assert_eq!(tracker.mark("walk", d(1, 1)).unwrap(), MarkResult::Created);
        assert_eq!(tracker.mark(" walk", d(1, 1)).unwrap(), MarkResult::Created);
        assert_eq!(tracker.habits().count(), 3);
    }

    #[test]
    fn empty_tracker_snapshot() {
        let snap = StreakTracker::new().snapshot(d(1, 1));
        assert!(snap.habits.is_empty());
        assert_eq!(snap.momentum, 0);
    }

    #[test]
    fn snapshot_two_habits_scores_sixty() {
        let mut tracker = StreakTracker::new();
        let today = d(1, 20);
        // "a": ten days ending today
        for day in 11..=20 {
            tracker.mark("a", d(1, day)).unwrap();
        }
        // "b": ten days early in the month, then two ending today
        for day in 1..=10 {
            tracker.mark("b", d(1, day)).unwrap();
        }
        tracker.mark("b", d(1, 19)).unwrap();
        tracker.mark("b", d(1, 20)).unwrap();

        let snap = tracker.snapshot(today);
        assert_eq!(snap.habits[0], HabitStreak { habit: "a".into(), current: 10, longest: 10 });
        assert_eq!(snap.habits[1], HabitStreak { habit: "b".into(), current: 2, longest: 10 });
        assert_eq!(snap.momentum, 60);
    }

    #[test]
    fn snapshot_preserves_first_mark_order() {
        let mut tracker = StreakTracker::new();
        tracker.mark("read", d(1, 2)).unwrap();
        tracker.mark("walk", d(1, 1)).unwrap();
        tracker.mark("read", d(1, 3)).unwrap();
        let names: Vec<_> = tracker.snapshot(d(1, 3)).habits.into_iter().map(|h| h.habit).collect();
        assert_eq!(names, vec!["read", "walk"]);
    }

    #[test]
    fn from_marks_skips_duplicates_and_blanks() {
        let tracker = StreakTracker::from_marks(vec![
            HabitMark::new("walk", d(1, 1)),
            HabitMark::new("walk", d(1, 1)),
            HabitMark::new(" ", d(1, 1)),
            HabitMark::new("walk", d(1, 2)),
        ]);
        assert_eq!(tracker.habits().collect::<Vec<_>>(), vec!["walk"]);
        assert_eq!(tracker.marks().len(), 2);
        assert_eq!(tracker.current_streak("walk", d(1, 2)), 2);
    }

    fn date_offsets() -> impl Strategy<Value = Vec<u16>> {
        prop::collection::vec(0u16..120, 0..60)
    }

    proptest! {
        #[test]
        fn longest_is_never_below_current(offsets in date_offsets(), today_offset in 0u16..130) {
            let base = d(1, 1);
            let mut tracker = StreakTracker::new();
            for off in &offsets {
                tracker.mark("h", base + chrono::Days::new(u64::from(*off))).unwrap();
            }
            let today = base + chrono::Days::new(u64::from(today_offset));
            prop_assert!(tracker.longest_streak("h") >= tracker.current_streak("h", today));
        }

        #[test]
        fn momentum_stays_in_range(
            a in date_offsets(),
            b in date_offsets(),
            today_offset in 0u16..130,
        ) {
            let base = d(1, 1);
            let mut tracker = StreakTracker::new();
            for off in &a {
                tracker.mark("a", base + chrono::Days::new(u64::from(*off))).unwrap();
            }
            for off in &b {
                tracker.mark("b", base + chrono::Days::new(u64::from(*off))).unwrap();
            }
            let snap = tracker.snapshot(base + chrono::Days::new(u64::from(today_offset)));
            prop_assert!(snap.momentum <= 100);
        }

        #[test]
        fn remarking_never_changes_streaks(offsets in date_offsets(), pick in 0usize..60) {
            let base = d(1, 1);
            let mut tracker = StreakTracker::new();
            for off in &offsets {
                tracker.mark("h", base + chrono::Days::new(u64::from(*off))).unwrap();
            }
            prop_assume!(!offsets.is_empty());
            let date = base + chrono::Days::new(u64::from(offsets[pick % offsets.len()]));
            let before = (tracker.current_streak("h", date), tracker.longest_streak("h"));
            prop_assert_eq!(tracker.mark("h", date).unwrap(), MarkResult::AlreadyMarked);
            prop_assert_eq!((tracker.current_streak("h", date), tracker.longest_streak("h")), before);
        }
    }
}
