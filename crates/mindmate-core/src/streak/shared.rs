use std::sync::{Mutex, PoisonError, RwLock, RwLockReadGuard};

use chrono::NaiveDate;

use super::{validate_habit, HabitMark, MarkResult, MomentumSnapshot, StreakTracker};
use crate::error::{CoreError, Result};
use crate::storage::HabitStore;

/// A [`StreakTracker`] that is safe to share between threads and writes
/// every new mark through to a [`HabitStore`].
///
/// Marks hold the tracker's write lock across the duplicate check, the
/// store append and the in-memory insert, so a pair is stored at most once
/// and a failed append leaves the in-memory ledger untouched. Lock order is
/// always tracker, then store.
pub struct SharedStreakTracker<S> {
    tracker: RwLock<StreakTracker>,
    store: Mutex<S>,
}

impl<S: HabitStore> SharedStreakTracker<S> {
    /// Rebuild the tracker from every mark the store holds.
    ///
    /// # Errors
    /// Returns the store's error if marks cannot be loaded.
    pub fn load(store: S) -> Result<Self> {
        let marks = store.load_marks()?;
        tracing::debug!(marks = marks.len(), "loading habit marks");
        Ok(Self {
            tracker: RwLock::new(StreakTracker::from_marks(marks)),
            store: Mutex::new(store),
        })
    }

    /// Mark `habit` done on `today` and persist the new mark.
    ///
    /// # Errors
    /// - [`CoreError::InvalidHabit`] for a blank name
    /// - the store's error if the append fails; the mark is then not
    ///   recorded in memory either
    pub fn mark(&self, habit: &str, today: NaiveDate) -> Result<MarkResult> {
        validate_habit(habit)?;

        let mut tracker = self
            .tracker
            .write()
            .map_err(|e| CoreError::LockPoisoned(e.to_string()))?;
        if tracker.is_marked(habit, today) {
            tracing::debug!(habit, %today, "habit already marked");
            return Ok(MarkResult::AlreadyMarked);
        }

        let mark = HabitMark::new(habit, today);
        {
            let store = self
                .store
                .lock()
                .map_err(|e| CoreError::LockPoisoned(e.to_string()))?;
            if let Err(err) = store.append_mark(&mark) {
                tracing::warn!(habit, %today, %err, "failed to persist habit mark");
                return Err(err);
            }
        }

        let result = tracker.mark(habit, today)?;
        tracing::info!(habit, %today, "habit marked");
        Ok(result)
    }

    pub fn current_streak(&self, habit: &str, today: NaiveDate) -> u32 {
        self.read().current_streak(habit, today)
    }

    pub fn longest_streak(&self, habit: &str) -> u32 {
        self.read().longest_streak(habit)
    }

    pub fn snapshot(&self, today: NaiveDate) -> MomentumSnapshot {
        self.read().snapshot(today)
    }

    pub fn habits(&self) -> Vec<String> {
        self.read().habits().map(str::to_string).collect()
    }

    pub fn marks(&self) -> Vec<HabitMark> {
        self.read().marks()
    }

    /// Consume the tracker, handing back the store.
    pub fn into_store(self) -> S {
        self.store.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    // Writers only ever append after every fallible step, so a poisoned
    // tracker is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, StreakTracker> {
        self.tracker.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[derive(Default)]
    struct MemoryStore {
        marks: Mutex<Vec<HabitMark>>,
        fail_appends: bool,
    }

    impl HabitStore for MemoryStore {
        fn load_marks(&self) -> Result<Vec<HabitMark>> {
            Ok(self.marks.lock().unwrap().clone())
        }

        fn append_mark(&self, mark: &HabitMark) -> Result<()> {
            if self.fail_appends {
                return Err(CoreError::Custom("disk full".into()));
            }
            self.marks.lock().unwrap().push(mark.clone());
            Ok(())
        }
    }

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, day).unwrap()
    }

    #[test]
    fn only_created_marks_reach_the_store() {
        let shared = SharedStreakTracker::load(MemoryStore::default()).unwrap();
        assert_eq!(shared.mark("walk", d(1, 1)).unwrap(), MarkResult::Created);
        assert_eq!(shared.mark("walk", d(1, 1)).unwrap(), MarkResult::AlreadyMarked);
        assert_eq!(shared.mark("walk", d(1, 2)).unwrap(), MarkResult::Created);

        let store = shared.into_store();
        assert_eq!(store.marks.lock().unwrap().len(), 2);
    }

    #[test]
    fn load_rebuilds_from_store() {
        let store = MemoryStore::default();
        store.append_mark(&HabitMark::new("read", d(1, 1))).unwrap();
        store.append_mark(&HabitMark::new("read", d(1, 2))).unwrap();

        let shared = SharedStreakTracker::load(store).unwrap();
        assert_eq!(shared.current_streak("read", d(1, 2)), 2);
        assert_eq!(shared.longest_streak("read"), 2);
        assert_eq!(shared.habits(), vec!["read".to_string()]);
        assert_eq!(shared.mark("read", d(1, 2)).unwrap(), MarkResult::AlreadyMarked);
    }

    #[test]
    fn failed_persist_leaves_memory_untouched() {
        let store = MemoryStore {
            fail_appends: true,
            ..Default::default()
        };
        let shared = SharedStreakTracker::load(store).unwrap();
        assert!(shared.mark("walk", d(1, 1)).is_err());
        assert_eq!(shared.current_streak("walk", d(1, 1)), 0);
        assert!(shared.snapshot(d(1, 1)).habits.is_empty());
    }

    #[test]
    fn blank_habit_never_touches_the_store() {
        let shared = SharedStreakTracker::load(MemoryStore::default()).unwrap();
        let err = shared.mark("   ", d(1, 1)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidHabit(_)));
        assert!(shared.into_store().marks.lock().unwrap().is_empty());
    }

    #[test]
    fn concurrent_marks_store_each_pair_once() {
        let shared = Arc::new(SharedStreakTracker::load(MemoryStore::default()).unwrap());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    (1..=5)
                        .map(|day| shared.mark("walk", d(1, day)).unwrap())
                        .filter(|r| r.is_created())
                        .count()
                })
            })
            .collect();
        let created: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

        assert_eq!(created, 5);
        assert_eq!(shared.current_streak("walk", d(1, 5)), 5);
        let shared = Arc::into_inner(shared).unwrap();
        assert_eq!(shared.into_store().marks.lock().unwrap().len(), 5);
    }
}
