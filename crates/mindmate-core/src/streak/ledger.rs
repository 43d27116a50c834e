use chrono::NaiveDate;
use indexmap::IndexSet;

/// All marked dates of one habit.
///
/// Dates are distinct and kept in insertion order. Streak lengths are
/// recomputed from the set on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HabitLedger {
    dates: IndexSet<NaiveDate>,
}

impl HabitLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `date`. Returns `false` when it was already present.
    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Marked dates in insertion order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    /// Consecutive marked days ending at `today`, inclusive.
    ///
    /// Zero when `today` is unmarked, even if yesterday starts a long run.
    pub fn current_streak(&self, today: NaiveDate) -> u32 {
        let mut count = 0;
        let mut day = today;
        while self.dates.contains(&day) {
            count += 1;
            match day.pred_opt() {
                Some(prev) => day = prev,
                None => break,
            }
        }
        count
    }

    /// Longest run of calendar-consecutive marked days.
    pub fn longest_streak(&self) -> u32 {
        let mut sorted: Vec<NaiveDate> = self.dates.iter().copied().collect();
        sorted.sort_unstable();

        let mut longest = 0;
        let mut run = 0;
        let mut prev: Option<NaiveDate> = None;
        for date in sorted {
            run = match prev.and_then(|p| p.succ_opt()) {
                Some(next) if next == date => run + 1,
                _ => 1,
            };
            longest = longest.max(run);
            prev = Some(date);
        }
        longest
    }
}

impl FromIterator<NaiveDate> for HabitLedger {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}
