use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Current and longest streak of one habit at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitStreak {
    pub habit: String,
    pub current: u32,
    pub longest: u32,
}

impl HabitStreak {
    /// Per-habit momentum contribution.
    ///
    /// An old long run cannot inflate today's score, and a fresh run cannot
    /// exceed the historical ceiling.
    pub fn contribution(&self) -> u32 {
        self.current.min(self.longest)
    }
}

/// Read-only aggregate over every tracked habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MomentumSnapshot {
    pub today: NaiveDate,
    /// Habits in order of first mark.
    pub habits: Vec<HabitStreak>,
    /// 0-100, truncated.
    pub momentum: u8,
}

impl MomentumSnapshot {
    pub(crate) fn from_streaks(today: NaiveDate, habits: Vec<HabitStreak>) -> Self {
        let contributions: Vec<u32> = habits.iter().map(HabitStreak::contribution).collect();
        Self {
            today,
            momentum: momentum_score(&contributions),
            habits,
        }
    }

    /// Habits whose current streak is non-zero.
    pub fn active(&self) -> impl Iterator<Item = &HabitStreak> {
        self.habits.iter().filter(|h| h.current > 0)
    }
}

/// Mean contribution divided by the largest single contribution, as a
/// truncated percentage.
///
/// The divisor is treated as 1 when every contribution is zero. Computed in
/// integers so the truncation is exact.
pub fn momentum_score(contributions: &[u32]) -> u8 {
    if contributions.is_empty() {
        return 0;
    }
    let max = u64::from(contributions.iter().copied().max().unwrap_or(0).max(1));
    let sum: u64 = contributions.iter().map(|&c| u64::from(c)).sum();
    let len = contributions.len() as u64;
    let pct = (sum * 100) / (len * max);
    pct.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_habits_scores_zero() {
        assert_eq!(momentum_score(&[]), 0);
    }

    #[test]
    fn all_zero_contributions_score_zero() {
        assert_eq!(momentum_score(&[0, 0, 0]), 0);
    }

    #[test]
    fn two_habit_example() {
        let a = HabitStreak {
            habit: "a".into(),
            current: 10,
            longest: 10,
        };
        let b = HabitStreak {
            habit: "b".into(),
            current: 2,
            longest: 10,
        };
        assert_eq!(a.contribution(), 10);
        assert_eq!(b.contribution(), 2);
        assert_eq!(momentum_score(&[10, 2]), 60);
    }

    #[test]
    fn score_truncates_instead_of_rounding() {
        // mean 2/3, max 1 -> 66.67%
        assert_eq!(momentum_score(&[1, 1, 0]), 66);
    }

    #[test]
    fn exact_percentages_are_not_lost_to_float_error() {
        // 29 / (4 * 25) is exactly 29%; 0.29 * 100.0 in f64 is 28.999...
        assert_eq!(momentum_score(&[25, 4, 0, 0]), 29);
    }

    #[test]
    fn uniform_contributions_score_full() {
        assert_eq!(momentum_score(&[4, 4, 4]), 100);
        assert_eq!(momentum_score(&[1]), 100);
    }
}
