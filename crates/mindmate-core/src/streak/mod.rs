//! Habit streak tracking.
//!
//! A habit ("task") is marked done at most once per calendar date. From the
//! set of marked dates we derive:
//!
//! - the **current streak**: consecutive marked days ending at `today`,
//!   zero when `today` itself is unmarked
//! - the **longest streak**: the longest run of consecutive marked days
//!   anywhere in the habit's history
//! - a **momentum score** (0-100) summarizing consistency across habits
//!
//! Nothing here reads the system clock. Callers pass `today` explicitly.

mod ledger;
mod shared;
mod snapshot;
mod tracker;

pub use ledger::HabitLedger;
pub use shared::SharedStreakTracker;
pub use snapshot::{momentum_score, HabitStreak, MomentumSnapshot};
pub use tracker::StreakTracker;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A record that `habit` was completed on `date`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HabitMark {
    pub habit: String,
    pub date: NaiveDate,
}

impl HabitMark {
    pub fn new(habit: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            habit: habit.into(),
            date,
        }
    }
}

/// Outcome of marking a habit for a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkResult {
    /// A new mark was added to the ledger
    Created,
    /// The date was already marked; the ledger is unchanged
    AlreadyMarked,
}

impl MarkResult {
    pub fn is_created(self) -> bool {
        matches!(self, MarkResult::Created)
    }
}

/// Returned by `mark` when the habit name is empty or whitespace-only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("habit name must not be blank (got {name:?})")]
pub struct InvalidHabitError {
    pub name: String,
}

impl InvalidHabitError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Reject blank habit names. The name itself is kept verbatim: surrounding
/// whitespace and case are significant.
pub fn validate_habit(habit: &str) -> Result<(), InvalidHabitError> {
    if habit.trim().is_empty() {
        return Err(InvalidHabitError::new(habit));
    }
    Ok(())
}
