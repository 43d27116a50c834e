//! # MindMate Core Library
//!
//! Business logic for the MindMate wellness companion. All operations are
//! available through the `mindmate` CLI, which is a thin layer over this
//! library.
//!
//! ## Architecture
//!
//! - **Streaks**: per-habit ledgers of marked dates, with current/longest
//!   streak and an aggregate momentum score computed on demand
//! - **Storage**: SQLite-backed habit marks and journals, TOML configuration,
//!   CSV export
//! - **Companion**: canned replies picked from static banks
//! - **Mood / Journal**: polarity-to-mood mapping, journal entries and the
//!   growth report
//!
//! ## Key Components
//!
//! - [`StreakTracker`]: habit ledgers and streak arithmetic
//! - [`SharedStreakTracker`]: thread-safe tracker writing through a [`HabitStore`]
//! - [`Database`]: persistence for marks and journals
//! - [`Config`]: application configuration management

pub mod companion;
pub mod error;
pub mod journal;
pub mod mood;
pub mod storage;
pub mod streak;

pub use companion::{ChatTopic, Companion, MicroPlan, Reframe};
pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use journal::{growth_report, GrowthReport, JournalEntry, Trend, VisualEntry};
pub use mood::{Mood, MoodReading, NeutralScorer, PolarityScorer};
pub use storage::{Config, Database, HabitStore};
pub use streak::{
    HabitLedger, HabitMark, HabitStreak, InvalidHabitError, MarkResult, MomentumSnapshot,
    SharedStreakTracker, StreakTracker,
};
