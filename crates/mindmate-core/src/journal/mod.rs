//! Written and visual journals.
//!
//! Entries are plain records; the caller supplies the timestamp and a
//! [`PolarityScorer`] for the mood label. Storage lives in
//! [`crate::storage::Database`].

mod report;
mod visual;

pub use report::{growth_report, GrowthReport, Trend, THEME_COUNT};
pub use visual::VisualEntry;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::companion::truncate_chars;
use crate::mood::{score_text, Mood, PolarityScorer};
use crate::storage::MoodConfig;

/// Format used for timestamps in storage and exports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub created_at: NaiveDateTime,
    pub text: String,
    pub mood: Mood,
    pub polarity: f64,
}

impl JournalEntry {
    /// Score `text` and label it with a mood.
    pub fn compose(
        text: &str,
        created_at: NaiveDateTime,
        scorer: &dyn PolarityScorer,
        config: &MoodConfig,
    ) -> Self {
        let polarity = score_text(scorer, text, config.journal_max_chars);
        Self {
            created_at,
            text: text.to_string(),
            mood: Mood::classify(polarity, config),
            polarity,
        }
    }

    pub fn timestamp(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn preview(&self, max_chars: usize) -> String {
        truncate_chars(&self.text, max_chars)
    }
}
