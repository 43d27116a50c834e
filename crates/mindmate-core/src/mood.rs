//! Mood classification from a polarity score.
//!
//! Scoring text is delegated to a [`PolarityScorer`]; this module only maps
//! the score onto a [`Mood`] using the configured thresholds.

use serde::{Deserialize, Serialize};

use crate::storage::MoodConfig;

/// Source of sentiment polarity in `-1.0..=1.0`.
pub trait PolarityScorer {
    fn score(&self, text: &str) -> f64;
}

/// Scores every text as neutral. Used when no sentiment backend is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralScorer;

impl PolarityScorer for NeutralScorer {
    fn score(&self, _text: &str) -> f64 {
        0.0
    }
}

impl<F> PolarityScorer for F
where
    F: Fn(&str) -> f64,
{
    fn score(&self, text: &str) -> f64 {
        self(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Positive,
    Negative,
    Neutral,
}

impl Mood {
    pub fn classify(polarity: f64, config: &MoodConfig) -> Self {
        if polarity > config.positive_threshold {
            Mood::Positive
        } else if polarity < config.negative_threshold {
            Mood::Negative
        } else {
            Mood::Neutral
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Positive => "positive",
            Mood::Negative => "sad",
            Mood::Neutral => "neutral",
        }
    }

    /// Label stored with journal entries.
    pub fn journal_label(self) -> &'static str {
        match self {
            Mood::Positive => "happy",
            Mood::Negative => "sad",
            Mood::Neutral => "neutral",
        }
    }

    pub fn from_journal_label(label: &str) -> Option<Self> {
        match label {
            "happy" => Some(Mood::Positive),
            "sad" => Some(Mood::Negative),
            "neutral" => Some(Mood::Neutral),
            _ => None,
        }
    }

    /// Background color hint for presenting this mood.
    pub fn color(self) -> &'static str {
        match self {
            Mood::Positive => "#e8fff6",
            Mood::Negative => "#eef6ff",
            Mood::Neutral => "#f6efff",
        }
    }
}

/// Score at most `max_chars` characters of `text`.
///
/// Blank text scores 0.0 without consulting the scorer. Scores outside
/// `-1.0..=1.0` are clamped and NaN is treated as neutral.
pub fn score_text(scorer: &dyn PolarityScorer, text: &str, max_chars: usize) -> f64 {
    let head: String = text.chars().take(max_chars).collect();
    if head.trim().is_empty() {
        return 0.0;
    }
    let polarity = scorer.score(&head);
    if polarity.is_nan() {
        0.0
    } else {
        polarity.clamp(-1.0, 1.0)
    }
}

/// Result of analysing a piece of free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodReading {
    pub mood: Mood,
    pub polarity: f64,
    pub color: String,
    pub reply: String,
}
