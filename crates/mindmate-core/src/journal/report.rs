use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::JournalEntry;
use crate::storage::MoodConfig;

/// Number of recurring words reported as themes.
pub const THEME_COUNT: usize = 6;

const STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "while", "to", "from", "of", "in", "on", "for",
    "with", "at", "by", "is", "it", "this", "that", "these", "those", "am", "are", "was", "were",
    "be", "been", "being", "i", "me", "my", "we", "our", "you", "your", "he", "she", "they",
    "them", "their", "as",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Rising,
    Dipping,
    Steady,
}

impl Trend {
    fn from_average(avg: f64, threshold: f64) -> Self {
        if avg > threshold {
            Trend::Rising
        } else if avg < -threshold {
            Trend::Dipping
        } else {
            Trend::Steady
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Trend::Rising => "rising",
            Trend::Dipping => "dipping",
            Trend::Steady => "steady",
        }
    }

    /// Three small goals suited to the trend.
    pub fn focus_goals(self) -> [&'static str; 3] {
        match self {
            Trend::Dipping => [
                "Text one supportive person",
                "Take a 5 min breathing break",
                "Write one compassionate sentence",
            ],
            Trend::Rising => [
                "Repeat a helpful habit",
                "Do a small act of kindness",
                "Try a mini-challenge",
            ],
            Trend::Steady => ["Plan a 10-min walk", "Quick tidy up", "List 3 tiny wins"],
        }
    }
}

/// Summary of journal history: mood trend, recurring themes, next goals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthReport {
    pub entries: usize,
    pub average_polarity: f64,
    pub trend: Trend,
    /// Most frequent words, most common first.
    pub themes: Vec<String>,
    pub goals: Vec<String>,
}

/// Build a report over `entries`. `None` when there are none.
pub fn growth_report(entries: &[JournalEntry], config: &MoodConfig) -> Option<GrowthReport> {
    if entries.is_empty() {
        return None;
    }
    let average_polarity = entries.iter().map(|e| e.polarity).sum::<f64>() / entries.len() as f64;
    let trend = Trend::from_average(average_polarity, config.trend_threshold);

    Some(GrowthReport {
        entries: entries.len(),
        average_polarity,
        trend,
        themes: themes(entries.iter().map(|e| e.text.as_str())),
        goals: trend.focus_goals().iter().map(|g| g.to_string()).collect(),
    })
}

/// Most frequent non-stopword words longer than two letters.
///
/// Ties keep first-seen order.
fn themes<'a>(texts: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for text in texts {
        let lower = text.to_lowercase();
        for word in lower.split(|c: char| !(c.is_ascii_alphabetic() || c == '\'')) {
            if word.len() > 2 && !STOPWORDS.contains(&word) {
                *counts.entry(word.to_string()).or_insert(0) += 1;
            }
        }
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.into_iter().take(THEME_COUNT).map(|(w, _)| w).collect()
}
