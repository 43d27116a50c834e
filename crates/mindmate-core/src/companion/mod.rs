//! Canned companion replies.
//!
//! Every reply is a random pick from a static bank in [`content`]. Chat input
//! is routed to a bank by a handful of keyword stems; there is no language
//! understanding beyond that.

pub mod content;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::mood::{score_text, Mood, MoodReading, PolarityScorer};
use crate::storage::MoodConfig;
use crate::streak::MarkResult;

/// Reply to blank chat input.
pub const EMPTY_CHAT_PROMPT: &str =
    "Tell me in a sentence how you're feeling or what you're facing — I'm listening.";

/// Longest thought echoed back by [`Companion::reframe`].
pub const REFRAME_ECHO_CHARS: usize = 120;

const ANXIOUS_STEMS: &[&str] = &["anx", "worri", "scared", "fear", "panic"];
const LOW_STEMS: &[&str] = &["sad", "lonely", "down", "hopeless"];
const ANGER_STEMS: &[&str] = &["angry", "frustrat", "annoyed", "irritat"];

/// Which bank a chat message was routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatTopic {
    Anxious,
    Low,
    Anger,
    General,
}

impl ChatTopic {
    /// Route by substring match on the lowercased input, first match wins.
    pub fn detect(input: &str) -> Self {
        let lower = input.to_lowercase();
        let hit = |stems: &[&str]| stems.iter().any(|s| lower.contains(s));
        if hit(ANXIOUS_STEMS) {
            ChatTopic::Anxious
        } else if hit(LOW_STEMS) {
            ChatTopic::Low
        } else if hit(ANGER_STEMS) {
            ChatTopic::Anger
        } else {
            ChatTopic::General
        }
    }

    fn bank(self) -> &'static [&'static str] {
        match self {
            ChatTopic::Anxious => content::ANXIOUS_REPLIES,
            ChatTopic::Low => content::LOW_REPLIES,
            ChatTopic::Anger => content::ANGER_REPLIES,
            ChatTopic::General => content::GENERAL_REPLIES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reframe {
    /// The thought as echoed back, truncated.
    pub thought: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MicroPlan {
    pub plan: String,
    /// First sentence of the plan.
    pub first_step: String,
}

/// Picks replies from the static banks. Bank text is returned verbatim.
pub struct Companion {
    rng: StdRng,
}

impl Default for Companion {
    fn default() -> Self {
        Self::new()
    }
}

impl Companion {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic picks, for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick(&mut self, bank: &[&str]) -> String {
        bank.choose(&mut self.rng).copied().unwrap_or_default().to_string()
    }

    pub fn chat_reply(&mut self, input: &str) -> String {
        let input = input.trim();
        if input.is_empty() {
            return EMPTY_CHAT_PROMPT.to_string();
        }
        let topic = ChatTopic::detect(input);
        tracing::debug!(?topic, "routing chat reply");
        self.pick(topic.bank())
    }

    /// Classify `text` and attach a supportive reply.
    pub fn read_mood(
        &mut self,
        text: &str,
        scorer: &dyn PolarityScorer,
        config: &MoodConfig,
    ) -> MoodReading {
        let polarity = score_text(scorer, text, config.max_chars);
        let mood = Mood::classify(polarity, config);
        MoodReading {
            mood,
            polarity,
            color: mood.color().to_string(),
            reply: self.pick(content::MOOD_REPLIES),
        }
    }

    pub fn daily_tip(&mut self) -> String {
        self.pick(content::DAILY_TIPS)
    }

    pub fn affirmation(&mut self) -> String {
        self.pick(content::AFFIRMATIONS)
    }

    pub fn breathing(&mut self) -> String {
        self.pick(content::BREATHING_GUIDES)
    }

    pub fn emergency(&mut self) -> String {
        self.pick(content::EMERGENCY_REPLIES)
    }

    pub fn journal_ack(&mut self) -> String {
        self.pick(content::JOURNAL_ACKS)
    }

    pub fn growth_ack(&mut self) -> String {
        self.pick(content::GROWTH_ACKS)
    }

    pub fn visual_ack(&mut self) -> String {
        self.pick(content::VISUAL_ACKS)
    }

    pub fn streak_ack(&self, result: MarkResult) -> String {
        let idx = match result {
            MarkResult::Created => 0,
            MarkResult::AlreadyMarked => 1,
        };
        content::STREAK_ACKS[idx].to_string()
    }

    /// Pair an automatic thought with a reframing suggestion.
    ///
    /// # Errors
    /// Returns [`ValidationError::Empty`] for a blank thought.
    pub fn reframe(&mut self, thought: &str) -> Result<Reframe, ValidationError> {
        let thought = thought.trim();
        if thought.is_empty() {
            return Err(ValidationError::Empty { field: "thought" });
        }
        Ok(Reframe {
            thought: truncate_chars(thought, REFRAME_ECHO_CHARS),
            suggestion: self.pick(content::REFRAMES),
        })
    }

    pub fn micro_plan(&mut self) -> MicroPlan {
        let plan = self.pick(content::MICRO_PLANS);
        let first_step = plan.split('.').next().unwrap_or_default().trim().to_string();
        MicroPlan { plan, first_step }
    }
}

/// Truncate to `max` characters, appending `...` when anything was cut.
pub fn truncate_chars(text: &str, max: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn companion() -> Companion {
        Companion::with_seed(7)
    }

    #[test]
    fn topic_detection_follows_keyword_order() {
        assert_eq!(ChatTopic::detect("I'm so WORRIED about tomorrow"), ChatTopic::Anxious);
        assert_eq!(ChatTopic::detect("feeling lonely"), ChatTopic::Low);
        assert_eq!(ChatTopic::detect("this is frustrating"), ChatTopic::Anger);
        assert_eq!(ChatTopic::detect("sad and scared"), ChatTopic::Anxious);
        assert_eq!(ChatTopic::detect("just checking in"), ChatTopic::General);
    }

    #[test]
    fn blank_chat_gets_prompt() {
        let mut c = companion();
        assert_eq!(c.chat_reply("   "), EMPTY_CHAT_PROMPT);
    }

    #[test]
    fn chat_reply_comes_from_routed_bank() {
        let mut c = companion();
        for _ in 0..10 {
            let reply = c.chat_reply("I feel panic rising");
            assert!(content::ANXIOUS_REPLIES.contains(&reply.as_str()));
        }
    }

    #[test]
    fn same_seed_same_picks() {
        let mut a = companion();
        let mut b = companion();
        for _ in 0..5 {
            assert_eq!(a.daily_tip(), b.daily_tip());
        }
    }

    #[test]
    fn replies_keep_dashes_and_symbols() {
        let mut c = companion();
        assert_eq!(c.streak_ack(MarkResult::Created), content::STREAK_ACKS[0]);
        assert_eq!(c.streak_ack(MarkResult::AlreadyMarked), content::STREAK_ACKS[1]);
        assert!(c.chat_reply("").contains("facing — I'm listening"));
        for _ in 0..20 {
            let tip = c.breathing();
            assert!(content::BREATHING_GUIDES.contains(&tip.as_str()));
            assert!(!tip.contains("  "), "double space in {tip:?}");
        }
    }

    #[test]
    fn reframe_rejects_blank_and_truncates() {
        let mut c = companion();
        assert!(c.reframe("  ").is_err());

        let long = "x".repeat(130);
        let r = c.reframe(&long).unwrap();
        assert_eq!(r.thought, format!("{}...", "x".repeat(120)));
        assert!(content::REFRAMES.contains(&r.suggestion.as_str()));

        let r = c.reframe("I always fail").unwrap();
        assert_eq!(r.thought, "I always fail");
    }

    #[test]
    fn micro_plan_first_step_is_first_sentence() {
        let mut c = companion();
        let plan = c.micro_plan();
        assert!(plan.plan.starts_with(&plan.first_step));
        assert!(!plan.first_step.contains('.'));
    }

    #[test]
    fn read_mood_uses_scorer_and_thresholds() {
        let mut c = companion();
        let cfg = MoodConfig::default();
        let happy = |_: &str| 0.8;
        let reading = c.read_mood("great day", &happy, &cfg);
        assert_eq!(reading.mood, Mood::Positive);
        assert_eq!(reading.color, "#e8fff6");
        assert!(content::MOOD_REPLIES.contains(&reading.reply.as_str()));

        let reading = c.read_mood("", &happy, &cfg);
        assert_eq!(reading.mood, Mood::Neutral);
        assert_eq!(reading.polarity, 0.0);
    }

    #[test]
    fn truncate_chars_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("héllo", 3), "hél...");
        assert_eq!(truncate_chars("abc", 3), "abc");
    }
}
