//! One-shot companion replies.

use clap::Subcommand;
use mindmate_core::{Companion, Config, NeutralScorer};

use super::CommandResult;

#[derive(Subcommand)]
pub enum CompanionAction {
    /// Say something to the companion
    Chat {
        /// Message text
        message: Vec<String>,
    },
    /// Classify the mood of a piece of text
    Mood {
        /// Text to analyse
        text: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// A small tip for today
    Tip,
    /// A short affirmation
    Affirm,
    /// A breathing exercise
    Breathe,
    /// Where to turn in a crisis
    HelpNow,
    /// Reframe an automatic thought
    Reframe {
        /// The thought
        thought: Vec<String>,
    },
    /// A tiny plan for the next few minutes
    Plan,
}

pub fn run(action: CompanionAction) -> CommandResult {
    let mut companion = Companion::new();

    match action {
        CompanionAction::Chat { message } => println!("{}", companion.chat_reply(&message.join(" "))),
        CompanionAction::Mood { text, json } => {
            let config = Config::load()?;
            let reading = companion.read_mood(&text.join(" "), &NeutralScorer, &config.mood);
            if json {
                println!("{}", serde_json::to_string_pretty(&reading)?);
            } else {
                println!("Mood: {} ({:+.2})", reading.mood.label(), reading.polarity);
                println!("{}", reading.reply);
            }
        }
        CompanionAction::Tip => println!("{}", companion.daily_tip()),
        CompanionAction::Affirm => println!("{}", companion.affirmation()),
        CompanionAction::Breathe => println!("{}", companion.breathing()),
        CompanionAction::HelpNow => println!("{}", companion.emergency()),
        CompanionAction::Reframe { thought } => {
            let reframe = companion.reframe(&thought.join(" "))?;
            println!("Thought: \"{}\"", reframe.thought);
            println!("Reframe suggestion:\n{}", reframe.suggestion);
        }
        CompanionAction::Plan => {
            let plan = companion.micro_plan();
            println!("Micro-plan: {}", plan.plan);
            println!("Try: {}.", plan.first_step);
        }
    }
    Ok(())
}
