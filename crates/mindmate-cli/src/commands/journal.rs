use std::path::PathBuf;

use clap::Subcommand;
use mindmate_core::storage::export;
use mindmate_core::{growth_report, Companion, Config, Database, GrowthReport, JournalEntry, NeutralScorer};

use super::{now, CommandResult};

#[derive(Subcommand)]
pub enum JournalAction {
    /// Write a journal entry
    Add {
        /// Entry text
        text: Vec<String>,
    },
    /// Show recent entries
    List {
        /// Number of entries (default: journal.history_limit)
        #[arg(long)]
        limit: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mood trend, recurring themes and focus goals
    Report {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export every entry as CSV
    Export {
        /// Destination file
        path: PathBuf,
    },
}

pub fn run(action: JournalAction) -> CommandResult {
    let config = Config::load()?;
    let db = Database::open()?;
    let mut companion = Companion::new();

    match action {
        JournalAction::Add { text } => {
            let text = text.join(" ");
            let entry = JournalEntry::compose(&text, now(), &NeutralScorer, &config.mood);
            db.insert_journal_entry(&entry)?;
            println!("{}", companion.journal_ack());
            println!();
            println!(
                "Latest Entry ({}):\nMood: {}\n{}",
                entry.timestamp(),
                entry.mood.journal_label(),
                entry.preview(config.journal.preview_chars)
            );
        }
        JournalAction::List { limit, json } => {
            let entries = db.journal_entries(Some(limit.unwrap_or(config.journal.history_limit)))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if entries.is_empty() {
                println!("No journal entries yet. Try writing two honest sentences.");
            } else {
                let blocks: Vec<String> = entries
                    .iter()
                    .map(|e| format!("{} • Mood: {}\n{}", e.timestamp(), e.mood.journal_label(), e.text))
                    .collect();
                println!("{}", blocks.join("\n\n"));
            }
        }
        JournalAction::Report { json } => {
            let entries = db.journal_entries(None)?;
            match growth_report(&entries, &config.mood) {
                Some(report) if json => println!("{}", serde_json::to_string_pretty(&report)?),
                Some(report) => {
                    println!("{}", render_report(&report));
                    println!();
                    println!("{}", companion.growth_ack());
                }
                None => println!("No data yet — add a few journal entries to generate a Growth Report."),
            }
        }
        JournalAction::Export { path } => {
            let entries = db.journal_entries(None)?;
            export::export_to(&path, |w| export::write_journal(w, &entries))?;
            println!("{}", path.display());
        }
    }
    Ok(())
}

fn render_report(report: &GrowthReport) -> String {
    let themes = if report.themes.is_empty() {
        "—".to_string()
    } else {
        report.themes.join(", ")
    };
    let goals: Vec<String> = report
        .goals
        .iter()
        .enumerate()
        .map(|(i, g)| format!("{}. {}", i + 1, g))
        .collect();
    format!(
        "Daily Growth Report\nMood trend: {}\nCommon themes: {}\n3 Focus Goals:\n{}",
        report.trend.label(),
        themes,
        goals.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindmate_core::Trend;

    #[test]
    fn report_renders_numbered_goals() {
        let report = GrowthReport {
            entries: 2,
            average_polarity: 0.0,
            trend: Trend::Steady,
            themes: vec!["walk".into(), "tea".into()],
            goals: Trend::Steady.focus_goals().iter().map(|g| g.to_string()).collect(),
        };
        let text = render_report(&report);
        assert!(text.contains("Mood trend: steady"));
        assert!(text.contains("Common themes: walk, tea"));
        assert!(text.ends_with("1. Plan a 10-min walk\n2. Quick tidy up\n3. List 3 tiny wins"));
    }

    #[test]
    fn report_without_themes_shows_dash() {
        let report = GrowthReport {
            entries: 1,
            average_polarity: 0.0,
            trend: Trend::Steady,
            themes: vec![],
            goals: vec![],
        };
        assert!(render_report(&report).contains("Common themes: —"));
    }
}
