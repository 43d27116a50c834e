use std::path::PathBuf;

use clap::Subcommand;
use mindmate_core::storage::export;
use mindmate_core::{Companion, Config, Database, VisualEntry};

use super::{now, CommandResult};

#[derive(Subcommand)]
pub enum VisualAction {
    /// Record an image with a caption
    Add {
        /// Path to the image (stored as a reference only)
        #[arg(long)]
        image: Option<String>,
        /// Caption text
        #[arg(long, default_value = "")]
        caption: String,
    },
    /// Show recent entries
    List {
        /// Number of entries (default: journal.history_limit)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Export every entry as CSV
    Export {
        /// Destination file
        path: PathBuf,
    },
}

pub fn run(action: VisualAction) -> CommandResult {
    let config = Config::load()?;
    let db = Database::open()?;

    match action {
        VisualAction::Add { image, caption } => {
            let entry = VisualEntry::new(now(), image.as_deref(), &caption);
            db.insert_visual_entry(&entry)?;
            let mut companion = Companion::new();
            println!("{} ({})", companion.visual_ack(), entry.timestamp());
        }
        VisualAction::List { limit } => {
            let entries = db.visual_entries(Some(limit.unwrap_or(config.journal.history_limit)))?;
            if entries.is_empty() {
                println!("No visual entries yet.");
            }
            for e in &entries {
                let caption: String = e.caption.chars().take(config.journal.preview_chars).collect();
                println!("{} • {} — {}", e.timestamp(), e.image_name(), caption);
            }
        }
        VisualAction::Export { path } => {
            let entries = db.visual_entries(None)?;
            export::export_to(&path, |w| export::write_visual(w, &entries))?;
            println!("{}", path.display());
        }
    }
    Ok(())
}
