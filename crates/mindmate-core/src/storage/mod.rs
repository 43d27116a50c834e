mod config;
pub mod database;
pub mod export;
pub mod migrations;

pub use config::{Config, JournalConfig, MoodConfig};
pub use database::Database;

use std::path::PathBuf;

use crate::error::{ConfigError, Result};
use crate::streak::HabitMark;

/// Durable home of habit marks.
///
/// The streak tracker never performs I/O itself; it is handed a store on
/// construction and appends through it.
pub trait HabitStore {
    /// Every stored mark in the order it was appended.
    fn load_marks(&self) -> Result<Vec<HabitMark>>;

    /// Durably append one mark. Appending a pair that is already stored
    /// must not create a second copy.
    fn append_mark(&self, mark: &HabitMark) -> Result<()>;
}

/// Returns the data directory, creating it if needed.
///
/// `MINDMATE_DATA_DIR` wins when set. Otherwise `~/.config/mindmate[-dev]/`,
/// with the `-dev` suffix when `MINDMATE_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("MINDMATE_DATA_DIR") {
        Some(explicit) if !explicit.is_empty() => PathBuf::from(explicit),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("MINDMATE_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("mindmate-dev")
            } else {
                base_dir.join("mindmate")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
