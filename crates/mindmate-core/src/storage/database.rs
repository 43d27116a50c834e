//! SQLite-based storage.
//!
//! Provides persistent storage for:
//! - Habit marks (one row per habit and date)
//! - Journal entries with their mood label
//! - Visual journal entries

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection};

use super::{data_dir, migrations, HabitStore};
use crate::error::{DatabaseError, Result};
use crate::journal::{JournalEntry, VisualEntry};
use crate::mood::Mood;
use crate::streak::HabitMark;

const DATE_FORMAT: &str = "%Y-%m-%d";
const STORED_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// SQLite database for habit marks and journals.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Get a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Open the database at `<data dir>/mindmate.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        Self::open_at(&data_dir()?.join("mindmate.db"))
    }

    /// Open (or create) the database at `path`.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "opened database");
        Self::from_connection(conn)
    }

    /// Open an in-memory database.
    ///
    /// # Errors
    /// Returns an error if the schema cannot be created.
    pub fn open_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        migrations::migrate(&conn).map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Insert a habit mark. Returns `false` if the pair was already stored.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub fn insert_mark(&self, mark: &HabitMark) -> Result<bool> {
        let changed = self.conn.execute(
            "INSERT OR IGNORE INTO habit_marks (habit, marked_on) VALUES (?1, ?2)",
            params![mark.habit, mark.date.format(DATE_FORMAT).to_string()],
        )?;
        Ok(changed > 0)
    }

    /// All habit marks in insertion order.
    ///
    /// # Errors
    /// Returns an error if the query fails or a stored date is malformed.
    pub fn habit_marks(&self) -> Result<Vec<HabitMark>> {
        let mut stmt = self
            .conn
            .prepare("SELECT habit, marked_on FROM habit_marks ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut marks = Vec::new();
        for row in rows {
            let (habit, marked_on) = row?;
            let date = NaiveDate::parse_from_str(&marked_on, DATE_FORMAT).map_err(|e| {
                DatabaseError::CorruptRow {
                    table: "habit_marks",
                    message: format!("{marked_on:?}: {e}"),
                }
            })?;
            marks.push(HabitMark { habit, date });
        }
        Ok(marks)
    }

    /// Store a journal entry, returning its row id.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub fn insert_journal_entry(&self, entry: &JournalEntry) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO journal_entries (created_at, text, mood, polarity)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                entry.created_at.format(STORED_TIMESTAMP_FORMAT).to_string(),
                entry.text,
                entry.mood.journal_label(),
                entry.polarity,
            ],
        )?;
        tracing::info!(mood = entry.mood.journal_label(), "journal entry saved");
        Ok(self.conn.last_insert_rowid())
    }

    /// Journal entries, oldest first. With a limit, only the newest `limit`.
    ///
    /// # Errors
    /// Returns an error if the query fails or a row is malformed.
    pub fn journal_entries(&self, limit: Option<usize>) -> Result<Vec<JournalEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT created_at, text, mood, polarity FROM (
                SELECT id, created_at, text, mood, polarity FROM journal_entries
                ORDER BY id DESC LIMIT ?1
             ) ORDER BY id",
        )?;
        let rows = stmt.query_map(params![sql_limit(limit)], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, f64>(3)?,
            ))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (created_at, text, mood, polarity) = row?;
            let mood = Mood::from_journal_label(&mood).ok_or_else(|| DatabaseError::CorruptRow {
                table: "journal_entries",
                message: format!("unknown mood {mood:?}"),
            })?;
            entries.push(JournalEntry {
                created_at: parse_timestamp("journal_entries", &created_at)?,
                text,
                mood,
                polarity,
            });
        }
        Ok(entries)
    }

    /// The most recent journal entry, if any.
    ///
    /// # Errors
    /// Same as [`Database::journal_entries`].
    pub fn latest_journal_entry(&self) -> Result<Option<JournalEntry>> {
        Ok(self.journal_entries(Some(1))?.pop())
    }

    /// Store a visual journal entry, returning its row id.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub fn insert_visual_entry(&self, entry: &VisualEntry) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO visual_entries (created_at, image_path, caption) VALUES (?1, ?2, ?3)",
            params![
                entry.created_at.format(STORED_TIMESTAMP_FORMAT).to_string(),
                entry.image_path,
                entry.caption,
            ],
        )?;
        tracing::info!("visual entry saved");
        Ok(self.conn.last_insert_rowid())
    }

    /// Visual entries, oldest first. With a limit, only the newest `limit`.
    ///
    /// # Errors
    /// Returns an error if the query fails or a row is malformed.
    pub fn visual_entries(&self, limit: Option<usize>) -> Result<Vec<VisualEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT created_at, image_path, caption FROM (
                SELECT id, created_at, image_path, caption FROM visual_entries
                ORDER BY id DESC LIMIT ?1
             ) ORDER BY id",
        )?;
        let rows = stmt.query_map(params![sql_limit(limit)], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (created_at, image_path, caption) = row?;
            entries.push(VisualEntry {
                created_at: parse_timestamp("visual_entries", &created_at)?,
                image_path,
                caption,
            });
        }
        Ok(entries)
    }
}

impl HabitStore for Database {
    fn load_marks(&self) -> Result<Vec<HabitMark>> {
        self.habit_marks()
    }

    fn append_mark(&self, mark: &HabitMark) -> Result<()> {
        self.insert_mark(mark)?;
        Ok(())
    }
}

// SQLite treats a negative LIMIT as "no limit".
fn sql_limit(limit: Option<usize>) -> i64 {
    limit.map_or(-1, |n| i64::try_from(n).unwrap_or(i64::MAX))
}

fn parse_timestamp(table: &'static str, raw: &str) -> Result<NaiveDateTime, DatabaseError> {
    NaiveDateTime::parse_from_str(raw, STORED_TIMESTAMP_FORMAT).map_err(|e| DatabaseError::CorruptRow {
        table,
        message: format!("{raw:?}: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn at(day: u32, h: u32) -> NaiveDateTime {
        d(day).and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn marks_roundtrip_in_insertion_order() {
        let db = Database::open_memory().unwrap();
        assert!(db.insert_mark(&HabitMark::new("walk", d(3))).unwrap());
        assert!(db.insert_mark(&HabitMark::new("read", d(1))).unwrap());
        assert!(db.insert_mark(&HabitMark::new("walk", d(2))).unwrap());

        let marks = db.habit_marks().unwrap();
        assert_eq!(
            marks,
            vec![
                HabitMark::new("walk", d(3)),
                HabitMark::new("read", d(1)),
                HabitMark::new("walk", d(2)),
            ]
        );
    }

    #[test]
    fn duplicate_mark_is_ignored() {
        let db = Database::open_memory().unwrap();
        assert!(db.insert_mark(&HabitMark::new("walk", d(1))).unwrap());
        assert!(!db.insert_mark(&HabitMark::new("walk", d(1))).unwrap());
        db.append_mark(&HabitMark::new("walk", d(1))).unwrap();
        assert_eq!(db.load_marks().unwrap().len(), 1);
    }

    #[test]
    fn corrupt_date_is_reported() {
        let db = Database::open_memory().unwrap();
        db.conn()
            .execute(
                "INSERT INTO habit_marks (habit, marked_on) VALUES ('walk', 'yesterday')",
                [],
            )
            .unwrap();
        let err = db.habit_marks().unwrap_err();
        assert!(err.to_string().contains("habit_marks"));
    }

    #[test]
    fn journal_limit_returns_newest_oldest_first() {
        let db = Database::open_memory().unwrap();
        for (i, text) in ["one", "two", "three"].iter().enumerate() {
            db.insert_journal_entry(&JournalEntry {
                created_at: at(1, 8 + i as u32),
                text: text.to_string(),
                mood: Mood::Neutral,
                polarity: 0.0,
            })
            .unwrap();
        }

        let all = db.journal_entries(None).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].text, "one");

        let recent = db.journal_entries(Some(2)).unwrap();
        let texts: Vec<_> = recent.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["two", "three"]);

        assert_eq!(db.latest_journal_entry().unwrap().unwrap().text, "three");
    }

    #[test]
    fn journal_preserves_mood_and_polarity() {
        let db = Database::open_memory().unwrap();
        let entry = JournalEntry {
            created_at: at(2, 21),
            text: "good".into(),
            mood: Mood::Positive,
            polarity: 0.5,
        };
        db.insert_journal_entry(&entry).unwrap();
        assert_eq!(db.journal_entries(None).unwrap(), vec![entry]);
    }

    #[test]
    fn empty_journal_has_no_latest() {
        let db = Database::open_memory().unwrap();
        assert!(db.latest_journal_entry().unwrap().is_none());
        assert!(db.visual_entries(Some(10)).unwrap().is_empty());
    }

    #[test]
    fn visual_entries_roundtrip() {
        let db = Database::open_memory().unwrap();
        let entry = VisualEntry::new(at(4, 18), Some("/tmp/a.png"), "sky");
        db.insert_visual_entry(&entry).unwrap();
        db.insert_visual_entry(&VisualEntry::new(at(5, 18), None, "")).unwrap();
        let entries = db.visual_entries(None).unwrap();
        assert_eq!(entries[0], entry);
        assert_eq!(entries[1].image_name(), "[no image]");
    }
}
