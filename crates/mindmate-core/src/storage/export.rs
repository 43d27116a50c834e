//! CSV export of the journals and habit marks.
//!
//! Each export writes a header row followed by one row per record. Fields
//! are quoted only when they contain a comma, quote or line break.

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::journal::{JournalEntry, VisualEntry};
use crate::streak::HabitMark;

pub const JOURNAL_HEADER: [&str; 4] = ["timestamp", "text", "mood", "polarity"];
pub const VISUAL_HEADER: [&str; 3] = ["timestamp", "image_path", "caption"];
pub const MARKS_HEADER: [&str; 2] = ["task", "date"];

/// Write one CSV record terminated by `\r\n`.
///
/// # Errors
/// Returns an error if the writer fails.
pub fn write_record<W, I, S>(out: &mut W, fields: I) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut first = true;
    for field in fields {
        if !first {
            out.write_all(b",")?;
        }
        first = false;
        let field = field.as_ref();
        if field.contains(&[',', '"', '\n', '\r'][..]) {
            write!(out, "\"{}\"", field.replace('"', "\"\""))?;
        } else {
            out.write_all(field.as_bytes())?;
        }
    }
    out.write_all(b"\r\n")
}

/// # Errors
/// Returns an error if the writer fails.
pub fn write_journal<W: Write>(out: &mut W, entries: &[JournalEntry]) -> std::io::Result<()> {
    write_record(out, JOURNAL_HEADER)?;
    for e in entries {
        write_record(
            out,
            [
                e.timestamp(),
                e.text.clone(),
                e.mood.journal_label().to_string(),
                e.polarity.to_string(),
            ],
        )?;
    }
    Ok(())
}

/// # Errors
/// Returns an error if the writer fails.
pub fn write_visual<W: Write>(out: &mut W, entries: &[VisualEntry]) -> std::io::Result<()> {
    write_record(out, VISUAL_HEADER)?;
    for e in entries {
        write_record(out, [e.timestamp(), e.image_path.clone(), e.caption.clone()])?;
    }
    Ok(())
}

/// # Errors
/// Returns an error if the writer fails.
pub fn write_marks<W: Write>(out: &mut W, marks: &[HabitMark]) -> std::io::Result<()> {
    write_record(out, MARKS_HEADER)?;
    for m in marks {
        write_record(out, [m.habit.clone(), m.date.format("%Y-%m-%d").to_string()])?;
    }
    Ok(())
}

/// Create `path` and fill it with `write`.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn export_to<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut std::io::BufWriter<std::fs::File>) -> std::io::Result<()>,
{
    let file = std::fs::File::create(path)?;
    let mut out = std::io::BufWriter::new(file);
    write(&mut out)?;
    out.flush()?;
    tracing::info!(path = %path.display(), "export written");
    Ok(())
}
