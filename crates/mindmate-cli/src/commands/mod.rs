pub mod companion;
pub mod config;
pub mod journal;
pub mod streak;
pub mod visual;

use chrono::{Local, NaiveDate, NaiveDateTime};

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// The caller's calendar date, unless overridden with `--date`.
pub fn today_or(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
