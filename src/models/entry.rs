use super::{category::Category, hours::Hours};
use crate::core::calculator::duration as calculator;
use crate::errors::AppResult;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Opaque, stable key of an entry (UUID v4 text).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn generate() -> Self {
        EntryId(Uuid::new_v4().to_string())
    }

    pub fn from_stored(s: &str) -> Self {
        EntryId(s.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 8 characters, used in tables and messages.
    pub fn short(&self) -> &str {
        self.0.get(..8).unwrap_or(&self.0)
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0
            .to_ascii_lowercase()
            .starts_with(&prefix.trim().to_ascii_lowercase())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Clock-in / clock-out pair of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSpan {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSpan {
    pub fn start_str(&self) -> String {
        self.start.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%H:%M").to_string()
    }
}

/// One recorded time-tracking row.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: EntryId,
    pub date: NaiveDate,     // ⇔ Date (TEXT "YYYY-MM-DD")
    pub category: Category,  // ⇔ Type
    pub span: Option<TimeSpan>, // ⇔ StartTime / EndTime (absent in spreadsheet tabs)
    pub hours: Hours,        // ⇔ Hours, signed by category
    pub note: String,        // ⇔ Note
}

impl Entry {
    /// Build a new entry from user input, computing its signed hours.
    ///
    /// Fails with `InvalidTimeFormat` or `NonPositiveDuration`.
    pub fn new(
        date: NaiveDate,
        category: Category,
        start: &str,
        end: &str,
        note: impl Into<String>,
    ) -> AppResult<Self> {
        Self::with_id(EntryId::generate(), date, category, start, end, note)
    }

    /// Same as [`Entry::new`] but keeping an existing id (full replace).
    pub fn with_id(
        id: EntryId,
        date: NaiveDate,
        category: Category,
        start: &str,
        end: &str,
        note: impl Into<String>,
    ) -> AppResult<Self> {
        let (start_t, end_t) = calculator::parse_pair(start, end)?;
        let hours = calculator::signed_hours(category, start, end)?;

        Ok(Self {
            id,
            date,
            category,
            span: Some(TimeSpan {
                start: start_t,
                end: end_t,
            }),
            hours,
            note: note.into(),
        })
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.span.map(|s| s.start_str()).unwrap_or_default()
    }

    pub fn end_str(&self) -> String {
        self.span.map(|s| s.end_str()).unwrap_or_default()
    }

    /// Human label for pickers and confirmations: `2025-01-10 | 08:00-17:30 | Overtime`.
    pub fn label(&self) -> String {
        match self.span {
            Some(s) => format!(
                "{} | {}-{} | {}",
                self.date_str(),
                s.start_str(),
                s.end_str(),
                self.category
            ),
            None => format!("{} | {} | {}", self.date_str(), self.hours, self.category),
        }
    }
}
