//! Column layouts of the two persisted formats.

use super::Row;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::entry::{Entry, EntryId, TimeSpan};
use crate::models::hours::Hours;
use crate::utils::date::parse_date;
use chrono::NaiveTime;
use tracing::warn;

/// `Date,Type,StartTime,EndTime,Hours,Note,Id`
pub const FILE_HEADER: [&str; 7] = [
    "Date",
    "Type",
    "StartTime",
    "EndTime",
    "Hours",
    "Note",
    "Id",
];

/// `Date,Type,Hours(+/-),Note,Id`
pub const TAB_HEADER: [&str; 5] = ["Date", "Type", "Hours(+/-)", "Note", "Id"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLayout {
    /// Local CSV table, every category in one file.
    File,
    /// Spreadsheet tab, one category per tab, no clock times.
    Tab,
}

impl RowLayout {
    pub fn header(&self) -> Row {
        match self {
            RowLayout::File => FILE_HEADER.iter().map(|s| s.to_string()).collect(),
            RowLayout::Tab => TAB_HEADER.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn id_column(&self) -> usize {
        self.header().len() - 1
    }

    pub fn encode(&self, e: &Entry) -> Row {
        match self {
            RowLayout::File => vec![
                e.date_str(),
                e.category.as_str().to_string(),
                e.start_str(),
                e.end_str(),
                e.hours.to_string(),
                e.note.clone(),
                e.id.to_string(),
            ],
            RowLayout::Tab => vec![
                e.date_str(),
                e.category.as_str().to_string(),
                e.hours.to_string(),
                e.note.clone(),
                e.id.to_string(),
            ],
        }
    }

    /// Decode a stored row. `fallback` is the category of a single-category
    /// tab, used when the Type cell is unreadable.
    pub fn decode(&self, row: &Row, fallback: Option<Category>) -> AppResult<Entry> {
        let cell = |i: usize| row.get(i).map(|s| s.trim()).unwrap_or("");

        let (date, kind, span, hours, note, id) = match self {
            RowLayout::File => (
                cell(0),
                cell(1),
                parse_span(cell(2), cell(3)),
                cell(4),
                cell(5),
                cell(6),
            ),
            RowLayout::Tab => (cell(0), cell(1), None, cell(2), cell(3), cell(4)),
        };

        let date = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let category = match (Category::from_code(kind), fallback) {
            (Some(c), _) => c,
            (None, Some(c)) => c,
            (None, None) => return Err(AppError::InvalidCategory(kind.to_string())),
        };

        if id.is_empty() {
            return Err(AppError::RowNotFound(format!(
                "row dated {} has no id",
                date.format("%Y-%m-%d")
            )));
        }

        let hours = Hours::parse(hours).unwrap_or_else(|_| {
            warn!(id, value = hours, "unreadable hours counted as 0");
            Hours::ZERO
        });

        Ok(Entry {
            id: EntryId::from_stored(id),
            date,
            category,
            span,
            hours,
            note: note.to_string(),
        })
    }
}

fn parse_span(start: &str, end: &str) -> Option<TimeSpan> {
    let start = NaiveTime::parse_from_str(start, "%H:%M").ok()?;
    let end = NaiveTime::parse_from_str(end, "%H:%M").ok()?;
    Some(TimeSpan { start, end })
}
