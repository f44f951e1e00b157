// src/export/model.rs

use crate::models::entry::Entry;
use crate::models::hours::Hours;
use serde::Serialize;

/// Flat view of an entry for export.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub category: String,
    pub start_time: String,
    pub end_time: String,
    pub hours: Hours,
    pub note: String,
}

impl From<&Entry> for EntryExport {
    fn from(e: &Entry) -> Self {
        Self {
            id: e.id.to_string(),
            date: e.date_str(),
            category: e.category.as_str().to_string(),
            start_time: e.start_str(),
            end_time: e.end_str(),
            hours: e.hours,
            note: e.note.clone(),
        }
    }
}
