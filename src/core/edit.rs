use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::entry::Entry;
use crate::store::{EntryStore, resolve_id};
use chrono::NaiveDate;

/// Fields given on the command line; `None` keeps the stored value.
#[derive(Debug, Default, Clone)]
pub struct EditRequest {
    pub date: Option<NaiveDate>,
    pub category: Option<Category>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub note: Option<String>,
}

impl EditRequest {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.category.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.note.is_none()
    }
}

/// Full-field replace of an existing entry.
pub struct EditLogic;

impl EditLogic {
    /// Returns `(before, after)`.
    pub fn apply(
        store: &mut dyn EntryStore,
        id_prefix: &str,
        req: &EditRequest,
    ) -> AppResult<(Entry, Entry)> {
        if req.is_empty() {
            return Err(AppError::Other(
                "Nothing to do: specify at least one of --date, --start, --end, --type, --note."
                    .into(),
            ));
        }

        let entries = store.list()?;
        let current = resolve_id(&entries, id_prefix)?.clone();

        let start = req
            .start
            .clone()
            .or_else(|| current.span.map(|s| s.start_str()));
        let end = req.end.clone().or_else(|| current.span.map(|s| s.end_str()));

        let (Some(start), Some(end)) = (start, end) else {
            return Err(AppError::Other(format!(
                "entry {} has no stored start/end time: pass both --start and --end",
                current.id.short()
            )));
        };

        // hours are always recomputed, never carried over
        let updated = Entry::with_id(
            current.id.clone(),
            req.date.unwrap_or(current.date),
            req.category.unwrap_or(current.category),
            &start,
            &end,
            req.note
                .as_deref()
                .map(str::trim)
                .unwrap_or(current.note.as_str()),
        )?;

        store.replace(&current.id, &updated)?;
        Ok((current, updated))
    }
}
