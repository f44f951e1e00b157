use crate::errors::AppResult;
use crate::models::category::Category;
use crate::models::entry::Entry;
use crate::store::EntryStore;
use chrono::NaiveDate;
use tracing::debug;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Compute the signed hours of a new session and append it.
    ///
    /// Nothing is written when the times are malformed or the session
    /// has zero length.
    pub fn apply(
        store: &mut dyn EntryStore,
        date: NaiveDate,
        category: Category,
        start: &str,
        end: &str,
        note: &str,
    ) -> AppResult<Entry> {
        let entry = Entry::new(date, category, start, end, note.trim())?;
        debug!(id = %entry.id, hours = %entry.hours, "new entry computed");

        store.append(&entry)?;
        Ok(entry)
    }
}
