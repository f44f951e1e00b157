use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::store::{EntryStore, resolve_id};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Look up the entry a (prefix) id designates, without deleting it.
    pub fn resolve(store: &dyn EntryStore, id_prefix: &str) -> AppResult<Entry> {
        let entries = store.list()?;
        Ok(resolve_id(&entries, id_prefix)?.clone())
    }

    pub fn apply(store: &mut dyn EntryStore, entry: &Entry) -> AppResult<Entry> {
        store.delete(&entry.id)
    }
}
