//! Record store adapters.
//!
//! A [`RowStore`] is the positional collaborator (read all / append /
//! update / delete by 0-based data position). An [`EntryStore`] sits on
//! top of it and speaks in entries addressed by their stable id.

pub mod audit;
pub mod csv_table;
pub mod layout;
pub mod migrate;
pub mod sheet;

use crate::config::{Backend, Config};
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::entry::{Entry, EntryId};
use layout::RowLayout;
use tracing::{debug, warn};

pub use csv_table::{CsvEntryStore, CsvTable};
pub use sheet::{LocalTab, SheetEntryStore, SheetSession, SheetTab, TabRows, Workbook};

/// One stored row, cell by cell.
pub type Row = Vec<String>;

/// Minimum length accepted for an id prefix on `edit` / `del`.
pub const MIN_ID_PREFIX: usize = 4;

/// Positional row store (file table or spreadsheet tab).
pub trait RowStore {
    /// Every data row, header excluded, in store order.
    fn read_all(&self) -> AppResult<Vec<Row>>;
    fn append_row(&mut self, row: Row) -> AppResult<()>;
    /// Overwrite the row at `position`; `RowNotFound` when out of range.
    fn update_row(&mut self, position: usize, row: Row) -> AppResult<()>;
    /// Remove the row at `position`; later rows shift up by one.
    fn delete_row(&mut self, position: usize) -> AppResult<()>;
}

/// Entry-level store used by the commands.
pub trait EntryStore {
    fn list(&self) -> AppResult<Vec<Entry>>;
    fn append(&mut self, entry: &Entry) -> AppResult<()>;
    /// Full-field replace of the entry carrying `id`.
    fn replace(&mut self, id: &EntryId, entry: &Entry) -> AppResult<()>;
    fn delete(&mut self, id: &EntryId) -> AppResult<Entry>;
    /// Human description of where the entries live.
    fn location(&self) -> String;
}

/// Entries of one row store decoded through a layout.
pub struct TableAdapter<S> {
    rows: S,
    layout: RowLayout,
    /// Category of every row when the table holds a single category.
    category: Option<Category>,
}

impl<S: RowStore> TableAdapter<S> {
    pub fn new(rows: S, layout: RowLayout, category: Option<Category>) -> Self {
        Self {
            rows,
            layout,
            category,
        }
    }

    pub fn rows(&self) -> &S {
        &self.rows
    }

    /// Decoded entries with their current position. Rows that cannot be
    /// decoded are skipped with a warning but keep their position.
    pub fn positioned(&self) -> AppResult<Vec<(usize, Entry)>> {
        let rows = self.rows.read_all()?;
        let mut out = Vec::with_capacity(rows.len());

        for (pos, row) in rows.iter().enumerate() {
            if row.iter().all(|c| c.trim().is_empty()) {
                continue;
            }
            match self.layout.decode(row, self.category) {
                Ok(e) => out.push((pos, e)),
                Err(e) => warn!(position = pos, error = %e, "skipping unreadable row"),
            }
        }

        debug!(rows = rows.len(), decoded = out.len(), "table read");
        Ok(out)
    }

    pub fn entries(&self) -> AppResult<Vec<Entry>> {
        Ok(self.positioned()?.into_iter().map(|(_, e)| e).collect())
    }

    pub fn position_of(&self, id: &EntryId) -> AppResult<Option<usize>> {
        Ok(self
            .positioned()?
            .into_iter()
            .find(|(_, e)| &e.id == id)
            .map(|(p, _)| p))
    }

    pub fn append(&mut self, entry: &Entry) -> AppResult<()> {
        self.rows.append_row(self.layout.encode(entry))
    }

    pub fn replace_at(&mut self, position: usize, entry: &Entry) -> AppResult<()> {
        self.rows.update_row(position, self.layout.encode(entry))
    }

    pub fn delete_at(&mut self, position: usize) -> AppResult<()> {
        self.rows.delete_row(position)
    }
}

/// Resolve a full id or a unique prefix against a list of entries.
pub fn resolve_id<'a>(entries: &'a [Entry], prefix: &str) -> AppResult<&'a Entry> {
    let p = prefix.trim();
    if p.len() < MIN_ID_PREFIX {
        return Err(AppError::RowNotFound(format!(
            "id prefix '{}' is too short (min {} characters)",
            p, MIN_ID_PREFIX
        )));
    }

    if let Some(exact) = entries.iter().find(|e| e.id.as_str().eq_ignore_ascii_case(p)) {
        return Ok(exact);
    }

    let matches: Vec<&Entry> = entries.iter().filter(|e| e.id.starts_with(p)).collect();
    match matches.as_slice() {
        [] => Err(AppError::RowNotFound(format!("no entry with id '{}'", p))),
        [one] => Ok(one),
        many => Err(AppError::AmbiguousId(p.to_string(), many.len())),
    }
}

/// Open the store selected by the configuration.
pub fn open_store(cfg: &Config) -> AppResult<Box<dyn EntryStore>> {
    match cfg.backend {
        Backend::File => {
            let path = cfg.data_path();
            migrate::ensure_current_layout(&path, &audit::AuditLog::for_config(cfg))?;
            Ok(Box::new(CsvEntryStore::open(&path)))
        }
        Backend::Sheet => {
            let session = SheetSession::establish(&cfg.credentials_path())?;
            let workbook = Workbook::open(&session, &cfg.workbook_path())?;
            Ok(Box::new(SheetEntryStore::from_workbook(&workbook)?))
        }
    }
}
