//! File-backed variant: one CSV table, rewritten by atomic replacement.

use super::layout::RowLayout;
use super::{EntryStore, Row, RowStore, TableAdapter};
use crate::errors::{AppError, AppResult};
use crate::models::entry::{Entry, EntryId};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

fn unavailable(path: &Path, e: impl std::fmt::Display) -> AppError {
    AppError::StoreUnavailable(format!("{}: {}", path.display(), e))
}

/// Header row plus data rows as stored on disk.
pub fn read_raw(path: &Path) -> AppResult<Option<(Row, Vec<Row>)>> {
    if !path.exists() {
        return Ok(None);
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| unavailable(path, e))?;

    let header: Row = rdr
        .headers()
        .map_err(|e| unavailable(path, e))?
        .iter()
        .map(|s| s.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(|e| unavailable(path, e))?;
        rows.push(rec.iter().map(|s| s.to_string()).collect());
    }

    Ok(Some((header, rows)))
}

/// Write header + rows to a temporary sibling, then rename it over `path`.
pub fn write_raw(path: &Path, header: &Row, rows: &[Row]) -> AppResult<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir).map_err(|e| unavailable(&dir, e))?;

    let tmp = NamedTempFile::new_in(&dir).map_err(|e| unavailable(&dir, e))?;
    {
        let mut wtr = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(tmp.as_file());
        wtr.write_record(header).map_err(|e| unavailable(path, e))?;
        for r in rows {
            wtr.write_record(r).map_err(|e| unavailable(path, e))?;
        }
        wtr.flush().map_err(|e| unavailable(path, e))?;
    }

    tmp.persist(path).map_err(|e| unavailable(path, e.error))?;
    debug!(path = %path.display(), rows = rows.len(), "table written");
    Ok(())
}

/// Positional access to a CSV table with a fixed header.
pub struct CsvTable {
    path: PathBuf,
    header: Row,
}

impl CsvTable {
    pub fn new(path: &Path, header: Row) -> Self {
        Self {
            path: path.to_path_buf(),
            header,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file with just its header when missing.
    pub fn ensure_exists(&self) -> AppResult<()> {
        if self.path.exists() {
            return Ok(());
        }
        write_raw(&self.path, &self.header, &[])
    }

    fn normalize(&self, mut row: Row) -> Row {
        row.resize(self.header.len(), String::new());
        row
    }

    fn rewrite(&self, rows: &[Row]) -> AppResult<()> {
        write_raw(&self.path, &self.header, rows)
    }

    fn check_position(&self, position: usize, len: usize) -> AppResult<()> {
        if position >= len {
            return Err(AppError::RowNotFound(format!(
                "position {} (table has {} rows)",
                position, len
            )));
        }
        Ok(())
    }
}

impl RowStore for CsvTable {
    fn read_all(&self) -> AppResult<Vec<Row>> {
        Ok(read_raw(&self.path)?
            .map(|(_, rows)| rows.into_iter().map(|r| self.normalize(r)).collect())
            .unwrap_or_default())
    }

    fn append_row(&mut self, row: Row) -> AppResult<()> {
        let mut rows = self.read_all()?;
        rows.push(self.normalize(row));
        self.rewrite(&rows)
    }

    fn update_row(&mut self, position: usize, row: Row) -> AppResult<()> {
        let mut rows = self.read_all()?;
        self.check_position(position, rows.len())?;
        rows[position] = self.normalize(row);
        self.rewrite(&rows)
    }

    fn delete_row(&mut self, position: usize) -> AppResult<()> {
        let mut rows = self.read_all()?;
        self.check_position(position, rows.len())?;
        rows.remove(position);
        self.rewrite(&rows)
    }
}

/// Entry store over a single CSV file.
pub struct CsvEntryStore {
    table: TableAdapter<CsvTable>,
}

impl CsvEntryStore {
    pub fn open(path: &Path) -> Self {
        let table = CsvTable::new(path, RowLayout::File.header());
        Self {
            table: TableAdapter::new(table, RowLayout::File, None),
        }
    }

    pub fn path(&self) -> &Path {
        self.table.rows().path()
    }
}

impl EntryStore for CsvEntryStore {
    fn list(&self) -> AppResult<Vec<Entry>> {
        self.table.entries()
    }

    fn append(&mut self, entry: &Entry) -> AppResult<()> {
        self.table.append(entry)?;
        info!(id = %entry.id, hours = %entry.hours, "entry appended");
        Ok(())
    }

    fn replace(&mut self, id: &EntryId, entry: &Entry) -> AppResult<()> {
        let pos = self
            .table
            .position_of(id)?
            .ok_or_else(|| AppError::RowNotFound(format!("no entry with id '{}'", id)))?;
        self.table.replace_at(pos, entry)?;
        info!(%id, position = pos, "entry replaced");
        Ok(())
    }

    fn delete(&mut self, id: &EntryId) -> AppResult<Entry> {
        let (pos, entry) = self
            .table
            .positioned()?
            .into_iter()
            .find(|(_, e)| &e.id == id)
            .ok_or_else(|| AppError::RowNotFound(format!("no entry with id '{}'", id)))?;
        self.table.delete_at(pos)?;
        info!(%id, position = pos, "entry deleted");
        Ok(entry)
    }

    fn location(&self) -> String {
        self.path().display().to_string()
    }
}
