// src/export/logic.rs

use crate::core::list::ListLogic;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{EntryExport, ExportFormat};
use crate::models::filter::EntryFilter;
use crate::store::EntryStore;
use crate::ui::messages::warning;
use crate::utils::path::{expand_tilde, is_absolute};

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the filtered selection, newest first.
    ///
    /// Returns the number of exported entries.
    pub fn export(
        store: &dyn EntryStore,
        format: ExportFormat,
        file: &str,
        filter: &EntryFilter,
        force: bool,
    ) -> AppResult<usize> {
        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let selection = ListLogic::select(store, filter)?;
        if selection.entries.is_empty() {
            warning(format!(
                "No entries found for {}. Nothing to export.",
                filter.describe()
            ));
            return Ok(0);
        }

        let path = expand_tilde(file);
        ensure_writable(&path, force)?;

        let rows: Vec<EntryExport> = selection.entries.iter().map(EntryExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(rows.len())
    }
}
