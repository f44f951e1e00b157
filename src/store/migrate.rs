//! Upgrade of older table layouts to the current one.
//!
//! Recognised file headers:
//! - `Datum,Type,Starttijd,Eindtijd,Uren,Opmerking` (first Dutch tracker)
//! - `Date,Type,StartTime,EndTime,Hours,Note` (before stable ids)
//! - the current `Date,Type,StartTime,EndTime,Hours,Note,Id`

use super::Row;
use super::RowStore;
use super::audit::AuditLog;
use super::csv_table::{read_raw, write_raw};
use super::layout::RowLayout;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::entry::EntryId;
use crate::models::hours::Hours;
use std::path::Path;
use tracing::{info, warn};

const COL_DATE: usize = 0;
const COL_TYPE: usize = 1;
const COL_HOURS: usize = 4;
const COL_ID: usize = 6;

/// Map a header cell to its column in the current file layout.
fn canonical_column(name: &str) -> Option<usize> {
    match name.trim().to_lowercase().as_str() {
        "date" | "datum" => Some(0),
        "type" => Some(1),
        "starttime" | "starttijd" | "start" => Some(2),
        "endtime" | "eindtijd" | "end" => Some(3),
        "hours" | "uren" | "hours(+/-)" => Some(4),
        "note" | "opmerking" => Some(5),
        "id" => Some(6),
        _ => None,
    }
}

fn is_blank(row: &Row) -> bool {
    row.iter().all(|c| c.trim().is_empty())
}

fn has_id(row: &Row, id_col: usize) -> bool {
    row.get(id_col).is_some_and(|c| !c.trim().is_empty())
}

/// Rewrite the table at `path` in the current layout when needed.
///
/// Returns the number of rows rewritten, `None` when nothing changed.
pub fn ensure_current_layout(path: &Path, audit: &AuditLog) -> AppResult<Option<usize>> {
    let Some((header, rows)) = read_raw(path)? else {
        return Ok(None);
    };

    let current = RowLayout::File.header();
    let up_to_date =
        header == current && rows.iter().all(|r| is_blank(r) || has_id(r, COL_ID));
    if up_to_date {
        return Ok(None);
    }

    let mapping: Vec<Option<usize>> = header.iter().map(|h| canonical_column(h)).collect();
    for required in [COL_DATE, COL_TYPE, COL_HOURS] {
        if !mapping.contains(&Some(required)) {
            return Err(AppError::StoreUnavailable(format!(
                "{}: unrecognised header [{}]",
                path.display(),
                header.join(", ")
            )));
        }
    }

    let converted: Vec<Row> = rows
        .iter()
        .filter(|r| !is_blank(r))
        .map(|r| upgrade_row(r, &mapping))
        .collect();

    write_raw(path, &current, &converted)?;

    let n = converted.len();
    info!(path = %path.display(), rows = n, "table upgraded to current layout");
    if let Err(e) = audit.record(
        "migrate",
        &path.display().to_string(),
        &format!("{} rows upgraded to the current layout", n),
    ) {
        warn!(error = %e, "failed to write audit log");
    }

    Ok(Some(n))
}

fn upgrade_row(row: &Row, mapping: &[Option<usize>]) -> Row {
    let mut out = vec![String::new(); COL_ID + 1];
    for (cell, target) in row.iter().zip(mapping) {
        if let Some(c) = target {
            out[*c] = cell.trim().to_string();
        }
    }

    if let Some(c) = Category::from_code(&out[COL_TYPE]) {
        out[COL_TYPE] = c.as_str().to_string();
    }
    if let Ok(h) = Hours::parse(&out[COL_HOURS]) {
        out[COL_HOURS] = h.to_string();
    }
    if out[COL_ID].is_empty() {
        out[COL_ID] = EntryId::generate().to_string();
    }

    out
}

/// Give every non-blank row lacking an id a fresh one, row by row.
pub fn fill_missing_ids<S: RowStore>(rows: &mut S, id_col: usize) -> AppResult<usize> {
    let all = rows.read_all()?;
    let mut n = 0;

    for (pos, mut row) in all.into_iter().enumerate() {
        if is_blank(&row) || has_id(&row, id_col) {
            continue;
        }
        if row.len() <= id_col {
            row.resize(id_col + 1, String::new());
        }
        row[id_col] = EntryId::generate().to_string();
        rows.update_row(pos, row)?;
        n += 1;
    }

    if n > 0 {
        info!(rows = n, "assigned ids to rows without one");
    }
    Ok(n)
}
