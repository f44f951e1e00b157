//! Audit trail of mutations, kept as a CSV next to the store.

use crate::config::{Backend, Config};
use crate::errors::{AppError, AppResult};
use crate::utils::path::with_appended_extension;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecord {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// `<data_file>.log` for the file backend, `<workbook>/audit.log` for
    /// the sheet backend.
    pub fn for_config(cfg: &Config) -> Self {
        match cfg.backend {
            Backend::File => Self::new(&with_appended_extension(&cfg.data_path(), "log")),
            Backend::Sheet => Self::new(&cfg.workbook_path().join("audit.log")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line, creating the file (with header) when needed.
    pub fn record(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let is_new = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(is_new)
            .from_writer(file);

        wtr.serialize(AuditRecord {
            date: Local::now().to_rfc3339(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        })
        .map_err(|e| AppError::Other(format!("audit log write error: {e}")))?;
        wtr.flush()?;
        Ok(())
    }

    pub fn read(&self) -> AppResult<Vec<AuditRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut rdr = csv::Reader::from_path(&self.path)
            .map_err(|e| AppError::Other(format!("audit log read error: {e}")))?;

        let mut out = Vec::new();
        for rec in rdr.deserialize() {
            match rec {
                Ok(r) => out.push(r),
                Err(e) => warn!(error = %e, "skipping malformed audit line"),
            }
        }
        Ok(out)
    }
}

/// Write an audit line; failures are only logged (non blocking).
pub fn ttlog(cfg: &Config, operation: &str, target: &str, message: &str) {
    if let Err(e) = AuditLog::for_config(cfg).record(operation, target, message) {
        warn!(error = %e, "failed to write audit log");
    }
}
