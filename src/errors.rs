//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Row not found: {0}")]
    RowNotFound(String),

    #[error("Ambiguous id prefix '{0}': matches {1} entries")]
    AmbiguousId(String, usize),

    #[error("Missing spreadsheet credentials: {0}")]
    MissingCredentials(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format (expected HH:MM): '{0}'")]
    InvalidTimeFormat(String),

    #[error("Invalid date format (expected YYYY-MM-DD): '{0}'")]
    InvalidDate(String),

    #[error("Invalid category: '{0}' (use overtime or recup)")]
    InvalidCategory(String),

    #[error("Invalid month: '{0}'")]
    InvalidMonth(String),

    #[error("Invalid hours value: '{0}'")]
    InvalidHours(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Duration must be positive: {start} → {end} is zero hours")]
    NonPositiveDuration { start: String, end: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("{0}")]
    Other(String),
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::StoreUnavailable(format!("CSV error: {e}"))
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
