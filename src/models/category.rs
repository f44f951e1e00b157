use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;

/// Entry category: overtime adds to the balance, compensatory leave
/// ("recup") subtracts from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Overtime,
    CompensatoryLeave,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Overtime, Category::CompensatoryLeave];

    /// Convert enum → store string
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Overtime => "Overtime",
            Category::CompensatoryLeave => "CompensatoryLeave",
        }
    }

    /// Short label for tables
    pub fn label(&self) -> &'static str {
        match self {
            Category::Overtime => "overtime",
            Category::CompensatoryLeave => "recup",
        }
    }

    /// +1 for overtime, -1 for compensatory leave
    pub fn sign(&self) -> i64 {
        match self {
            Category::Overtime => 1,
            Category::CompensatoryLeave => -1,
        }
    }

    /// Convert user or store string → enum.
    /// Also accepts the labels written by the legacy Dutch tracker.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "overtime" | "ot" | "o" | "overuren" => Some(Category::Overtime),
            "compensatoryleave" | "compensatory-leave" | "compensatory_leave" | "leave"
            | "recup" | "r" => Some(Category::CompensatoryLeave),
            _ => None,
        }
    }

    pub fn parse(code: &str) -> AppResult<Self> {
        Self::from_code(code).ok_or_else(|| AppError::InvalidCategory(code.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
