//! In-process narrowing of an entry list by year, month and category.

use super::{category::Category, entry::Entry};
use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Month};

/// Combined (AND) filter; every field left empty matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub year: Option<String>,
    pub month: Option<u32>,
    pub category: Option<Category>,
}

impl EntryFilter {
    /// Build a filter from raw CLI values.
    pub fn parse(
        year: Option<&str>,
        month: Option<&str>,
        category: Option<&str>,
    ) -> AppResult<Self> {
        let year = match year {
            Some(y) => {
                let y = y.trim();
                if y.len() != 4 || !y.chars().all(|c| c.is_ascii_digit()) {
                    return Err(AppError::InvalidDate(format!("year '{}'", y)));
                }
                Some(y.to_string())
            }
            None => None,
        };

        let month = month.map(parse_month).transpose()?;
        let category = category.map(Category::parse).transpose()?;

        Ok(Self {
            year,
            month,
            category,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.category.is_none()
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(y) = &self.year
            && !entry.date_str().starts_with(y.as_str())
        {
            return false;
        }
        if let Some(m) = self.month
            && entry.date.month() != m
        {
            return false;
        }
        if let Some(c) = self.category
            && entry.category != c
        {
            return false;
        }
        true
    }

    pub fn apply(&self, entries: &[Entry]) -> Vec<Entry> {
        entries
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect()
    }

    /// Short description used in list headers (`year 2025, March, overtime`).
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(y) = &self.year {
            parts.push(format!("year {}", y));
        }
        if let Some(m) = self.month
            && let Some(name) = Month::try_from(m as u8).ok().map(|m| m.name())
        {
            parts.push(name.to_string());
        }
        if let Some(c) = self.category {
            parts.push(c.label().to_string());
        }
        if parts.is_empty() {
            "all entries".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Accept `3`, `03`, `march`, `Mar`.
pub fn parse_month(s: &str) -> AppResult<u32> {
    let t = s.trim();
    if let Ok(n) = t.parse::<u32>() {
        if (1..=12).contains(&n) {
            return Ok(n);
        }
        return Err(AppError::InvalidMonth(s.to_string()));
    }

    t.parse::<Month>()
        .map(|m| m.number_from_month())
        .map_err(|_| AppError::InvalidMonth(s.to_string()))
}
