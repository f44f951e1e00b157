//! Elapsed-hours computation for `HH:MM` pairs.

use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::hours::Hours;
use chrono::NaiveTime;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// 24-hour `HH:MM` parse; one-digit hours or minutes (`8:30`) are accepted.
pub fn parse_time(t: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M")
        .map_err(|_| AppError::InvalidTimeFormat(t.to_string()))
}

pub fn parse_pair(start: &str, end: &str) -> AppResult<(NaiveTime, NaiveTime)> {
    Ok((parse_time(start)?, parse_time(end)?))
}

/// Minutes from `start` to `end`; an `end` earlier than `start` falls on
/// the following day.
pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let diff = (end - start).num_minutes();
    if diff < 0 { diff + MINUTES_PER_DAY } else { diff }
}

pub fn elapsed_between(start: NaiveTime, end: NaiveTime) -> Hours {
    Hours::from_minutes(minutes_between(start, end))
}

/// `elapsed("22:00", "02:00") == 4.00`
pub fn elapsed(start: &str, end: &str) -> AppResult<Hours> {
    let (s, e) = parse_pair(start, end)?;
    Ok(elapsed_between(s, e))
}

/// Elapsed hours with the category sign applied.
///
/// Zero-length sessions are rejected with `NonPositiveDuration`.
pub fn signed_hours(category: Category, start: &str, end: &str) -> AppResult<Hours> {
    let h = elapsed(start, end)?;
    if !h.is_positive() {
        return Err(AppError::NonPositiveDuration {
            start: start.trim().to_string(),
            end: end.trim().to_string(),
        });
    }

    Ok(Hours::from_hundredths(h.hundredths() * category.sign()))
}
