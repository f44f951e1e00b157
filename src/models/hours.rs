//! Fixed-point hour amounts (hundredths of an hour).

use crate::errors::{AppError, AppResult};
use serde::{Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Signed amount of hours with 2-decimal precision.
///
/// Stored as hundredths so that balances never drift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hours(i64);

impl Hours {
    pub const ZERO: Hours = Hours(0);

    /// Largest magnitude accepted from a stored cell, in hours.
    pub const MAX_CELL: f64 = 1_000_000.0;

    pub fn from_hundredths(h: i64) -> Self {
        Hours(h)
    }

    /// Convert whole minutes to hours, rounded half away from zero to
    /// 2 decimals.
    pub fn from_minutes(minutes: i64) -> Self {
        let scaled = minutes * 100;
        let rounded = if scaled >= 0 {
            (scaled + 30) / 60
        } else {
            (scaled - 30) / 60
        };
        Hours(rounded)
    }

    pub fn hundredths(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a stored hours cell ("9.5", "-3.00", "4").
    ///
    /// Values beyond [`Hours::MAX_CELL`] are rejected like non-numeric text.
    pub fn parse(s: &str) -> AppResult<Self> {
        let t = s.trim();
        let v: f64 = t.parse().map_err(|_| AppError::InvalidHours(s.to_string()))?;
        if !v.is_finite() || v.abs() > Self::MAX_CELL {
            return Err(AppError::InvalidHours(s.to_string()));
        }
        Ok(Hours((v * 100.0).round() as i64))
    }

    /// Format with an explicit `+` for positive values (`+9.50`, `-3.00`).
    pub fn signed(&self) -> String {
        if self.0 > 0 {
            format!("+{}", self)
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let a = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, a / 100, a % 100)
    }
}

impl Add for Hours {
    type Output = Hours;

    fn add(self, rhs: Hours) -> Hours {
        Hours(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Hours {
    fn sum<I: Iterator<Item = Hours>>(iter: I) -> Hours {
        iter.fold(Hours::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Hours> for Hours {
    fn sum<I: Iterator<Item = &'a Hours>>(iter: I) -> Hours {
        iter.copied().sum()
    }
}

impl Serialize for Hours {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_round_half_away_from_zero() {
        assert_eq!(Hours::from_minutes(570), Hours(950));
        assert_eq!(Hours::from_minutes(1), Hours(2));
        assert_eq!(Hours::from_minutes(20), Hours(33));
        assert_eq!(Hours::from_minutes(-20), Hours(-33));
    }

    #[test]
    fn display_keeps_two_decimals() {
        assert_eq!(Hours(950).to_string(), "9.50");
        assert_eq!(Hours(-300).to_string(), "-3.00");
        assert_eq!(Hours(-5).to_string(), "-0.05");
        assert_eq!(Hours(650).signed(), "+6.50");
        assert_eq!(Hours::ZERO.signed(), "0.00");
    }

    #[test]
    fn parse_accepts_float_text() {
        assert_eq!(Hours::parse("9.5").unwrap(), Hours(950));
        assert_eq!(Hours::parse(" -3.0 ").unwrap(), Hours(-300));
        assert!(Hours::parse("abc").is_err());
        assert!(Hours::parse("").is_err());
        assert!(Hours::parse("NaN").is_err());
    }

    #[test]
    fn huge_values_never_overflow() {
        assert!(Hours::parse("1e300").is_err());
        assert!(Hours::parse("-1e300").is_err());
        assert_eq!(Hours::parse("-1000000").unwrap(), Hours(-100_000_000));

        let sum: Hours = [Hours(i64::MAX), Hours(1)].into_iter().sum();
        assert_eq!(sum, Hours(i64::MAX));
        assert_eq!(Hours(i64::MIN).to_string(), "-92233720368547758.08");
    }
}
