//! Formatting utilities used for CLI and export outputs.

use crate::models::hours::Hours;
use unicode_width::UnicodeWidthStr;

/// Pad to `width` display columns (emoji and accents count correctly).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// `9.50` → `+09h 30m`, `-3.00` → `-03h 00m`
pub fn hours2readable(h: Hours, want_sign: bool) -> String {
    let total_minutes = h
        .hundredths()
        .unsigned_abs()
        .saturating_mul(60)
        .saturating_add(50)
        / 100;
    let sign = if h.is_positive() && want_sign {
        "+"
    } else if h.is_negative() {
        "-"
    } else {
        ""
    };
    format!("{}{:02}h {:02}m", sign, total_minutes / 60, total_minutes % 60)
}
