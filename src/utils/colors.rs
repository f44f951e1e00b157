/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

use crate::models::hours::Hours;

/// Hours color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_hours(value: Hours) -> &'static str {
    if value.is_positive() {
        GREEN
    } else if value.is_negative() {
        RED
    } else {
        RESET
    }
}

pub fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}
