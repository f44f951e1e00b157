use crate::models::category::Category;
use crate::models::entry::Entry;
use crate::models::hours::Hours;

/// Totals over a set of entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BalanceSummary {
    pub overtime: Hours,
    pub leave: Hours,
    pub balance: Hours,
    pub count: usize,
}

/// Sum of the signed hours of all entries.
pub fn calculate_balance(entries: &[Entry]) -> Hours {
    entries.iter().map(|e| e.hours).sum()
}

pub fn summarize(entries: &[Entry]) -> BalanceSummary {
    let overtime = entries
        .iter()
        .filter(|e| e.category == Category::Overtime)
        .map(|e| e.hours)
        .sum();
    let leave = entries
        .iter()
        .filter(|e| e.category == Category::CompensatoryLeave)
        .map(|e| e.hours)
        .sum();

    BalanceSummary {
        overtime,
        leave,
        balance: calculate_balance(entries),
        count: entries.len(),
    }
}
