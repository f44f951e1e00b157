use crate::core::calculator::balance::{BalanceSummary, calculate_balance, summarize};
use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::models::filter::EntryFilter;
use crate::models::hours::Hours;
use crate::store::EntryStore;

/// Entries left after filtering, newest first, with their balance.
#[derive(Debug, Clone)]
pub struct Selection {
    pub entries: Vec<Entry>,
    pub balance: Hours,
}

pub struct ListLogic;

impl ListLogic {
    pub fn select(store: &dyn EntryStore, filter: &EntryFilter) -> AppResult<Selection> {
        let all = store.list()?;
        Ok(Self::select_from(&all, filter))
    }

    pub fn select_from(entries: &[Entry], filter: &EntryFilter) -> Selection {
        let mut selected = filter.apply(entries);
        sort_for_display(&mut selected);
        let balance = calculate_balance(&selected);

        Selection {
            entries: selected,
            balance,
        }
    }

    /// Overall totals plus, when a filter is set, the totals of the selection.
    pub fn balances(
        store: &dyn EntryStore,
        filter: &EntryFilter,
    ) -> AppResult<(BalanceSummary, Option<BalanceSummary>)> {
        let all = store.list()?;
        let overall = summarize(&all);

        if filter.is_empty() {
            return Ok((overall, None));
        }
        Ok((overall, Some(summarize(&filter.apply(&all)))))
    }
}

/// Most recent date first; entries of the same day keep store order.
pub fn sort_for_display(entries: &mut [Entry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}
