use super::build_filter;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::balance::BalanceSummary;
use crate::core::list::ListLogic;
use crate::errors::AppResult;
use crate::store::open_store;
use crate::ui::messages::{balance, header};
use crate::utils::colors::{color_for_hours, paint};
use crate::utils::formatting::pad_right;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Balance { filter } = cmd {
        let filter = build_filter(filter)?;
        let store = open_store(cfg)?;
        let (overall, selection) = ListLogic::balances(store.as_ref(), &filter)?;

        header(format!("All entries ({})", overall.count));
        print_totals(&overall);
        balance("Balance", overall.balance);

        if let Some(sel) = selection {
            println!();
            header(format!("{} ({})", filter.describe(), sel.count));
            print_totals(&sel);
            balance("Balance in selection", sel.balance);
        }
    }
    Ok(())
}

fn print_totals(s: &BalanceSummary) {
    println!(
        "{} {}",
        pad_right("Overtime:", 12),
        paint(color_for_hours(s.overtime), &s.overtime.signed())
    );
    println!(
        "{} {}",
        pad_right("Recup:", 12),
        paint(color_for_hours(s.leave), &s.leave.signed())
    );
}
