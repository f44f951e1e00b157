use super::build_filter;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::store::open_store;
use crate::ui::messages::{balance, info};
use crate::utils::table::{Column, Table};

const NOTE_WIDTH: usize = 40;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filter } = cmd {
        let filter = build_filter(filter)?;
        let store = open_store(cfg)?;
        let selection = ListLogic::select(store.as_ref(), &filter)?;

        if selection.entries.is_empty() {
            info(format!("No entries found for {}.", filter.describe()));
            return Ok(());
        }

        println!("📋 Entries for {}:\n", filter.describe());
        print!("{}", render_table(&selection.entries));
        println!();

        balance(
            format!("Balance in selection ({} entries)", selection.entries.len()),
            selection.balance,
        );
    }
    Ok(())
}

fn render_table(entries: &[Entry]) -> String {
    let mut table = Table::new(vec![
        Column::new("ID"),
        Column::new("DATE"),
        Column::new("TYPE"),
        Column::new("START"),
        Column::new("END"),
        Column::new("HOURS"),
        Column::wrapped("NOTE", NOTE_WIDTH),
    ]);

    for e in entries {
        table.add_row(vec![
            e.id.short().to_string(),
            e.date_str(),
            e.category.label().to_string(),
            e.span.map(|s| s.start_str()).unwrap_or_else(|| "--:--".into()),
            e.span.map(|s| s.end_str()).unwrap_or_else(|| "--:--".into()),
            e.hours.signed(),
            e.note.clone(),
        ]);
    }

    table.render()
}
