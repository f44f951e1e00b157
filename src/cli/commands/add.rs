use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::calculator::balance::calculate_balance;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::store::audit::ttlog;
use crate::store::open_store;
use crate::ui::messages::{balance, success};
use crate::utils::date;

/// Register a new entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        category,
        note,
    } = cmd
    {
        //
        // 1. Parse date and category
        //
        let d =
            date::parse_user_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let category = Category::parse(category)?;

        //
        // 2. Open store and append
        //
        let mut store = open_store(cfg)?;
        let entry = AddLogic::apply(store.as_mut(), d, category, start, end, note)?;

        success(format!(
            "Added {} {} h on {} ({} → {}) [id {}]",
            entry.category.label(),
            entry.hours.signed(),
            entry.date_str(),
            entry.start_str(),
            entry.end_str(),
            entry.id.short()
        ));

        ttlog(
            cfg,
            "add",
            entry.id.as_str(),
            &format!("{} | {} h", entry.label(), entry.hours.signed()),
        );

        //
        // 3. Running balance
        //
        balance("Balance", calculate_balance(&store.list()?));
    }

    Ok(())
}
