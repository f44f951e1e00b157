use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, EditRequest};
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::store::audit::ttlog;
use crate::store::open_store;
use crate::ui::messages::{info, success};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date: date_arg,
        start,
        end,
        category,
        note,
    } = cmd
    {
        let req = EditRequest {
            date: date_arg
                .as_deref()
                .map(|s| date::parse_user_date(s).ok_or_else(|| AppError::InvalidDate(s.into())))
                .transpose()?,
            category: category.as_deref().map(Category::parse).transpose()?,
            start: start.clone(),
            end: end.clone(),
            note: note.clone(),
        };

        let mut store = open_store(cfg)?;
        let (before, after) = EditLogic::apply(store.as_mut(), id, &req)?;

        info(format!("Before: {} | {} h", before.label(), before.hours.signed()));
        success(format!(
            "Updated [id {}]: {} | {} h",
            after.id.short(),
            after.label(),
            after.hours.signed()
        ));

        ttlog(
            cfg,
            "edit",
            after.id.as_str(),
            &format!("{} → {}", before.label(), after.label()),
        );
    }

    Ok(())
}
