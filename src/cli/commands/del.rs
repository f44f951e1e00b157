use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::store::audit::ttlog;
use crate::store::open_store;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, force } = cmd {
        let mut store = open_store(cfg)?;
        let target = DeleteLogic::resolve(store.as_ref(), id)?;

        //
        // Confirmation prompt
        //
        let prompt = format!(
            "Delete entry {} ({} | {} h)? This action is irreversible.",
            target.id.short(),
            target.label(),
            target.hours.signed()
        );
        if !*force && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = DeleteLogic::apply(store.as_mut(), &target)?;
        success(format!(
            "Entry {} ({}) has been deleted.",
            removed.id.short(),
            removed.label()
        ));

        ttlog(cfg, "del", removed.id.as_str(), &removed.label());
    }

    Ok(())
}
