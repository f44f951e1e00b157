use super::build_filter;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::open_store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filter,
        force,
    } = cmd
    {
        let filter = build_filter(filter)?;
        let store = open_store(cfg)?;
        ExportLogic::export(store.as_ref(), *format, file, &filter, *force)?;
    }
    Ok(())
}
