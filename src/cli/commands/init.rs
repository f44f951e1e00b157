use crate::cli::parser::Cli;
use crate::config::{Backend, Config};
use crate::errors::AppResult;
use crate::store::audit::ttlog;
use crate::store::csv_table::CsvTable;
use crate::store::layout::RowLayout;
use crate::store::open_store;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the store of the configured backend (empty CSV with header, or
///    the two workbook tabs); an older CSV layout is upgraded in place
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing rOvertime…");

    let location = cfg.init_all(cli.test)?;

    if cfg.backend == Backend::File {
        CsvTable::new(&location, RowLayout::File.header()).ensure_exists()?;
    }
    let store = open_store(cfg)?;
    let count = store.list()?.len();

    println!("🗄️  Store      : {}", store.location());
    println!("📄 Entries    : {}", count);

    ttlog(
        cfg,
        "init",
        &location.to_string_lossy(),
        &format!("Store initialized ({} entries)", count),
    );

    println!("🎉 rOvertime initialization completed!");
    Ok(())
}
