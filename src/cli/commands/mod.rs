pub mod add;
pub mod backup;
pub mod balance;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;

use crate::cli::parser::FilterArgs;
use crate::errors::AppResult;
use crate::models::filter::EntryFilter;

/// Turn the shared filter flags into an [`EntryFilter`].
pub(crate) fn build_filter(args: &FilterArgs) -> AppResult<EntryFilter> {
    EntryFilter::parse(
        args.year.as_deref(),
        args.month.as_deref(),
        args.category.as_deref(),
    )
}
