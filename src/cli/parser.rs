use crate::config::Backend;
use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rOvertime
#[derive(Parser)]
#[command(
    name = "rovertime",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple overtime tracker: record overtime and compensatory leave, keep a running hour balance",
    long_about = None
)]
pub struct Cli {
    /// Override the store location (CSV file, or workbook directory with --backend sheet)
    #[arg(global = true, long = "store", value_name = "PATH")]
    pub store: Option<String>,

    /// Override the storage backend
    #[arg(global = true, long = "backend", value_enum)]
    pub backend: Option<Backend>,

    /// Override the spreadsheet credential file (sheet backend)
    #[arg(global = true, long = "credentials", value_name = "FILE")]
    pub credentials: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Year / month / type filters shared by list, balance and export.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Only entries of this year (YYYY)
    #[arg(long, short = 'y')]
    pub year: Option<String>,

    /// Only entries of this month (1-12 or month name)
    #[arg(long, short = 'm')]
    pub month: Option<String>,

    /// Only entries of this type (overtime | recup)
    #[arg(long = "type", short = 't')]
    pub category: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty store
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the audit log of changes
    Log {
        #[arg(long = "print", help = "Print the audit log")]
        print: bool,
    },

    /// Register a new overtime or compensatory leave session
    Add {
        /// Date of the session (YYYY-MM-DD, "today" or "yesterday")
        date: String,

        /// Start time (HH:MM)
        #[arg(long = "start", visible_alias = "in")]
        start: String,

        /// End time (HH:MM); earlier than start means the next day
        #[arg(long = "end", visible_alias = "out")]
        end: String,

        /// Entry type: overtime | recup
        #[arg(long = "type", short = 't', default_value = "overtime")]
        category: String,

        /// Free-text note
        #[arg(long = "note", short = 'n', default_value = "")]
        note: String,
    },

    /// List entries, newest first, with the balance of the selection
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Replace the fields of an existing entry (hours are recomputed)
    Edit {
        /// Entry id (or a unique prefix of at least 4 characters)
        id: String,

        #[arg(long = "date")]
        date: Option<String>,

        #[arg(long = "start", visible_alias = "in")]
        start: Option<String>,

        #[arg(long = "end", visible_alias = "out")]
        end: Option<String>,

        #[arg(long = "type", short = 't')]
        category: Option<String>,

        #[arg(long = "note", short = 'n')]
        note: Option<String>,
    },

    /// Delete an entry by id
    Del {
        /// Entry id (or a unique prefix of at least 4 characters)
        id: String,

        /// Do not ask for confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show the running balance (overall, and for a selection when filtered)
    Balance {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Export entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the store
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        /// Overwrite an existing backup without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
