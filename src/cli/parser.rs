use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for qtracker
/// CLI application to track customer arrival/start/end times
#[derive(Parser)]
#[command(
    name = "qtracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track customer arrival, service start and end times, with live durations and spreadsheet/MATLAB export",
    long_about = None
)]
pub struct Cli {
    /// Override store file path (useful for tests or a custom location)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty entry store
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Log a new arrival (creates a waiting entry stamped now)
    Arrive,

    /// Mark service start for an entry
    Start {
        /// Entry id (see `list`); the oldest waiting entry when omitted
        id: Option<i64>,
    },

    /// Mark service end for an entry
    Finish {
        /// Entry id (see `list`); the oldest in-service entry when omitted
        id: Option<i64>,
    },

    /// Delete a single entry by id
    Del {
        id: i64,
    },

    /// Delete all entries and remove the store file
    Reset,

    /// List entries with live wait/order/total durations
    List {
        #[arg(long = "watch", help = "Re-render every second until interrupted")]
        watch: bool,
    },

    /// Export entries to a spreadsheet or analysis format
    Export {
        #[arg(long, value_enum, help = "Output format (config default when omitted)")]
        format: Option<ExportFormat>,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (defaults to a dated name in the current directory)"
        )]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import entries from a CSV spreadsheet artifact
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Replace the current collection instead of appending")]
        replace: bool,
    },

    /// Create a backup copy of the entry store
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
