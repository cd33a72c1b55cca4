use crate::core::stamp::StampAction;
use clap::{Parser, Subcommand};

/// Command-line interface definition for timecard
/// CLI application to stamp worker shifts/breaks and report attendance with SQLite
#[derive(Parser)]
#[command(
    name = "timecard",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: stamp shifts and breaks, report worked time using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the worker registry
    Worker {
        #[arg(long = "add", value_name = "NAME", help = "Register a new worker")]
        add: Option<String>,

        #[arg(long = "list", help = "List registered workers")]
        list: bool,

        #[arg(
            long = "search",
            value_name = "TEXT",
            help = "Filter the list by a name substring"
        )]
        search: Option<String>,
    },

    /// Record a shift or break stamp for a worker
    Stamp {
        /// Which transition to record
        #[arg(value_enum)]
        action: StampAction,

        #[arg(long = "worker", help = "Worker id the stamp belongs to")]
        worker: i64,

        #[arg(
            long = "at",
            value_name = "DATETIME",
            help = "Timestamp of the stamp, \"YYYY-MM-DD HH:MM\" (defaults to now)"
        )]
        at: Option<String>,
    },

    /// Show whether a worker is off duty, on shift, or on break
    Status {
        #[arg(long = "worker", help = "Worker id to inspect")]
        worker: i64,

        #[arg(
            long = "at",
            value_name = "DATETIME",
            help = "Evaluate the status at this time instead of now"
        )]
        at: Option<String>,
    },

    /// Per-worker attendance for one date
    Daily {
        /// Date to report (YYYY-MM-DD, defaults to today)
        date: Option<String>,

        #[arg(long = "page", default_value_t = 1, help = "Page number (1-based)")]
        page: i64,

        #[arg(long = "per-page", help = "Rows per page (defaults from config)")]
        per_page: Option<i64>,

        #[arg(long = "json", help = "Print the page as JSON instead of a table")]
        json: bool,
    },

    /// Day-by-day attendance of one worker for a month
    Monthly {
        /// Month to report (YYYY-MM)
        month: String,

        #[arg(long = "worker", help = "Worker id to report")]
        worker: i64,

        #[arg(
            long = "at",
            value_name = "DATE",
            help = "Treat this date as today (bounds the report)"
        )]
        at: Option<String>,

        #[arg(long = "json", help = "Print the rows as JSON instead of a table")]
        json: bool,
    },
}
