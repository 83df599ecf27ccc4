use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTabletimer
/// CLI application to track poker table clocks and seat sessions with SQLite
#[derive(Parser)]
#[command(
    name = "rtabletimer",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple poker room CLI: track table clocks, per-seat time and buy-ins using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Answer yes to every confirmation prompt
    #[arg(global = true, long = "yes", short = 'y')]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List every table with clock state and occupancy
    Tables,

    /// Show the seat board of one table
    Status {
        /// Table id (e.g. T1) or 1-based position
        table: String,
    },

    /// Start or resume the table clock
    Open {
        table: String,

        #[arg(
            long = "at",
            value_name = "TIMESTAMP",
            help = "Use this timestamp instead of now (YYYY-MM-DD HH:MM[:SS])"
        )]
        at: Option<String>,
    },

    /// Pause the table clock (rejected while any seat is seated)
    Pause {
        table: String,

        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,
    },

    /// Stop the clock and export the table's ledger
    Close {
        table: String,

        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,
    },

    /// Write (or clear) the member name on a seat
    Member {
        table: String,

        /// Seat number (1-9)
        seat: u8,

        /// New member name; omit to clear an idle seat
        #[arg(default_value = "")]
        name: String,
    },

    /// Seat the member written on a seat
    Sit {
        table: String,

        /// Seat number (1-9)
        seat: u8,

        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,
    },

    /// Move a seated member to rest
    Rest {
        table: String,

        /// Seat number (1-9)
        seat: u8,

        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,
    },

    /// Vacate a seat and record the closed session
    Leave {
        table: String,

        /// Seat number (1-9)
        seat: u8,

        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,
    },

    /// Add chips to a seat's running buy-in
    Buyin {
        table: String,

        /// Seat number (1-9)
        seat: u8,

        amount: f64,
    },

    /// Seat the members already written on several seats at once
    BatchSit {
        table: String,

        /// Seat numbers (1-9)
        #[arg(required = true)]
        seats: Vec<u8>,

        /// Buy-in added to every selected seat
        #[arg(long = "amount", default_value_t = 0.0)]
        amount: f64,

        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,
    },

    /// Vacate several seats at once (one record per occupied seat)
    BatchLeave {
        table: String,

        /// Seat numbers (1-9)
        #[arg(required = true)]
        seats: Vec<u8>,

        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,
    },

    /// Archive the ledger and return the table to its defaults
    Reset {
        table: String,

        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,
    },

    /// Rename a table
    Rename {
        table: String,

        name: String,
    },

    /// Set the blinds label of a table
    Blinds {
        table: String,

        blinds: String,
    },

    /// Export a table's ledger on demand
    Export {
        table: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,

        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
