use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rbmitrack
/// CLI application to track BMI readings with SQLite
#[derive(Parser)]
#[command(
    name = "rbmitrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple BMI tracking CLI: compute, store and follow your BMI using SQLite",
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

    /// Manage the database (integrity checks, stats, etc.)
    Db {
        #[arg(long = "migrate", help = "Re-run the schema bootstrap")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Compute the BMI for a reading and save it
    Add {
        /// Weight in kilograms (positive)
        weight: f64,

        /// Height in centimeters (positive); falls back to
        /// `default_height_cm` from the configuration when omitted
        height: Option<f64>,
    },

    /// List saved readings
    List {
        #[arg(
            long,
            short,
            help = "Filter by year (YYYY), month (YYYY-MM), day (YYYY-MM-DD) or a start:end range"
        )]
        period: Option<String>,
    },

    /// Show the BMI trend over time
    Trend,

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export the BMI trend series
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
