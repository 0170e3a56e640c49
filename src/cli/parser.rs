use crate::cli::args::{BreakArgs, RoundingArgs};
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorktime
/// CLI application to round work times and compute break-compliant durations
#[derive(Parser)]
#[command(
    name = "rworktime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Round arrival/departure times and compute payable work time with mandatory breaks",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Print debug diagnostics on stderr
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init {
        #[arg(long = "force", help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Inspect or upgrade the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,
    },

    /// Round a clock time (HH:MM or YYYY-MM-DD HH:MM[:SS])
    Round {
        time: String,

        #[command(flatten)]
        rounding: RoundingArgs,
    },

    /// Round a duration (3600, HH:MM, HH:MM:SS, 1h30m, 90m, 45s)
    RoundDuration {
        duration: String,

        #[command(flatten)]
        rounding: RoundingArgs,
    },

    /// Round an arrival/departure pair
    Span {
        arrival: String,
        departure: String,

        #[command(flatten)]
        rounding: RoundingArgs,

        #[arg(
            long = "same-direction",
            help = "Round both ends in the same direction instead of the user rounding"
        )]
        same_direction: bool,
    },

    /// Compute payable work time for one arrival/departure pair
    Compute {
        arrival: String,
        departure: String,

        #[arg(long = "break", value_name = "DURATION", help = "Break actually taken")]
        break_time: Option<String>,

        #[command(flatten)]
        breaks: BreakArgs,

        #[command(flatten)]
        rounding: RoundingArgs,

        #[arg(long = "no-rounding", help = "Skip time rounding")]
        no_rounding: bool,
    },

    /// List the regional working-time presets
    Presets {
        #[arg(long = "region", help = "Show a single region (usa, canada, uk, germany, eu, australia, other)")]
        region: Option<String>,
    },

    /// Process a CSV of entries (date,arrival,departure,break) and export the results
    Batch {
        #[arg(long, value_name = "FILE")]
        input: String,

        #[arg(long, value_name = "FILE")]
        output: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, short = 'f')]
        force: bool,

        #[arg(long = "daily", help = "Export per-day totals instead of single entries")]
        daily: bool,

        #[command(flatten)]
        breaks: BreakArgs,

        #[command(flatten)]
        rounding: RoundingArgs,

        #[arg(long = "no-rounding", help = "Skip time rounding")]
        no_rounding: bool,
    },
}
