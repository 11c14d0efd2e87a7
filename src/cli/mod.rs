//! CLI argument parsing for oralgrade
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod format;
pub mod parse;

use clap::{Parser, Subcommand};

use oralgrade_core::format::OutputFormat;
pub use args::CalculateArgs;
use parse::parse_format;

/// Oralgrade - score oral exam protocols and suggest a grade
#[derive(Parser, Debug)]
#[command(name = "oralgrade")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true, env = "ORALGRADE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate points and a grade
    #[command(alias = oralgrade_core::command::COMMAND_ID)]
    Calculate(CalculateArgs),

    /// Map a share of achieved points onto the grade scale
    Grade {
        /// Fraction (0.75) or percentage (75%)
        #[arg(allow_hyphen_values = true)]
        percent: String,
    },

    /// Show the grading scale
    Scale,
}
