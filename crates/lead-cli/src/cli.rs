//! CLI argument definitions for lead intake.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use lead_model::ValidationStatus;

#[derive(Parser)]
#[command(
    name = "lead-intake",
    version,
    about = "Lead intake - Parse, normalize and validate lead CSV files",
    long_about = "Turn a lead CSV export into normalized, classified leads.\n\n\
                  Headers are matched to canonical fields regardless of case and\n\
                  punctuation. Each row is classified as valid, warning or invalid."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow lead values (names, emails, country codes) in log output.
    ///
    /// Values are replaced with [REDACTED] unless this flag is given.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse and classify a lead CSV file.
    Check(CheckArgs),

    /// Classify a lead CSV file and import it into an in-memory store.
    ///
    /// Runs the full bulk-import rules (incomplete leads and known names are
    /// skipped) without touching any external system.
    Import(ImportArgs),

    /// List the ISO 3166-1 country codes accepted in the countryCode column.
    Countries(CountriesArgs),
}

/// CSV dialect shared by commands that read a file.
#[derive(Args)]
pub struct DialectArgs {
    /// Field delimiter character.
    #[arg(long = "delimiter", value_name = "CHAR", default_value_t = ',')]
    pub delimiter: char,

    /// Quote character.
    #[arg(long = "quote", value_name = "CHAR", default_value_t = '"')]
    pub quote: char,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Path to the lead CSV file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub dialect: DialectArgs,

    /// Output format for the classified leads.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Only show leads with this status.
    #[arg(long = "only", value_enum)]
    pub only: Option<StatusArg>,

    /// Exit successfully even when invalid rows are found.
    #[arg(long = "allow-invalid")]
    pub allow_invalid: bool,
}

#[derive(Args)]
pub struct ImportArgs {
    /// Path to the lead CSV file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub dialect: DialectArgs,

    /// Print the import report as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct CountriesArgs {
    /// Filter by name fragment or exact alpha-2/alpha-3 code.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
    Csv,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Valid,
    Warning,
    Invalid,
}

impl From<StatusArg> for ValidationStatus {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Valid => ValidationStatus::Valid,
            StatusArg::Warning => ValidationStatus::Warning,
            StatusArg::Invalid => ValidationStatus::Invalid,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
