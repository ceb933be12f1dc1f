//! CLI argument definitions for the lead quality analyzer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "leadqa",
    version,
    about = "Lead quality analyzer - reconcile call returns against a contact base",
    long_about = "Reconcile a third-party returns file against a reference contact base.\n\n\
                  Records are matched solely by telephone number, across national,\n\
                  international, spaced and prefixed formats."
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

    /// Allow raw phone numbers in trace logs (redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reconcile a returns file against a reference contact base.
    Analyze(AnalyzeArgs),

    /// Write the returns template handed to clients.
    Template(TemplateArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Reference contact base (CSV).
    #[arg(value_name = "REFERENCE")]
    pub reference: PathBuf,

    /// Returns file to reconcile (CSV).
    #[arg(value_name = "RETURNS")]
    pub returns: PathBuf,

    /// Directory for exported report files (default: rapport-<date>).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print the report as JSON on stdout instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    /// Skip writing report CSV files.
    #[arg(long = "no-export")]
    pub no_export: bool,
}

#[derive(Parser)]
pub struct TemplateArgs {
    /// Output path for the template (default: modele-retours.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
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
