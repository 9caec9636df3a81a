//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use evreg_export::ExportFormat;

#[derive(Parser)]
#[command(
    name = "evreg",
    version,
    about = "Event registration rules and roster export",
    long_about = "Check team rules for an event, submit registrations to a JSON store \
                  and export event rosters.\n\n\
                  Rosters are written as a two-sheet workbook (registrations and summary) \
                  or as CSV."
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

    /// Log output format (pretty for humans, json for machines).
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

    /// Include participant names, emails and phone numbers in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Settings file (default: settings.toml in the user config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the team policy and form fields for an event title.
    Policy(PolicyArgs),

    /// Print a registration draft reconciled with an event's team policy.
    Draft(DraftArgs),

    /// Validate a draft and submit it to the store.
    Register(RegisterArgs),

    /// Export all registrations of an event.
    Export(ExportArgs),

    /// Show registration statistics for an event.
    Stats(StatsArgs),

    /// Print the effective settings as TOML.
    Settings,
}

#[derive(Args)]
pub struct PolicyArgs {
    /// Event title, matched case-insensitively against known event families.
    #[arg(value_name = "EVENT_TITLE")]
    pub event_title: String,
}

#[derive(Args)]
pub struct DraftArgs {
    /// Event title the draft is for.
    #[arg(long = "event-title", value_name = "TITLE")]
    pub event_title: String,

    /// Start from an existing draft (JSON) instead of a blank one.
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Register as a team, when the event lets participants choose.
    #[arg(long = "team", conflicts_with = "individual")]
    pub team: bool,

    /// Register individually, when the event lets participants choose.
    #[arg(long = "individual")]
    pub individual: bool,

    /// Requested team size including the leader.
    #[arg(long = "size", value_name = "N")]
    pub size: Option<u32>,
}

#[derive(Args)]
pub struct StoreArgs {
    /// Registration store (JSON file).
    #[arg(long = "store", value_name = "FILE")]
    pub store: PathBuf,

    /// Event id.
    #[arg(long = "event", value_name = "ID")]
    pub event: String,
}

#[derive(Args)]
pub struct RegisterArgs {
    #[command(flatten)]
    pub target: StoreArgs,

    /// Registration draft (JSON).
    #[arg(long = "draft", value_name = "FILE")]
    pub draft: PathBuf,

    /// Reconcile the draft with the event's team policy before validating.
    #[arg(long = "reconcile")]
    pub reconcile: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub target: StoreArgs,

    /// Output directory (default: settings, then the current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output format (default: settings, then xlsx).
    #[arg(long = "format", value_enum)]
    pub format: Option<ExportFormatArg>,
}

#[derive(Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub target: StoreArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Xlsx,
    Csv,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(value: ExportFormatArg) -> Self {
        match value {
            ExportFormatArg::Xlsx => Self::Xlsx,
            ExportFormatArg::Csv => Self::Csv,
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
