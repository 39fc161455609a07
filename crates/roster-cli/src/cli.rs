//! CLI argument definitions for the roster editor.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use roster_core::FilterPolicy;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Roster editor - search, page, select, edit and delete people records",
    long_about = "Load a roster of people records once and work on it in memory.\n\n\
                  Edits and deletions are never written back to the source."
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

    /// Allow names, emails and roles to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Configuration file (default: ./roster.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load the roster and print one page.
    Show(ShowArgs),

    /// Load the roster and run a script of operator commands against it.
    Session(SessionArgs),
}

/// Options shared by every command that loads a roster.
#[derive(Args)]
pub struct RosterArgs {
    /// Roster source: an http(s) URL or a path to a JSON file.
    #[arg(long = "source", value_name = "URL|PATH")]
    pub source: Option<String>,

    /// What happens to the active search when an edit is saved.
    #[arg(long = "filter-policy", value_enum)]
    pub filter_policy: Option<FilterPolicyArg>,

    /// Print page snapshots as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ShowArgs {
    #[command(flatten)]
    pub roster: RosterArgs,

    /// Search text applied before paging.
    #[arg(long = "query", value_name = "TEXT")]
    pub query: Option<String>,

    /// Page to print (1-based).
    #[arg(long = "page", value_name = "N", default_value_t = 1)]
    pub page: usize,
}

#[derive(Parser)]
pub struct SessionArgs {
    #[command(flatten)]
    pub roster: RosterArgs,

    /// Script file with one command per line (reads stdin when omitted or "-").
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Stop at the first line that fails to parse.
    #[arg(long = "strict")]
    pub strict: bool,
}

/// CLI filter policy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum FilterPolicyArg {
    /// Saving an edit clears the active search.
    ClearOnEdit,
    /// Saving an edit re-applies the active search.
    Reapply,
}

impl From<FilterPolicyArg> for FilterPolicy {
    fn from(arg: FilterPolicyArg) -> Self {
        match arg {
            FilterPolicyArg::ClearOnEdit => FilterPolicy::ClearOnEdit,
            FilterPolicyArg::Reapply => FilterPolicy::Reapply,
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
