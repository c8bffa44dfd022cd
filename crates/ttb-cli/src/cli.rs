//! CLI argument definitions for the timetable builder.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use ttb_cli::config::Overrides;

#[derive(Parser)]
#[command(
    name = "timetable-builder",
    version,
    about = "Timetable Builder - Edit faculty workloads and generate timetables",
    long_about = "Edit faculty members, their subjects and holiday preferences, then send\n\
                  the configuration to the timetable generation service.\n\n\
                  Commands are read one per line, from a script or interactively."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Settings file (default: settings.toml in the platform config folder).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub header: HeaderArgs,

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
}

/// Values that override the settings file.
#[derive(Args, Clone, Default)]
pub struct HeaderArgs {
    /// Generation service endpoint.
    #[arg(long = "endpoint", value_name = "URL", global = true)]
    pub endpoint: Option<String>,

    /// University name printed on the timetables.
    #[arg(long = "university", global = true)]
    pub university: Option<String>,

    /// Department name printed on the timetables.
    #[arg(long = "department", global = true)]
    pub department: Option<String>,

    /// Academic year printed on the timetables.
    #[arg(long = "academic", global = true)]
    pub academic: Option<String>,
}

impl From<HeaderArgs> for Overrides {
    fn from(args: HeaderArgs) -> Self {
        Self {
            endpoint: args.endpoint,
            university: args.university,
            department: args.department,
            academic: args.academic,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Edit interactively, reading commands from stdin.
    Edit(EditArgs),

    /// Replay a command script, print the result and validate it.
    Run(RunArgs),

    /// Print the effective settings.
    Config,
}

#[derive(Parser)]
pub struct EditArgs {
    /// Script to replay before reading from stdin.
    #[arg(long = "script", value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Open the generated timetable in the browser after `submit`.
    #[arg(long = "open")]
    pub open: bool,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Command script to replay.
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Submit to the generation service after validating.
    #[arg(long = "submit")]
    pub submit: bool,

    /// Open the generated timetable in the browser. Only used with --submit.
    #[arg(long = "open")]
    pub open: bool,
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
