//! CLI argument definitions for widebook.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "widebook",
    version,
    about = "Combine the sheets of an xlsx workbook into one wide table",
    long_about = "Combine the sheets of an xlsx workbook into one wide table.\n\n\
                  Each sheet becomes one output row; each Nerve record crossed\n\
                  with each metric column becomes a {nerve}_{metric} output\n\
                  column. Output is CSV by default, or xlsx when the output\n\
                  path ends in .xlsx (or --xlsx is given)."
)]
pub struct Cli {
    /// Path to the input xlsx workbook.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output path (default: combined_output.csv).
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Write workbook output regardless of the output path suffix.
    #[arg(long = "xlsx")]
    pub xlsx: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
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
