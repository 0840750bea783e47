//! CLI argument definitions for the audience audit tool.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use audit_model::{AudiencePreset, GenderTarget};

#[derive(Parser)]
#[command(
    name = "audience-audit",
    version,
    about = "Audience Audit - Check how well a dataset matches your ad target audience",
    long_about = "Audit a CSV of audience records against a target demographic.\n\n\
                  Detects demographic columns, breaks the dataset down by them and\n\
                  scores how many records fall inside the target gender and age range."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Configuration file (default: the platform config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

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

    /// Include cell values in trace logs (they are redacted otherwise).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score a CSV dataset against a target audience.
    Analyze(AnalyzeArgs),

    /// Show which columns are detected as demographic parameters.
    Detect(DetectArgs),

    /// Check ad copy for biased, personal or harmful content.
    Content(ContentArgs),

    /// List the column detection rules.
    Parameters,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// CSV file with one audience record per line.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Target gender.
    #[arg(long = "gender", value_enum)]
    pub gender: Option<GenderArg>,

    /// Lowest target age (inclusive).
    #[arg(long = "age-min", value_name = "AGE", allow_negative_numbers = true)]
    pub age_min: Option<i64>,

    /// Highest target age (inclusive).
    #[arg(long = "age-max", value_name = "AGE", allow_negative_numbers = true)]
    pub age_max: Option<i64>,

    /// Age preset; replaces --age-min and --age-max.
    #[arg(long = "audience", value_enum)]
    pub audience: Option<AudienceArg>,

    /// How to print the result.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Also write the report to this file (JSON with --format json, Markdown otherwise).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Number of values kept for long distributions.
    #[arg(long = "top", value_name = "N")]
    pub top: Option<usize>,
}

#[derive(Parser)]
pub struct DetectArgs {
    /// CSV file whose header is inspected.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Print the detection result as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
#[command(group(ArgGroup::new("input").required(true).args(["text", "image"])))]
pub struct ContentArgs {
    /// Ad copy to check.
    #[arg(long = "text", value_name = "TEXT")]
    pub text: Option<String>,

    /// Ad image to check.
    #[arg(long = "image", value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// Print findings as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GenderArg {
    Male,
    Female,
    Both,
}

impl From<GenderArg> for GenderTarget {
    fn from(value: GenderArg) -> Self {
        match value {
            GenderArg::Male => Self::Male,
            GenderArg::Female => Self::Female,
            GenderArg::Both => Self::Both,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AudienceArg {
    /// Ages 0-17.
    Kids,
    /// Ages 18-64.
    Adults,
    /// Ages 65-100.
    Seniors,
}

impl From<AudienceArg> for AudiencePreset {
    fn from(value: AudienceArg) -> Self {
        match value {
            AudienceArg::Kids => Self::Kids,
            AudienceArg::Adults => Self::Adults,
            AudienceArg::Seniors => Self::Seniors,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
    Markdown,
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
