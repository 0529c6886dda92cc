//! CLI argument definitions for the season analytics tool.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "eagles-analytics",
    version,
    about = "Eagles Analytics - Aggregate per-game statistics into a season report",
    long_about = "Aggregate per-game football statistics into a season report.\n\n\
                  Reads every CSV file in INPUT_DIR and writes\n\
                  eagles_analytics_report.json to OUTPUT_DIR."
)]
pub struct Cli {
    /// Folder with game statistics CSV files (default: $EAGLES_INPUT_DIR or <project>/input).
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: Option<PathBuf>,

    /// Folder for the season report (default: $EAGLES_OUTPUT_DIR or <project>/output).
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Prefix pretty and compact log lines with timestamps.
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,

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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn directories_are_optional_positionals() {
        let cli = Cli::parse_from(["eagles-analytics"]);
        assert!(cli.input_dir.is_none());
        assert!(cli.output_dir.is_none());

        let cli = Cli::parse_from(["eagles-analytics", "data/in", "data/out", "--log-format", "json"]);
        assert_eq!(cli.input_dir, Some(PathBuf::from("data/in")));
        assert_eq!(cli.output_dir, Some(PathBuf::from("data/out")));
        assert!(matches!(cli.log_format, LogFormatArg::Json));
        assert!(!cli.log_timestamps);

        let cli = Cli::parse_from(["eagles-analytics", "--log-timestamps"]);
        assert!(cli.log_timestamps);
    }
}
