//! CLI argument definitions for the weather cleaner.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use weather_model::{CleanOptions, MissingPolicy};

#[derive(Parser)]
#[command(
    name = "weather-cli",
    version,
    about = "Clean the Seattle weather dataset",
    long_about = "Clean the Seattle weather dataset.\n\n\
                  Validates the column schema, coerces types, resolves missing values,\n\
                  removes duplicate rows and writes seattle_weather_processed.csv\n\
                  with a label-encoded weather column."
)]
pub struct Cli {
    #[command(flatten)]
    pub clean: CleanArgs,

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

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct CleanArgs {
    /// Source CSV file.
    #[arg(
        long = "input",
        value_name = "PATH",
        default_value = "Weather_datasets_raw/seattle-weather.csv"
    )]
    pub input: PathBuf,

    /// Directory the cleaned file is written to (created if absent).
    #[arg(
        long = "output_dir",
        visible_alias = "output-dir",
        value_name = "DIR",
        default_value = "weather_preprocessing"
    )]
    pub output_dir: PathBuf,

    /// How missing measurements are resolved.
    #[arg(long = "missing", value_enum, default_value = "fill-mean")]
    pub missing: MissingPolicyArg,

    /// Append z-score standardized copies of the measurement columns.
    #[arg(long = "standardize")]
    pub standardize: bool,
}

impl CleanArgs {
    pub fn options(&self) -> CleanOptions {
        let missing = match self.missing {
            MissingPolicyArg::FillMean => MissingPolicy::FillMean,
            MissingPolicyArg::Drop => MissingPolicy::Drop,
        };
        CleanOptions::new()
            .with_missing_policy(missing)
            .with_standardize(self.standardize)
    }
}

/// CLI missing value policy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum MissingPolicyArg {
    /// Fill missing measurements with the column mean.
    FillMean,
    /// Drop rows with any missing value.
    Drop,
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

    #[test]
    fn defaults_match_source_layout() {
        let cli = Cli::try_parse_from(["weather-cli"]).unwrap();

        assert_eq!(
            cli.clean.input,
            PathBuf::from("Weather_datasets_raw/seattle-weather.csv")
        );
        assert_eq!(cli.clean.output_dir, PathBuf::from("weather_preprocessing"));
        assert_eq!(cli.clean.options(), CleanOptions::default());
    }

    #[test]
    fn output_dir_accepts_both_spellings() {
        let underscore =
            Cli::try_parse_from(["weather-cli", "--output_dir", "out"]).unwrap();
        let dash = Cli::try_parse_from(["weather-cli", "--output-dir", "out"]).unwrap();

        assert_eq!(underscore.clean.output_dir, PathBuf::from("out"));
        assert_eq!(dash.clean.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn cleaning_flags_build_options() {
        let cli = Cli::try_parse_from([
            "weather-cli",
            "--input",
            "raw.csv",
            "--missing",
            "drop",
            "--standardize",
        ])
        .unwrap();

        let options = cli.clean.options();
        assert_eq!(options.missing, MissingPolicy::Drop);
        assert!(options.standardize);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(Cli::try_parse_from(["weather-cli", "--missing", "zero"]).is_err());
    }
}
