use crate::parser::assembler::MAX_DEFAULT_DURATION_MINUTES;
use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Kalendar - turn a sentence into a calendar event
#[derive(Debug, Parser)]
#[command(name = "kalendar")]
#[command(about = "Turn a natural-language sentence into a calendar event", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse a sentence into an event
    Parse(ParseArgs),

    /// View configuration
    Config {
        #[command(subcommand)]
        action: ConfigActions,
    },

    /// List the tag vocabulary
    Tags,
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// The sentence, quoted or as separate words
    #[arg(required = true, num_args = 1..)]
    pub sentence: Vec<String>,

    /// Comma separated tags, one per word, instead of calling a classifier
    #[arg(long)]
    pub labels: Option<String>,

    /// Reference instant (YYYY-MM-DDTHH:MM[:SS]); defaults to the local time
    #[arg(long, value_parser = parse_reference)]
    pub now: Option<NaiveDateTime>,

    /// Minutes added to the start when no end is given; overrides the config
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..=MAX_DEFAULT_DURATION_MINUTES))]
    pub default_duration: Option<i64>,

    /// Leave the end empty when the sentence has none
    #[arg(long, conflicts_with = "default_duration")]
    pub no_default_duration: bool,
}

impl ParseArgs {
    pub fn sentence(&self) -> String {
        self.sentence.join(" ")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigActions {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
}

/// Parse a reference instant given on the command line
pub fn parse_reference(value: &str) -> Result<NaiveDateTime, String> {
    const FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .ok_or_else(|| format!("Invalid reference time '{}', expected YYYY-MM-DDTHH:MM", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_command_line() {
        let cli = Cli::try_parse_from([
            "kalendar",
            "parse",
            "Йога",
            "утре",
            "--labels",
            "B-TITLE,B-WHEN_DAY",
            "--now",
            "2026-10-18T12:00",
        ])
        .unwrap();
        let Commands::Parse(args) = cli.command else { panic!("expected parse command") };
        assert_eq!(args.sentence(), "Йога утре");
        assert_eq!(args.labels.as_deref(), Some("B-TITLE,B-WHEN_DAY"));
        assert_eq!(
            args.now,
            NaiveDate::from_ymd_opt(2026, 10, 18).unwrap().and_hms_opt(12, 0, 0)
        );
    }

    #[test]
    fn test_parse_reference_formats() {
        assert!(parse_reference("2026-10-18T12:00:30").is_ok());
        assert!(parse_reference("2026-10-18 12:00").is_ok());
        assert!(parse_reference("18.10.2026").is_err());
    }

    #[test]
    fn test_duration_flags_conflict() {
        let result = Cli::try_parse_from([
            "kalendar",
            "parse",
            "x",
            "--default-duration",
            "30",
            "--no-default-duration",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_duration_must_be_in_range() {
        for minutes in ["-30", "0", "99999999999"] {
            let result = Cli::try_parse_from(["kalendar", "parse", "x", "--default-duration", minutes]);
            assert!(result.is_err(), "{} should be rejected", minutes);
        }
        let cli = Cli::try_parse_from(["kalendar", "parse", "x", "--default-duration", "90"]).unwrap();
        let Commands::Parse(args) = cli.command else { panic!("expected parse command") };
        assert_eq!(args.default_duration, Some(90));
    }
}
