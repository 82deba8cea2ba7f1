//! Command line argument parsing for the splaydict CLI using clap.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// splaydict - a word dictionary with edit-distance suggestions
#[derive(Parser, Debug, Clone)]
#[command(name = "splaydict")]
#[command(about = "Look up words in a splay-tree dictionary and suggest corrections")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SplayDictArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Word list with one word per line
    #[arg(short, long, value_name = "WORD_LIST", env = "SPLAYDICT_DICTIONARY")]
    pub dictionary: PathBuf,

    /// Dictionary configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SPLAYDICT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Keep word case instead of folding to lowercase
    #[arg(long)]
    pub case_sensitive: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SplayDictArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check whether a word is in the dictionary, suggesting corrections if not
    Check(CheckArgs),

    /// List dictionary words close to a word
    Suggest(SuggestArgs),

    /// List every dictionary word in order
    List(ListArgs),

    /// Show dictionary statistics
    Stats(StatsArgs),

    /// Interactively collect a travel search, correcting the city name
    Plan(PlanArgs),
}

/// Arguments for checking a word
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum edit distance for suggestions
    #[arg(long)]
    pub max_distance: Option<usize>,
}

/// Arguments for listing suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Word to find neighbours for
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum edit distance
    #[arg(long)]
    pub max_distance: Option<usize>,

    /// Order by distance and frequency instead of alphabetically
    #[arg(long)]
    pub ranked: bool,

    /// Maximum number of suggestions
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for listing words
#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    /// Show occurrence counts next to each word
    #[arg(long)]
    pub counts: bool,
}

/// Arguments for statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {}

/// Arguments for the interactive travel session
#[derive(Parser, Debug, Clone)]
pub struct PlanArgs {
    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, value_name = "DATE")]
    pub today: Option<NaiveDate>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check() {
        let args =
            SplayDictArgs::try_parse_from(["splaydict", "-d", "cities.txt", "check", "Paris"])
                .unwrap();

        assert_eq!(args.dictionary, PathBuf::from("cities.txt"));
        assert_eq!(args.verbosity(), 1);
        match args.command {
            Command::Check(check) => {
                assert_eq!(check.word, "Paris");
                assert_eq!(check.max_distance, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_suggest_with_options() {
        let args = SplayDictArgs::try_parse_from([
            "splaydict",
            "--dictionary",
            "cities.txt",
            "suggest",
            "pari",
            "--max-distance",
            "1",
            "--ranked",
            "-l",
            "3",
            "-f",
            "json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        assert_eq!(args.verbosity(), 2);
        match args.command {
            Command::Suggest(suggest) => {
                assert_eq!(suggest.max_distance, Some(1));
                assert!(suggest.ranked);
                assert_eq!(suggest.limit, Some(3));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args =
            SplayDictArgs::try_parse_from(["splaydict", "-d", "w.txt", "-vvv", "-q", "list"])
                .unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_parse_plan_today() {
        let args = SplayDictArgs::try_parse_from([
            "splaydict",
            "-d",
            "w.txt",
            "plan",
            "--today",
            "2027-03-01",
        ])
        .unwrap();

        match args.command {
            Command::Plan(plan) => {
                assert_eq!(plan.today, NaiveDate::from_ymd_opt(2027, 3, 1));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
