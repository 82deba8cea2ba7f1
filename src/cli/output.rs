//! Output formatting for CLI commands.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SplayDictArgs};
use crate::error::Result;
use crate::spelling::{CheckOutcome, Suggestion};

/// Result structure for a suggestion listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionResults {
    pub query: String,
    pub max_distance: usize,
    pub suggestions: Vec<Suggestion>,
}

/// One row of a word listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub count: u32,
}

/// Result structure for the word listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordListing {
    pub words: Vec<WordEntry>,
    #[serde(skip)]
    pub show_counts: bool,
}

/// Dictionary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub path: String,
    pub lines_read: usize,
    pub lines_skipped: usize,
    pub words_inserted: usize,
    pub distinct_words: usize,
    pub total_occurrences: u64,
    pub tree_height: usize,
    pub load_duration_ms: u64,
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &SplayDictArgs) -> Result<()>
where
    T: Serialize + fmt::Display,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: fmt::Display>(message: &str, result: &T, args: &SplayDictArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let rendered = result.to_string();
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SplayDictArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOutcome::Correct { word, frequency } => {
                write!(f, "'{word}' is spelled correctly ({frequency} occurrences).")
            }
            CheckOutcome::Misspelled { word, suggestions } if suggestions.is_empty() => {
                write!(f, "'{word}' not found. No suggestions available.")
            }
            CheckOutcome::Misspelled { word, suggestions } => {
                write!(f, "'{word}' not found. Do you mean:")?;
                for suggestion in suggestions {
                    write!(f, "\n  {}", suggestion.word)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for SuggestionResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.suggestions.is_empty() {
            return write!(
                f,
                "No words within distance {} of '{}'.",
                self.max_distance, self.query
            );
        }

        let width = self
            .suggestions
            .iter()
            .map(|s| s.word.chars().count())
            .max()
            .unwrap_or(0)
            .max("WORD".len());

        write!(f, "{:<width$}  DISTANCE  COUNT", "WORD")?;
        for suggestion in &self.suggestions {
            write!(
                f,
                "\n{:<width$}  {:>8}  {:>5}",
                suggestion.word, suggestion.distance, suggestion.frequency
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for WordListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.words.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            if self.show_counts {
                write!(f, "{}\t{}", entry.word, entry.count)?;
            } else {
                write!(f, "{}", entry.word)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for DictionaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dictionary Statistics:")?;
        writeln!(f, "═════════════════════")?;
        writeln!(f, "Word list: {}", self.path)?;
        writeln!(f, "Lines read: {}", self.lines_read)?;
        writeln!(f, "Lines skipped: {}", self.lines_skipped)?;
        writeln!(f, "Words inserted: {}", self.words_inserted)?;
        writeln!(f, "Distinct words: {}", self.distinct_words)?;
        writeln!(f, "Total occurrences: {}", self.total_occurrences)?;
        writeln!(f, "Tree height: {}", self.tree_height)?;
        write!(f, "Load time: {} ms", self.load_duration_ms)
    }
}
