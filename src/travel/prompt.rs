//! Line-oriented prompts validated by regular expressions.

use std::fmt::Display;
use std::io::{BufRead, Write};

use regex::Regex;

use crate::error::{Result, SplayDictError};

const MONTHS: &str =
    "january|february|march|april|may|june|july|august|september|october|november|december";

/// Compiled patterns that prompt answers must match in full.
#[derive(Debug, Clone)]
pub struct PromptPatterns {
    /// Letters and whitespace only.
    pub city: Regex,
    /// Two-digit day, full month name in any case, four-digit year.
    pub date: Regex,
    /// A single digit from 1 to 9.
    pub count: Regex,
}

impl PromptPatterns {
    pub fn new() -> Result<Self> {
        Ok(PromptPatterns {
            city: compile(r"^[a-zA-Z\s]+$")?,
            date: compile(&format!(r"(?i)^\d{{2}}\s+({MONTHS})\s+\d{{4}}$"))?,
            count: compile(r"^[1-9]$")?,
        })
    }

    /// Replace the city pattern, e.g. to admit hyphenated names.
    pub fn with_city_pattern(mut self, pattern: &str) -> Result<Self> {
        self.city = compile(pattern)?;
        Ok(self)
    }
}

impl Default for PromptPatterns {
    fn default() -> Self {
        Self::new().expect("Built-in prompt patterns should be valid")
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| SplayDictError::invalid_input(format!("Invalid regex pattern: {e}")))
}

/// Asks questions on `output` and reads answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Print one line.
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Repeat `prompt` until the trimmed answer matches `pattern`.
    ///
    /// Fails with [`SplayDictError::InputClosed`] when the input ends first.
    pub fn ask(&mut self, prompt: &str, pattern: &Regex) -> Result<String> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(SplayDictError::InputClosed);
            }

            let answer = line.trim();
            if pattern.is_match(answer) {
                return Ok(answer.to_owned());
            }

            log::debug!("Rejected answer {answer:?} for pattern {}", pattern.as_str());
            self.say("Invalid input. Please try again.")?;
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
