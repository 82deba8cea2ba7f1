//! Interactive collection of travel search parameters.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::error::Result;
use crate::spelling::checker::{CheckOutcome, SpellChecker};
use crate::travel::prompt::{PromptPatterns, Prompter};
use crate::travel::request::{TravelRequest, parse_travel_date};

/// Walks a user through city, dates, rooms and adults.
///
/// The city must be a dictionary word; misspellings are answered with the
/// dictionary's suggestions and the question is asked again.
pub struct TravelSession<'a, R, W> {
    checker: &'a mut SpellChecker,
    prompter: Prompter<R, W>,
    patterns: PromptPatterns,
}

impl<'a, R: BufRead, W: Write> TravelSession<'a, R, W> {
    pub fn new(checker: &'a mut SpellChecker, input: R, output: W) -> Self {
        TravelSession {
            checker,
            prompter: Prompter::new(input, output),
            patterns: PromptPatterns::default(),
        }
    }

    pub fn with_patterns(mut self, patterns: PromptPatterns) -> Self {
        self.patterns = patterns;
        self
    }

    /// Ask every question. `today` bounds the earliest arrival date.
    pub fn run(&mut self, today: NaiveDate) -> Result<TravelRequest> {
        let city = self.ask_city()?;

        let from = self.ask_date(
            "Enter from date (dd Month yyyy): ",
            |date| date >= today,
            "Invalid input. From date should be today or a future date.",
        )?;
        let to = self.ask_date(
            "Enter to date (dd Month yyyy): ",
            |date| date >= from,
            "Invalid input. To date should be after from date.",
        )?;

        let rooms = self.ask_count("Enter number of rooms: ")?;
        let adults = self.ask_count("Enter number of adults: ")?;

        let request = TravelRequest {
            city,
            from,
            to,
            rooms,
            adults,
        };
        log::info!("Travel request complete for {}", request.city);
        Ok(request)
    }

    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    fn ask_city(&mut self) -> Result<String> {
        loop {
            let answer = self.prompter.ask("Enter city: ", &self.patterns.city)?;

            match self.checker.check(&answer) {
                CheckOutcome::Correct { word, .. } => {
                    self.prompter.say("City is spelled correctly.")?;
                    return Ok(word);
                }
                CheckOutcome::Misspelled { suggestions, .. } if !suggestions.is_empty() => {
                    self.prompter.say("City not found. Do you mean:")?;
                    for suggestion in &suggestions {
                        self.prompter.say(&suggestion.word)?;
                    }
                }
                CheckOutcome::Misspelled { .. } => {
                    self.prompter.say("City not found. No suggestions available.")?;
                }
            }
            self.prompter.say("Please type the city again:")?;
        }
    }

    fn ask_date(
        &mut self,
        prompt: &str,
        accept: impl Fn(NaiveDate) -> bool,
        rejection: &str,
    ) -> Result<NaiveDate> {
        loop {
            let answer = self.prompter.ask(prompt, &self.patterns.date)?;

            match parse_travel_date(&answer) {
                Ok(date) if accept(date) => return Ok(date),
                Ok(_) => {}
                Err(e) => self.prompter.say(format!("Error parsing date: {e}"))?,
            }
            self.prompter.say(rejection)?;
        }
    }

    fn ask_count(&mut self, prompt: &str) -> Result<u8> {
        loop {
            let answer = self.prompter.ask(prompt, &self.patterns.count)?;
            match answer.parse() {
                Ok(count) => return Ok(count),
                Err(_) => self
                    .prompter
                    .say("Invalid input. Please enter a valid number.")?,
            }
        }
    }
}
