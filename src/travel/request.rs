//! Travel search parameters and date parsing.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SplayDictError};

/// Format of dates typed at the prompt, e.g. `05 March 2027`.
pub const DATE_FORMAT: &str = "%d %B %Y";

/// Parse a `dd Month yyyy` date. Month names are case-insensitive and runs
/// of whitespace between the parts are accepted.
pub fn parse_travel_date(input: &str) -> Result<NaiveDate> {
    let normalized = input.split_whitespace().collect::<Vec<_>>().join(" ");

    NaiveDate::parse_from_str(&normalized, DATE_FORMAT)
        .map_err(|e| SplayDictError::invalid_input(format!("cannot parse date '{input}': {e}")))
}

/// Everything the search needs once all prompts were answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelRequest {
    pub city: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub rooms: u8,
    pub adults: u8,
}

impl TravelRequest {
    /// Number of nights between arrival and departure.
    pub fn nights(&self) -> i64 {
        (self.to - self.from).num_days()
    }
}

impl fmt::Display for TravelRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "City: {}", self.city)?;
        writeln!(f, "From Date: {}", self.from.format(DATE_FORMAT))?;
        writeln!(f, "To Date: {}", self.to.format(DATE_FORMAT))?;
        writeln!(f, "Number of Rooms: {}", self.rooms)?;
        write!(f, "Number of Adults: {}", self.adults)
    }
}
