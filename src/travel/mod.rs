//! Interactive travel search front end.
//!
//! Collects a destination city, a date range and party size from a terminal.
//! The city is checked against the word dictionary and corrected through
//! its suggestions; everything else is validated with regular expressions
//! and calendar rules.

pub mod prompt;
pub mod request;
pub mod session;

pub use prompt::*;
pub use request::*;
pub use session::*;
