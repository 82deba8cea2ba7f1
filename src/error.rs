//! Error types for splaydict.
//!
//! The splay tree itself never fails; everything in here comes from the
//! layers around it: loading word lists, reading configuration, and the
//! interactive prompts.
//!
//! # Examples
//!
//! ```
//! use splaydict::error::{Result, SplayDictError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SplayDictError::config("max_suggestions must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for splaydict operations.
#[derive(Error, Debug)]
pub enum SplayDictError {
    /// I/O errors (word lists, config files, terminal streams)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Word-list content problems
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input that can never satisfy a prompt
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The interactive input stream ended before a valid answer was read
    #[error("Input closed before a valid answer was given")]
    InputClosed,

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SplayDictError.
pub type Result<T> = std::result::Result<T, SplayDictError>;

impl SplayDictError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        SplayDictError::Dictionary(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SplayDictError::Config(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        SplayDictError::InvalidInput(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SplayDictError::Other(msg.into())
    }
}
