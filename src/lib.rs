//! # splaydict
//!
//! A word dictionary built on a splay tree, with edit-distance suggestions.
//!
//! ## Features
//!
//! - Splay tree keyed on words, counting repeated insertions
//! - Levenshtein distance with threshold-bounded early exit
//! - "Did you mean?" suggestions in alphabetical or ranked order
//! - Word-list loading with configurable normalisation
//! - Coarse-locked handle for sharing a checker between threads
//! - Interactive travel-search prompts that correct city names

pub mod cli;
pub mod config;
pub mod error;
pub mod spelling;
pub mod travel;

pub mod prelude {
    pub use crate::config::DictionaryConfig;
    pub use crate::error::{Result, SplayDictError};
    pub use crate::spelling::{
        CheckOutcome, SharedSpellChecker, SpellChecker, SplayDictionary, SplayTree, Suggestion,
        SuggestionConfig, SuggestionOrder, levenshtein_distance,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
