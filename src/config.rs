//! Configuration for dictionary loading and suggestion lookup.

use std::borrow::Cow;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SplayDictError};
use crate::spelling::suggest::{SuggestionConfig, SuggestionOrder};

/// Settings shared by the word-list loader and the lookup side.
///
/// Every field has a default, so a JSON file only needs to name the values
/// it changes:
///
/// ```
/// use splaydict::config::DictionaryConfig;
///
/// let config: DictionaryConfig = serde_json::from_str(r#"{ "max_distance": 1 }"#).unwrap();
/// assert_eq!(config.max_distance, 1);
/// assert!(config.lowercase);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Case-fold words on load and queries before lookup.
    pub lowercase: bool,

    /// Strip surrounding whitespace from every word.
    pub trim: bool,

    /// Ignore lines that are empty after trimming.
    pub skip_empty: bool,

    /// Edit-distance threshold for suggestions.
    pub max_distance: usize,

    /// Order in which suggestions are reported.
    pub order: SuggestionOrder,

    /// Upper bound on the number of suggestions, if any.
    pub max_suggestions: Option<usize>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        DictionaryConfig {
            lowercase: true,
            trim: true,
            skip_empty: true,
            max_distance: 2,
            order: SuggestionOrder::Alphabetical,
            max_suggestions: None,
        }
    }
}

impl DictionaryConfig {
    /// Read a JSON config file and validate it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let config: DictionaryConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;

        log::debug!("Loaded dictionary config from {}", path.display());
        Ok(config)
    }

    /// Reject settings that can never produce a useful lookup.
    pub fn validate(&self) -> Result<()> {
        if self.max_suggestions == Some(0) {
            return Err(SplayDictError::config(
                "max_suggestions must be at least 1 when set",
            ));
        }
        Ok(())
    }

    /// Suggestion settings derived from this config.
    pub fn suggestion_config(&self) -> SuggestionConfig {
        SuggestionConfig {
            max_distance: self.max_distance,
            order: self.order,
            max_suggestions: self.max_suggestions,
        }
    }

    /// Apply trimming and case folding to a word.
    pub fn normalize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        let word = if self.trim { word.trim() } else { word };
        if self.lowercase && word.chars().any(char::is_uppercase) {
            Cow::Owned(word.to_lowercase())
        } else {
            Cow::Borrowed(word)
        }
    }
}
