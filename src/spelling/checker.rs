//! Exact lookup with suggestions on a miss.

use serde::{Deserialize, Serialize};

use crate::spelling::dictionary::SplayDictionary;
use crate::spelling::suggest::{Suggestion, SuggestionConfig, SuggestionEngine};

/// Result of checking a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// The word is in the dictionary.
    Correct { word: String, frequency: u32 },
    /// The word is unknown; `suggestions` may be empty.
    Misspelled {
        word: String,
        suggestions: Vec<Suggestion>,
    },
}

impl CheckOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, CheckOutcome::Correct { .. })
    }

    /// The normalised word that was looked up.
    pub fn word(&self) -> &str {
        match self {
            CheckOutcome::Correct { word, .. } | CheckOutcome::Misspelled { word, .. } => word,
        }
    }

    /// Suggestions offered for a miss; empty for a hit.
    pub fn suggestions(&self) -> &[Suggestion] {
        match self {
            CheckOutcome::Correct { .. } => &[],
            CheckOutcome::Misspelled { suggestions, .. } => suggestions,
        }
    }
}

/// Spell checker over a [`SplayDictionary`].
///
/// A lookup that hits returns the count; only a miss pays for the full
/// edit-distance scan.
#[derive(Debug)]
pub struct SpellChecker {
    dictionary: SplayDictionary,
    engine: SuggestionEngine,
}

impl SpellChecker {
    /// Use the suggestion settings from the dictionary's own config.
    pub fn new(dictionary: SplayDictionary) -> Self {
        let config = dictionary.config().suggestion_config();
        SpellChecker::with_config(dictionary, config)
    }

    pub fn with_config(dictionary: SplayDictionary, config: SuggestionConfig) -> Self {
        SpellChecker {
            dictionary,
            engine: SuggestionEngine::with_config(config),
        }
    }

    /// Check one word.
    pub fn check(&mut self, word: &str) -> CheckOutcome {
        let word = self.dictionary.config().normalize(word).into_owned();

        let frequency = self.dictionary.frequency(&word);
        if frequency > 0 {
            return CheckOutcome::Correct { word, frequency };
        }

        let suggestions = self.engine.suggest(self.dictionary.tree(), &word);
        log::debug!("'{}' not found, {} suggestions", word, suggestions.len());
        CheckOutcome::Misspelled { word, suggestions }
    }

    /// Suggestions for a word regardless of whether it is present.
    pub fn suggest(&self, word: &str) -> Vec<Suggestion> {
        let word = self.dictionary.config().normalize(word);
        self.engine.suggest(self.dictionary.tree(), &word)
    }

    pub fn suggestion_config(&self) -> &SuggestionConfig {
        self.engine.config()
    }

    pub fn set_suggestion_config(&mut self, config: SuggestionConfig) {
        self.engine.set_config(config);
    }

    pub fn dictionary(&self) -> &SplayDictionary {
        &self.dictionary
    }

    pub fn dictionary_mut(&mut self) -> &mut SplayDictionary {
        &mut self.dictionary
    }

    pub fn into_dictionary(self) -> SplayDictionary {
        self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::suggest::SuggestionOrder;

    fn checker() -> SpellChecker {
        SpellChecker::new(SplayDictionary::from_words([
            "paris", "pari", "parish", "london", "tokyo", "tokyo", "tokyo",
        ]))
    }

    #[test]
    fn test_correct_word() {
        let mut checker = checker();

        let outcome = checker.check("Tokyo");
        assert_eq!(
            outcome,
            CheckOutcome::Correct {
                word: "tokyo".to_string(),
                frequency: 3
            }
        );
        assert!(outcome.is_correct());
        assert!(outcome.suggestions().is_empty());
    }

    #[test]
    fn test_misspelled_with_suggestions() {
        let mut checker = checker();

        let outcome = checker.check("parsi");
        assert!(!outcome.is_correct());
        assert_eq!(outcome.word(), "parsi");

        let words: Vec<&str> = outcome.suggestions().iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, vec!["pari", "paris", "parish"]);
    }

    #[test]
    fn test_misspelled_without_suggestions() {
        let mut checker = checker();

        let outcome = checker.check("reykjavik");
        assert_eq!(
            outcome,
            CheckOutcome::Misspelled {
                word: "reykjavik".to_string(),
                suggestions: Vec::new()
            }
        );
    }

    #[test]
    fn test_check_on_empty_dictionary() {
        let mut checker = SpellChecker::new(SplayDictionary::new());

        let outcome = checker.check("rome");
        assert!(!outcome.is_correct());
        assert!(outcome.suggestions().is_empty());
    }

    #[test]
    fn test_suggest_includes_exact_word() {
        let mut checker = checker();
        checker.set_suggestion_config(SuggestionConfig {
            max_distance: 1,
            order: SuggestionOrder::Ranked,
            max_suggestions: Some(1),
        });

        let suggestions = checker.suggest("paris");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].word, "paris");
        assert_eq!(checker.suggestion_config().max_distance, 1);
    }

    #[test]
    fn test_outcome_json_shape() {
        let mut checker = checker();
        let json = serde_json::to_value(checker.check("london")).unwrap();

        assert_eq!(json["status"], "correct");
        assert_eq!(json["word"], "london");
        assert_eq!(json["frequency"], 1);
    }
}
