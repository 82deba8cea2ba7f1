//! Suggestion generation on top of the splay tree.

use serde::{Deserialize, Serialize};

use crate::spelling::splay_tree::{SimilarEntry, SplayTree};

/// How suggestions are ordered in the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionOrder {
    /// Ascending key order, as produced by the in-order walk.
    #[default]
    Alphabetical,
    /// Closest first, more frequent first among equals, then alphabetical.
    Ranked,
}

/// A dictionary word offered as a replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Edit distance from the queried word.
    pub distance: usize,
    /// Occurrence count of the suggested word in the dictionary.
    pub frequency: u32,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: String, distance: usize, frequency: u32) -> Self {
        Suggestion {
            word,
            distance,
            frequency,
        }
    }
}

impl From<SimilarEntry<'_>> for Suggestion {
    fn from(entry: SimilarEntry<'_>) -> Self {
        Suggestion::new(entry.key.to_owned(), entry.distance, entry.count)
    }
}

/// Configuration for spelling suggestion generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Maximum edit distance to consider.
    pub max_distance: usize,
    /// Result ordering.
    pub order: SuggestionOrder,
    /// Maximum number of suggestions to return; `None` keeps all of them.
    pub max_suggestions: Option<usize>,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            max_distance: 2,
            order: SuggestionOrder::Alphabetical,
            max_suggestions: None,
        }
    }
}

/// Collects and orders suggestions from a tree.
#[derive(Debug, Clone, Default)]
pub struct SuggestionEngine {
    config: SuggestionConfig,
}

impl SuggestionEngine {
    /// Create a new suggestion engine with the default configuration.
    pub fn new() -> Self {
        SuggestionEngine::default()
    }

    /// Create a new suggestion engine with custom configuration.
    pub fn with_config(config: SuggestionConfig) -> Self {
        SuggestionEngine { config }
    }

    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// Update the configuration.
    pub fn set_config(&mut self, config: SuggestionConfig) {
        self.config = config;
    }

    /// Every key of `tree` within `max_distance` of `word`.
    ///
    /// `word` is matched as given; normalisation is the caller's job.
    pub fn suggest(&self, tree: &SplayTree, word: &str) -> Vec<Suggestion> {
        let mut suggestions: Vec<Suggestion> = tree
            .similar_entries(word, self.config.max_distance)
            .into_iter()
            .map(Suggestion::from)
            .collect();

        if self.config.order == SuggestionOrder::Ranked {
            // Stable sort keeps the alphabetical order among full ties
            suggestions.sort_by(|a, b| {
                a.distance
                    .cmp(&b.distance)
                    .then_with(|| b.frequency.cmp(&a.frequency))
            });
        }

        if let Some(limit) = self.config.max_suggestions {
            suggestions.truncate(limit);
        }

        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city_tree() -> SplayTree {
        [
            "paris", "pari", "parish", "london", "parma", "parma", "parma", "paris",
        ]
        .iter()
        .collect()
    }

    fn words(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.word.as_str()).collect()
    }

    #[test]
    fn test_alphabetical_matches_similar_words() {
        let tree = city_tree();
        let engine = SuggestionEngine::new();

        let suggestions = engine.suggest(&tree, "paris");
        assert_eq!(words(&suggestions), tree.similar_words("paris", 2));
        assert_eq!(words(&suggestions), vec!["pari", "paris", "parish", "parma"]);
    }

    #[test]
    fn test_ranked_order() {
        let tree = city_tree();
        let engine = SuggestionEngine::with_config(SuggestionConfig {
            order: SuggestionOrder::Ranked,
            ..Default::default()
        });

        let suggestions = engine.suggest(&tree, "paris");
        assert_eq!(words(&suggestions), vec!["paris", "pari", "parish", "parma"]);
        assert_eq!(suggestions[0].distance, 0);
        assert_eq!(suggestions[0].frequency, 2);
        assert_eq!(suggestions[3].distance, 2);
        assert_eq!(suggestions[3].frequency, 3);
    }

    #[test]
    fn test_ranked_prefers_frequency_at_equal_distance() {
        let tree: SplayTree = ["bonn", "bern", "bern", "born"].iter().collect();
        let engine = SuggestionEngine::with_config(SuggestionConfig {
            max_distance: 1,
            order: SuggestionOrder::Ranked,
            max_suggestions: None,
        });

        let suggestions = engine.suggest(&tree, "barn");
        assert_eq!(words(&suggestions), vec!["bern", "born"]);
    }

    #[test]
    fn test_limit() {
        let tree = city_tree();
        let mut engine = SuggestionEngine::new();
        engine.set_config(SuggestionConfig {
            max_suggestions: Some(2),
            ..Default::default()
        });

        assert_eq!(words(&engine.suggest(&tree, "paris")), vec!["pari", "paris"]);
        assert_eq!(engine.config().max_suggestions, Some(2));
    }

    #[test]
    fn test_no_matches() {
        let tree = city_tree();
        let engine = SuggestionEngine::new();

        assert!(engine.suggest(&tree, "reykjavik").is_empty());
        assert!(engine.suggest(&SplayTree::new(), "rome").is_empty());
    }
}
