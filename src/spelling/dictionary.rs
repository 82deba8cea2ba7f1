//! Word dictionary backed by a splay tree.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::DictionaryConfig;
use crate::error::Result;
use crate::spelling::splay_tree::{Iter, SplayTree};

/// Counters gathered while reading a word list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStats {
    /// Lines read from the source.
    pub lines_read: usize,
    /// Words handed to the tree, repeats included.
    pub words_inserted: usize,
    /// Blank lines that were ignored.
    pub lines_skipped: usize,
    /// Distinct words in the dictionary after loading.
    pub distinct_words: usize,
}

/// A dictionary that stores words and their occurrence counts.
///
/// Words are normalised according to the [`DictionaryConfig`] on the way in
/// and on every lookup, so `"Paris"` and `" paris "` address the same entry
/// under the default settings.
#[derive(Debug, Default)]
pub struct SplayDictionary {
    tree: SplayTree,
    config: DictionaryConfig,
}

impl SplayDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        SplayDictionary::default()
    }

    /// Create an empty dictionary with custom normalisation settings.
    pub fn with_config(config: DictionaryConfig) -> Self {
        SplayDictionary {
            tree: SplayTree::new(),
            config,
        }
    }

    /// Build a dictionary from an in-memory list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = SplayDictionary::new();
        for word in words {
            dictionary.add_word(word.as_ref());
        }
        dictionary
    }

    /// Load dictionary from a text file with one word per line.
    pub fn load_from_file<P: AsRef<Path>>(path: P, config: DictionaryConfig) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;

        let mut dictionary = SplayDictionary::with_config(config);
        let stats = dictionary.load_from_reader(BufReader::new(file))?;

        log::info!(
            "Loaded {} words ({} distinct) from {}",
            stats.words_inserted,
            stats.distinct_words,
            path.display()
        );
        Ok(dictionary)
    }

    /// Insert every line of `reader` as one word occurrence.
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R) -> Result<LoadStats> {
        let mut stats = LoadStats::default();

        for line in reader.lines() {
            let line = line?;
            stats.lines_read += 1;

            let word = self.config.normalize(&line);
            if self.config.skip_empty && word.is_empty() {
                stats.lines_skipped += 1;
                continue;
            }

            self.tree.insert(&word);
            stats.words_inserted += 1;
        }

        stats.distinct_words = self.tree.len();
        log::debug!(
            "Word list read: {} lines, {} skipped, tree height {}",
            stats.lines_read,
            stats.lines_skipped,
            self.tree.height()
        );
        Ok(stats)
    }

    pub fn config(&self) -> &DictionaryConfig {
        &self.config
    }

    /// Underlying tree, for read-only walks.
    pub fn tree(&self) -> &SplayTree {
        &self.tree
    }

    /// Add one occurrence of a word and return its new count.
    pub fn add_word(&mut self, word: &str) -> u32 {
        let word = self.config.normalize(word);
        self.tree.insert(&word)
    }

    /// Remove a word entirely. Returns `false` if it was not present.
    pub fn remove_word(&mut self, word: &str) -> bool {
        let word = self.config.normalize(word);
        self.tree.delete(&word)
    }

    /// Get the occurrence count of a word (0 when absent).
    pub fn frequency(&mut self, word: &str) -> u32 {
        let word = self.config.normalize(word);
        self.tree.get(&word)
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&mut self, word: &str) -> bool {
        self.frequency(word) > 0
    }

    /// Dictionary words within `threshold` edits of `word`, ascending.
    pub fn similar_words(&self, word: &str, threshold: usize) -> Vec<String> {
        let word = self.config.normalize(word);
        self.tree.similar_words(&word, threshold)
    }

    /// Get the total number of unique words.
    pub fn word_count(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Get the total occurrence count.
    pub fn total_frequency(&self) -> u64 {
        self.tree.total_count()
    }

    /// Get all words in ascending order.
    pub fn words(&self) -> Vec<&str> {
        self.tree.traverse()
    }

    /// `(word, count)` pairs in ascending order.
    pub fn entries(&self) -> Iter<'_> {
        self.tree.iter()
    }
}
