//! Thread-safe handle around a spell checker.
//!
//! Splaying rewrites the tree on every lookup, so readers need exclusive
//! access just like writers. One mutex guards the whole checker; finer
//! locking buys nothing when any operation may rewrite the root path.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::spelling::checker::{CheckOutcome, SpellChecker};
use crate::spelling::dictionary::SplayDictionary;

/// Cloneable handle sharing one [`SpellChecker`] between threads.
#[derive(Debug, Clone)]
pub struct SharedSpellChecker {
    inner: Arc<Mutex<SpellChecker>>,
}

impl SharedSpellChecker {
    pub fn new(checker: SpellChecker) -> Self {
        SharedSpellChecker {
            inner: Arc::new(Mutex::new(checker)),
        }
    }

    pub fn from_dictionary(dictionary: SplayDictionary) -> Self {
        SharedSpellChecker::new(SpellChecker::new(dictionary))
    }

    pub fn add_word(&self, word: &str) -> u32 {
        self.inner.lock().dictionary_mut().add_word(word)
    }

    pub fn remove_word(&self, word: &str) -> bool {
        self.inner.lock().dictionary_mut().remove_word(word)
    }

    pub fn frequency(&self, word: &str) -> u32 {
        self.inner.lock().dictionary_mut().frequency(word)
    }

    pub fn check(&self, word: &str) -> CheckOutcome {
        self.inner.lock().check(word)
    }

    /// Run `f` with the lock held, for sequences that must not interleave.
    pub fn with_checker<T>(&self, f: impl FnOnce(&mut SpellChecker) -> T) -> T {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }
}
