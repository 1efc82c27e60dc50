// src/core/dictionary.rs
use crate::core::trie::WordTrie;
use std::collections::HashSet;

/// Read-only membership oracle over native-script words.
pub trait WordDictionary: Send + Sync {
    fn contains(&self, word: &str) -> bool;
}

/// A dictionary that knows no words. Every trial substitution falls back to
/// its default reading.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyDictionary;

impl WordDictionary for EmptyDictionary {
    fn contains(&self, _word: &str) -> bool {
        false
    }
}

impl WordDictionary for WordTrie {
    fn contains(&self, word: &str) -> bool {
        WordTrie::contains(self, word)
    }
}

impl WordDictionary for HashSet<String> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}
