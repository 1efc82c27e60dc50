// --- File: src/core/trie.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Serialize, Deserialize)]
struct TrieNode {
    children: HashMap<u8, usize>,
    terminal: bool,
}

impl TrieNode {
    fn new() -> Self {
        Self { children: HashMap::new(), terminal: false }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    #[error("trie has no root node")]
    MissingRoot,
    #[error("child index {0} is out of range")]
    DanglingChild(usize),
    #[error("trie records {recorded} words but holds {found}")]
    WordCount { recorded: usize, found: usize },
}

/// An immutable-after-build, byte-keyed trie used as a word membership set.
/// Shared prefixes of the (large) vocabulary are stored once.
#[derive(Clone, Serialize, Deserialize)]
pub struct WordTrie {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl WordTrie {
    pub fn new() -> Self {
        Self { nodes: vec![TrieNode::new()], words: 0 }
    }

    /// Inserts a word. Returns `false` if it was already present.
    /// O(k) complexity where k is key length.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node_idx = 0;
        for &byte in word.as_bytes() {
            node_idx = if let Some(&id) = self.nodes[node_idx].children.get(&byte) {
                id
            } else {
                let new_node_id = self.nodes.len();
                self.nodes.push(TrieNode::new());
                self.nodes[node_idx].children.insert(byte, new_node_id);
                new_node_id
            };
        }
        if self.nodes[node_idx].terminal {
            return false;
        }
        self.nodes[node_idx].terminal = true;
        self.words += 1;
        true
    }

    /// Exact membership. O(k).
    pub fn contains(&self, word: &str) -> bool {
        let mut node_idx = 0;
        for &byte in word.as_bytes() {
            match self.nodes[node_idx].children.get(&byte) {
                Some(&next_idx) => node_idx = next_idx,
                None => return false,
            }
        }
        self.nodes[node_idx].terminal
    }

    pub fn len(&self) -> usize {
        self.words
    }

    /// Structural check for a trie that did not come from `insert`, such as
    /// one decoded from a snapshot. `contains` indexes nodes unchecked.
    pub fn validate(&self) -> Result<(), TrieError> {
        if self.nodes.is_empty() {
            return Err(TrieError::MissingRoot);
        }
        let mut terminals = 0;
        for node in &self.nodes {
            if let Some(&child) = node.children.values().find(|&&c| c >= self.nodes.len()) {
                return Err(TrieError::DanglingChild(child));
            }
            if node.terminal {
                terminals += 1;
            }
        }
        if terminals != self.words {
            return Err(TrieError::WordCount { recorded: self.words, found: terminals });
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }
}

impl Default for WordTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordTrie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = WordTrie::new();
        for word in iter {
            trie.insert(word.as_ref());
        }
        trie
    }
}
