// File: src/core/exceptions.rs
use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::io::BufRead;

/// Reads a line-delimited list, dropping `\r` and blank lines.
pub(crate) fn read_lines<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if !line.trim().is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

/// Lowercase loanword fragments that keep a digraph as two letters.
/// Each set is only ever used for substring containment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExceptionWordSets {
    sh: HashSet<String>,
    ch: HashSet<String>,
    dz: HashSet<String>,
}

impl ExceptionWordSets {
    pub fn new<S: AsRef<str>>(
        sh: impl IntoIterator<Item = S>,
        ch: impl IntoIterator<Item = S>,
        dz: impl IntoIterator<Item = S>,
    ) -> Self {
        fn lowered<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> HashSet<String> {
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()
        }
        Self { sh: lowered(sh), ch: lowered(ch), dz: lowered(dz) }
    }

    /// Loads the three lists independently.
    pub fn from_readers<A: BufRead, B: BufRead, C: BufRead>(
        sh: A,
        ch: B,
        dz: C,
    ) -> std::io::Result<Self> {
        Ok(Self::new(read_lines(sh)?, read_lines(ch)?, read_lines(dz)?))
    }

    pub fn keeps_sh(&self, word: &str) -> bool {
        contains_any(word, &self.sh)
    }

    pub fn keeps_ch(&self, word: &str) -> bool {
        contains_any(word, &self.ch)
    }

    pub fn keeps_dz(&self, word: &str) -> bool {
        contains_any(word, &self.dz)
    }

    /// Entry counts for (sh, ch, dz).
    pub fn sizes(&self) -> (usize, usize, usize) {
        (self.sh.len(), self.ch.len(), self.dz.len())
    }
}

fn contains_any(word: &str, fragments: &HashSet<String>) -> bool {
    if fragments.is_empty() {
        return false;
    }
    let word = word.to_lowercase();
    fragments.iter().any(|fragment| word.contains(fragment.as_str()))
}

/// Whole-input overrides, consulted before any other processing.
///
/// Mutation needs `&mut`, so concurrent writers must be serialized by the
/// owner of the `Transliterator`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserExceptionMap {
    entries: BTreeMap<String, String>,
}

impl UserExceptionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses "key value" lines, splitting on the first space. A line with no
    /// space or an empty value fails the whole load.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let mut entries = BTreeMap::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            match line.split_once(' ') {
                Some((key, value)) if !key.is_empty() && !value.is_empty() => {
                    entries.insert(key.to_string(), value.to_string());
                }
                _ => {
                    return Err(LoadError::MalformedException {
                        line: idx + 1,
                        content: line.to_string(),
                    })
                }
            }
        }
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the previous value for `key`, if any.
    pub fn insert(&mut self, key: &str, value: &str) -> Option<String> {
        self.entries.insert(key.to_string(), value.to_string())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for UserExceptionMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sets_are_independent() {
        let sets = ExceptionWordSets::new(["disharmon"], ["tschai"], ["gadzl"]);
        assert!(sets.keeps_sh("disharmonia"));
        assert!(!sets.keeps_ch("disharmonia"));
        assert!(sets.keeps_ch("tschaikovski"));
        assert!(!sets.keeps_dz("tschaikovski"));
        assert!(sets.keeps_dz("gadzliereba"));
        assert!(!sets.keeps_sh("gadzliereba"));
    }

    #[test]
    fn containment_ignores_case() {
        let sets = ExceptionWordSets::new(["DisHarmon"], [], []);
        assert!(sets.keeps_sh("Disharmonia"));
        assert_eq!(sets.sizes(), (1, 0, 0));
    }

    #[test]
    fn blank_entries_are_dropped() {
        let input = "disharmon\r\n\n   \nmishel\n";
        let sets =
            ExceptionWordSets::from_readers(input.as_bytes(), "".as_bytes(), "".as_bytes())
                .unwrap();
        assert_eq!(sets.sizes(), (2, 0, 0));
        assert!(!sets.keeps_sh("shen"));
    }

    #[test]
    fn user_exceptions_split_on_first_space() {
        let input = "didi დიდი\ngamarjoba გამარჯობა მეგობარო\n\n";
        let map = UserExceptionMap::from_reader(input.as_bytes()).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("didi"), Some("დიდი"));
        assert_eq!(map.get("gamarjoba"), Some("გამარჯობა მეგობარო"));
    }

    #[test]
    fn line_without_space_fails_the_load() {
        let input = "didi დიდი\nbroken\n";
        let err = UserExceptionMap::from_reader(input.as_bytes()).unwrap_err();
        match err {
            LoadError::MalformedException { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "broken");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_value_fails_the_load() {
        let err = UserExceptionMap::from_reader("didi \n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MalformedException { line: 1, .. }));
    }

    #[test]
    fn insert_and_remove() {
        let mut map = UserExceptionMap::new();
        assert_eq!(map.insert("a", "b"), None);
        assert_eq!(map.insert("a", "c"), Some("b".to_string()));
        assert_eq!(map.remove("a"), Some("c".to_string()));
        assert!(map.is_empty());
    }
}
