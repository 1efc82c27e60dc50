// src/core/scanner.rs
use crate::core::types::Pattern;

/// Finds ambiguous patterns inside a Latin-encoded word.
pub struct PatternScanner;

impl PatternScanner {
    /// Start index of the first occurrence of `pattern` at or after `from`.
    ///
    /// Patterns are ASCII, so `from` only needs to sit right after an
    /// ASCII run (the start of the word, or the end of a substitution).
    pub fn find_from(word: &str, pattern: Pattern, from: usize) -> Option<usize> {
        word.get(from..)?
            .find(pattern.text())
            .map(|offset| from + offset)
    }

    /// Visits every pattern in processing order and replaces each of its
    /// occurrences with whatever `choose` returns for it.
    ///
    /// `choose` sees the word as substituted so far. Scanning resumes right
    /// after the replacement, so a replacement is never rescanned for the
    /// same pattern and no character is skipped.
    pub fn substitute_all<F>(word: &mut String, mut choose: F)
    where
        F: FnMut(&str, usize, Pattern) -> &'static str,
    {
        for pattern in Pattern::ALL {
            let mut from = 0;
            while let Some(index) = Self::find_from(word, pattern, from) {
                let replacement = choose(word, index, pattern);
                word.replace_range(index..index + pattern.len(), replacement);
                from = index + replacement.len();
            }
        }
    }
}
