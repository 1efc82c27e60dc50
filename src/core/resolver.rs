// src/core/resolver.rs
use crate::core::alphabet::AlphabetTable;
use crate::core::dictionary::WordDictionary;
use crate::core::exceptions::ExceptionWordSets;
use crate::core::types::{latin, Pattern};
use tracing::debug;

/// Decides what a single occurrence of an ambiguous pattern stands for.
///
/// Three strategies are in play:
/// - exception lists for digraphs that normally collapse (`sh`, `ch`, `dz`);
/// - trial substitution checked against the dictionary (`ch`, `g`, `t`, `j`);
/// - fixed rules (`zh`, and the single `kh` loanword).
///
/// Holds only borrowed, read-only tables, so resolution is a pure function
/// of `(word, index, pattern)`.
pub struct DigraphResolver<'a> {
    dictionary: &'a dyn WordDictionary,
    exceptions: &'a ExceptionWordSets,
    alphabet: &'a AlphabetTable,
}

impl<'a> DigraphResolver<'a> {
    pub fn new(
        dictionary: &'a dyn WordDictionary,
        exceptions: &'a ExceptionWordSets,
        alphabet: &'a AlphabetTable,
    ) -> Self {
        Self { dictionary, exceptions, alphabet }
    }

    /// Latin-side replacement for the occurrence of `pattern` starting at
    /// byte `index` of the current `word`.
    pub fn resolve(&self, word: &str, index: usize, pattern: Pattern) -> &'static str {
        let replacement = match pattern {
            Pattern::Sh => {
                if self.exceptions.keeps_sh(word) {
                    pattern.text()
                } else {
                    latin::SH_COLLAPSED
                }
            }
            Pattern::Ch => {
                if self.exceptions.keeps_ch(word) {
                    pattern.text()
                } else if self.accepts_substitution(word, index, pattern, latin::CH_DICTIONARY) {
                    latin::CH_DICTIONARY
                } else {
                    latin::CH_DEFAULT
                }
            }
            Pattern::Dz => {
                if self.exceptions.keeps_dz(word) {
                    pattern.text()
                } else {
                    latin::DZ_COLLAPSED
                }
            }
            Pattern::G => {
                if self.accepts_substitution(word, index, pattern, latin::G_ALTERNATE) {
                    latin::G_ALTERNATE
                } else {
                    pattern.text()
                }
            }
            Pattern::T => {
                if self.accepts_substitution(word, index, pattern, latin::T_ALTERNATE) {
                    latin::T_ALTERNATE
                } else {
                    pattern.text()
                }
            }
            Pattern::Zh => latin::ZH_FIXED,
            Pattern::J => {
                if self.is_word(word) {
                    latin::J_DICTIONARY
                } else {
                    latin::J_DEFAULT
                }
            }
            Pattern::Kh => {
                if word.contains(latin::KH_LOANWORD) {
                    pattern.text()
                } else {
                    latin::KH_COLLAPSED
                }
            }
        };
        debug!(word, index, pattern = pattern.text(), replacement, "resolved");
        replacement
    }

    /// Membership of a Latin-encoded word, checked in native script.
    pub fn is_word(&self, latin_word: &str) -> bool {
        self.dictionary.contains(&self.alphabet.encode(latin_word))
    }

    fn accepts_substitution(
        &self,
        word: &str,
        index: usize,
        pattern: Pattern,
        candidate: &str,
    ) -> bool {
        let end = index + pattern.len();
        let mut trial = String::with_capacity(word.len() + candidate.len());
        trial.push_str(&word[..index]);
        trial.push_str(candidate);
        trial.push_str(&word[end..]);
        self.is_word(&trial)
    }
}
