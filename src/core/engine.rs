use crate::config::{LexiconPaths, TransliteratorOptions};
use crate::core::alphabet::AlphabetTable;
use crate::core::dictionary::WordDictionary;
use crate::core::exceptions::{ExceptionWordSets, UserExceptionMap};
use crate::core::resolver::DigraphResolver;
use crate::core::scanner::PatternScanner;
use crate::error::LoadError;
use crate::loader::{load_user_exceptions, Lexicon};
use std::borrow::Cow;
use std::io::BufRead;
use tracing::debug_span;

/// Latin ⇄ Georgian transliterator.
///
/// The alphabet, dictionary and exception sets are read-only after
/// construction. The user exception map is the only mutable state; its
/// mutators take `&mut self`, so callers sharing an instance across threads
/// must serialize them.
pub struct Transliterator {
    alphabet: AlphabetTable,
    dictionary: Box<dyn WordDictionary>,
    exceptions: ExceptionWordSets,
    user_exceptions: UserExceptionMap,
    options: TransliteratorOptions,
}

impl Transliterator {
    pub fn new(
        dictionary: impl WordDictionary + 'static,
        exceptions: ExceptionWordSets,
        user_exceptions: UserExceptionMap,
    ) -> Self {
        Self {
            alphabet: AlphabetTable::georgian(),
            dictionary: Box::new(dictionary),
            exceptions,
            user_exceptions,
            options: TransliteratorOptions::default(),
        }
    }

    pub fn from_lexicon(lexicon: Lexicon, user_exceptions: UserExceptionMap) -> Self {
        Self::new(lexicon.dictionary, lexicon.exceptions, user_exceptions)
    }

    /// Builds an instance from the five line-delimited sources.
    pub fn from_readers<W, A, B, C, E>(
        words: W,
        sh: A,
        ch: B,
        dz: C,
        user_exceptions: E,
    ) -> Result<Self, LoadError>
    where
        W: BufRead,
        A: BufRead,
        B: BufRead,
        C: BufRead,
        E: BufRead,
    {
        let lexicon = Lexicon::from_readers(words, sh, ch, dz)?;
        let user_exceptions = UserExceptionMap::from_reader(user_exceptions)?;
        Ok(Self::from_lexicon(lexicon, user_exceptions))
    }

    pub fn load(paths: &LexiconPaths) -> Result<Self, LoadError> {
        let lexicon = Lexicon::load(paths)?;
        let user_exceptions = load_user_exceptions(&paths.user_exceptions)?;
        Ok(Self::from_lexicon(lexicon, user_exceptions))
    }

    pub fn with_options(mut self, options: TransliteratorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> TransliteratorOptions {
        self.options
    }

    /// Latin-encoded text to Georgian.
    pub fn to_native(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        if let Some(mapped) = self.user_exceptions.get(text) {
            return mapped.to_string();
        }

        let text = self.normalize_initial(text);
        let mut out = String::with_capacity(text.len() * 3);
        for token in text.split_whitespace() {
            let resolved = self.resolve_word(token);
            out.push_str(&self.alphabet.encode(&resolved));
            out.push(' ');
        }
        if !self.options.trailing_separator && out.ends_with(' ') {
            out.pop();
        }
        out
    }

    /// Georgian text to its Latin encoding, character by character.
    pub fn to_latin(&self, text: &str) -> String {
        self.alphabet.decode(text)
    }

    /// Rewrites every ambiguous span of one Latin token into its marker
    /// form. The result is still Latin-encoded.
    pub fn resolve_word(&self, token: &str) -> String {
        let _span = debug_span!("resolve_word", token).entered();
        let resolver = self.resolver();
        let mut word = token.to_string();
        PatternScanner::substitute_all(&mut word, |current, index, pattern| {
            resolver.resolve(current, index, pattern)
        });
        word
    }

    /// Dictionary membership for a word in either script.
    pub fn is_known_word(&self, word: &str) -> bool {
        self.resolver().is_word(word)
    }

    pub fn add_exception(&mut self, key: &str, value: &str) {
        self.user_exceptions.insert(key, value);
    }

    pub fn remove_exception(&mut self, key: &str) {
        self.user_exceptions.remove(key);
    }

    pub fn user_exceptions(&self) -> &UserExceptionMap {
        &self.user_exceptions
    }

    fn resolver(&self) -> DigraphResolver<'_> {
        DigraphResolver::new(self.dictionary.as_ref(), &self.exceptions, &self.alphabet)
    }

    /// Sentence-initial capitals are insignificant, markers are not.
    fn normalize_initial<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let mut chars = text.chars();
        match chars.next() {
            Some(first) if !self.alphabet.is_marker(first) && first.is_uppercase() => {
                let mut lowered: String = first.to_lowercase().collect();
                lowered.push_str(chars.as_str());
                Cow::Owned(lowered)
            }
            _ => Cow::Borrowed(text),
        }
    }
}
