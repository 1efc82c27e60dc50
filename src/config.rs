// src/config.rs
use std::path::{Path, PathBuf};

const DEFAULT_DATA_DIR: &str = "data";

/// Where the five lexicon sources live on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconPaths {
    /// Native-language word list (one word per line, either script).
    pub words: PathBuf,
    /// Fragments of words where "sh" is ს+ჰ rather than შ.
    pub sh_exceptions: PathBuf,
    /// Fragments of words where "ch" is ც+ჰ rather than ჩ/ჭ.
    pub ch_exceptions: PathBuf,
    /// Fragments of words where "dz" is დ+ზ rather than ძ.
    pub dz_exceptions: PathBuf,
    /// "latin native" whole-input overrides.
    pub user_exceptions: PathBuf,
}

impl LexiconPaths {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            words: dir.join("words.dat"),
            sh_exceptions: dir.join("shis.dat"),
            ch_exceptions: dir.join("chis.dat"),
            dz_exceptions: dir.join("dzis.dat"),
            user_exceptions: dir.join("exceptions.dat"),
        }
    }
}

impl Default for LexiconPaths {
    fn default() -> Self {
        Self::in_dir(DEFAULT_DATA_DIR)
    }
}

/// Output shaping for `Transliterator::to_native`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransliteratorOptions {
    /// Emit a space after every token, including the last one.
    pub trailing_separator: bool,
}

impl Default for TransliteratorOptions {
    fn default() -> Self {
        Self { trailing_separator: true }
    }
}
