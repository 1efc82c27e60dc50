// File: src/loader.rs
use crate::config::LexiconPaths;
use crate::core::alphabet::AlphabetTable;
use crate::core::exceptions::{read_lines, ExceptionWordSets, UserExceptionMap};
use crate::core::trie::WordTrie;
use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

/// The read-only half of a transliterator: the word dictionary and the three
/// exception sets. Built once, never mutated afterwards.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Lexicon {
    pub dictionary: WordTrie,
    pub exceptions: ExceptionWordSets,
}

impl Lexicon {
    /// Reads the word list and the three exception lists.
    ///
    /// Word-list lines may be Georgian or Latin-encoded; both are stored in
    /// native script.
    pub fn from_readers<W, A, B, C>(words: W, sh: A, ch: B, dz: C) -> Result<Self, LoadError>
    where
        W: BufRead,
        A: BufRead,
        B: BufRead,
        C: BufRead,
    {
        let alphabet = AlphabetTable::georgian();
        let dictionary: WordTrie = read_lines(words)?
            .iter()
            .map(|line| alphabet.encode(line.trim()))
            .collect();
        let exceptions = ExceptionWordSets::from_readers(sh, ch, dz)?;
        Ok(Self { dictionary, exceptions })
    }

    pub fn load(paths: &LexiconPaths) -> Result<Self, LoadError> {
        let lexicon = Self::from_readers(
            open(&paths.words)?,
            open(&paths.sh_exceptions)?,
            open(&paths.ch_exceptions)?,
            open(&paths.dz_exceptions)?,
        )?;
        let (sh, ch, dz) = lexicon.exceptions.sizes();
        info!(words = lexicon.dictionary.len(), sh, ch, dz, "lexicon loaded");
        Ok(lexicon)
    }
}

pub fn load_user_exceptions(path: &Path) -> Result<UserExceptionMap, LoadError> {
    let map = UserExceptionMap::from_reader(open(path)?)?;
    info!(entries = map.len(), path = %path.display(), "user exceptions loaded");
    Ok(map)
}

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| LoadError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_and_native_word_lines_normalize_to_native() {
        let words = "Tbilisi\nღვინო\n\n  jari \r\n";
        let lexicon =
            Lexicon::from_readers(words.as_bytes(), "".as_bytes(), "".as_bytes(), "".as_bytes())
                .unwrap();
        assert_eq!(lexicon.dictionary.len(), 3);
        assert!(lexicon.dictionary.contains("თბილისი"));
        assert!(lexicon.dictionary.contains("ღვინო"));
        assert!(lexicon.dictionary.contains("ჯარი"));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let paths = LexiconPaths::in_dir("/nonexistent/lexicon/dir");
        let err = Lexicon::load(&paths).err().unwrap();
        match err {
            LoadError::Io { path, .. } => assert_eq!(path, paths.words),
            other => panic!("unexpected error: {other}"),
        }
    }
}
