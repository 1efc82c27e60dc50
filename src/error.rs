// src/error.rs
use crate::core::trie::TrieError;
use std::io;
use std::path::PathBuf;

/// Failures while materializing lexicons. Translation itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Stream(#[from] io::Error),

    #[error("malformed exception on line {line}: {content:?} (expected \"<latin> <native>\")")]
    MalformedException { line: usize, content: String },

    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(#[from] TrieError),
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LoadError::Io { path: path.into(), source }
    }
}
