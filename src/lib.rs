// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod loader;
pub mod logging;
pub mod persistence;

pub use crate::config::{LexiconPaths, TransliteratorOptions};
pub use crate::core::dictionary::{EmptyDictionary, WordDictionary};
pub use crate::core::engine::Transliterator;
pub use crate::core::exceptions::{ExceptionWordSets, UserExceptionMap};
pub use crate::error::LoadError;
pub use crate::loader::Lexicon;
