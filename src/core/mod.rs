pub mod alphabet;
pub mod dictionary;
pub mod engine;
pub mod exceptions;
pub mod resolver;
pub mod scanner;
pub mod trie;
pub mod types;
