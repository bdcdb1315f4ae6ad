// src/error.rs
//! Public error type for the entire crate
//!
//! The cipher engine itself never fails. These errors come from the
//! layers around it: name parsing, the checked request flow and config.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("unknown algorithm '{0}' (expected atbash, caesar, rot13 or vigenere)")]
    UnknownAlgorithm(String),

    #[error("unknown direction '{0}' (expected encode or decode)")]
    UnknownDirection(String),

    #[error("message is empty")]
    EmptyMessage,

    #[error("invalid character {ch:?} at position {index}: only letters and spaces are allowed")]
    InvalidCharacter { ch: char, index: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),
}
