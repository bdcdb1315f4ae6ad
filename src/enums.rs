// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible choices: which cipher to run
//! and in which direction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CipherError;

/// Supported substitution ciphers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Atbash,
    Caesar,
    Rot13,
    Vigenere,
}

impl Algorithm {
    /// Every algorithm, in menu order
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Atbash,
        Algorithm::Caesar,
        Algorithm::Rot13,
        Algorithm::Vigenere,
    ];

    /// Canonical lowercase name, as accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Atbash => "atbash",
            Algorithm::Caesar => "caesar",
            Algorithm::Rot13 => "rot13",
            Algorithm::Vigenere => "vigenere",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Algorithm::Atbash => "Atbash cipher",
            Algorithm::Caesar => "Caesar cipher",
            Algorithm::Rot13 => "ROT13",
            Algorithm::Vigenere => "Vigenère cipher",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Algorithm::Atbash => "Reverses the alphabet: the first letter becomes the last.",
            Algorithm::Caesar => "Shifts every letter a fixed number of positions.",
            Algorithm::Rot13 => "Swaps each Latin letter with the one 13 places away; Ñ stays.",
            Algorithm::Vigenere => "Uses a keyword for a variable, per-letter shift.",
        }
    }

    pub fn example(self) -> &'static str {
        match self {
            Algorithm::Atbash => "A ↔ Z, B ↔ Y",
            Algorithm::Caesar => "A → D (+3)",
            Algorithm::Rot13 => "A ↔ N",
            Algorithm::Vigenere => "Keyword \"SOL\": A → S",
        }
    }

    /// Whether the Caesar shift parameter is read
    pub fn uses_shift(self) -> bool {
        matches!(self, Algorithm::Caesar)
    }

    /// Whether the Vigenère keyword parameter is read
    pub fn uses_keyword(self) -> bool {
        matches!(self, Algorithm::Vigenere)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "atbash" => Ok(Algorithm::Atbash),
            "caesar" | "cesar" | "césar" => Ok(Algorithm::Caesar),
            "rot13" | "rot-13" => Ok(Algorithm::Rot13),
            "vigenere" | "vigenère" => Ok(Algorithm::Vigenere),
            _ => Err(CipherError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

/// Transformation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Encode,
    Decode,
}

impl Direction {
    pub fn name(self) -> &'static str {
        match self {
            Direction::Encode => "encode",
            Direction::Decode => "decode",
        }
    }

    /// `+1` for encoding, `-1` for decoding
    pub fn sign(self) -> i64 {
        match self {
            Direction::Encode => 1,
            Direction::Decode => -1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "encode" | "encrypt" | "enc" | "e" => Ok(Direction::Encode),
            "decode" | "decrypt" | "dec" | "d" => Ok(Direction::Decode),
            _ => Err(CipherError::UnknownDirection(s.to_owned())),
        }
    }
}
