// src/core/variants.rs
//! The four cipher variants as offset functions over the transformer

use crate::consts::{ALPHABET_LEN, ENYE_POSITION, LATIN_LEN, ROT13_SHIFT};
use crate::core::normalize::{Keyword, Shift};
use crate::core::transform::transform_with;
use crate::enums::{Algorithm, Direction};

/// A cipher with its parameters already normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cipher {
    Atbash,
    Caesar(Shift),
    Rot13,
    Vigenere(Keyword),
}

impl Cipher {
    /// Picks the variant for `algorithm`; parameters it does not use are ignored
    pub fn new(algorithm: Algorithm, shift: Option<i64>, keyword: Option<&str>) -> Self {
        match algorithm {
            Algorithm::Atbash => Cipher::Atbash,
            Algorithm::Caesar => Cipher::Caesar(Shift::resolve(shift)),
            Algorithm::Rot13 => Cipher::Rot13,
            Algorithm::Vigenere => Cipher::Vigenere(Keyword::clean(keyword)),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Cipher::Atbash => Algorithm::Atbash,
            Cipher::Caesar(_) => Algorithm::Caesar,
            Cipher::Rot13 => Algorithm::Rot13,
            Cipher::Vigenere(_) => Algorithm::Vigenere,
        }
    }

    /// Offset added to the letter at alphabet position `i`, which is the
    /// `p`-th letter of the message
    pub fn offset(&self, direction: Direction, p: usize, i: usize) -> i64 {
        match self {
            // i + (26 - 2i) = 26 - i, whatever the direction
            Cipher::Atbash => (ALPHABET_LEN as i64 - 1) - 2 * i as i64,
            Cipher::Caesar(shift) => direction.sign() * shift.get(),
            Cipher::Rot13 => rot13_offset(i),
            Cipher::Vigenere(keyword) => direction.sign() * keyword.shift_at(p),
        }
    }

    pub fn apply(&self, text: &str, direction: Direction) -> String {
        transform_with(text, |p, i| self.offset(direction, p, i))
    }
}

/// ROT13 rotates the 26 Latin letters by 13 and leaves Ñ in place.
///
/// A plain +13 over 27 symbols is not its own inverse, so Ñ is skipped
/// when counting and maps to itself. The direction is irrelevant.
fn rot13_offset(i: usize) -> i64 {
    if i == ENYE_POSITION {
        return 0;
    }
    let latin = if i > ENYE_POSITION { i - 1 } else { i };
    let rotated = (latin + ROT13_SHIFT as usize) % LATIN_LEN;
    let target = if rotated >= ENYE_POSITION {
        rotated + 1
    } else {
        rotated
    };
    target as i64 - i as i64
}

/// Atbash: `i` ↦ `26 - i`
pub fn atbash(text: &str) -> String {
    Cipher::Atbash.apply(text, Direction::Encode)
}

/// Caesar with `shift` resolved per [`Shift::resolve`]
pub fn caesar(text: &str, shift: Option<i64>, direction: Direction) -> String {
    Cipher::Caesar(Shift::resolve(shift)).apply(text, direction)
}

/// ROT13; encode and decode give the same output
pub fn rot13(text: &str, direction: Direction) -> String {
    Cipher::Rot13.apply(text, direction)
}

/// Vigenère with `keyword` cleaned per [`Keyword::clean`]
pub fn vigenere(text: &str, keyword: Option<&str>, direction: Direction) -> String {
    Cipher::Vigenere(Keyword::clean(keyword)).apply(text, direction)
}
