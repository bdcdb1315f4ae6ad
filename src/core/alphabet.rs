// src/core/alphabet.rs
//! The fixed 27-symbol alphabet and its index math
//!
//! Positions run `0..=26` in the order of [`ALPHABET`]. All wrap-around
//! goes through [`true_mod`], so negative offsets (decoding) land back
//! inside the alphabet instead of producing a negative remainder.

use crate::consts::{ALPHABET, ALPHABET_LEN, ENYE_POSITION};

/// Mathematical modulo by the alphabet length; always in `0..27`
#[inline]
pub fn true_mod(n: i64) -> usize {
    n.rem_euclid(ALPHABET_LEN as i64) as usize
}

/// Position of an upper-case alphabet symbol, `None` for anything else
#[inline]
pub fn position_of(symbol: char) -> Option<usize> {
    match symbol {
        'A'..='N' => Some(symbol as usize - 'A' as usize),
        'Ñ' => Some(ENYE_POSITION),
        'O'..='Z' => Some(symbol as usize - 'O' as usize + ENYE_POSITION + 1),
        _ => None,
    }
}

/// Symbol at `index`, wrapped with [`true_mod`]
#[inline]
pub fn symbol_at(index: i64) -> char {
    ALPHABET[true_mod(index)]
}

/// Exact membership: only the 27 upper-case symbols
#[inline]
pub fn contains(symbol: char) -> bool {
    position_of(symbol).is_some()
}

/// Case-insensitive membership (`a`–`z` and `ñ` count as letters)
pub fn contains_ignore_case(c: char) -> bool {
    let folded = match c {
        'ñ' => 'Ñ',
        other => other.to_ascii_uppercase(),
    };
    contains(folded)
}
