// src/core/transform.rs
//! The generic substitution loop
//!
//! Every cipher in this crate is a single pass over the upper-cased text.
//! Alphabet letters are moved by an offset, everything else is copied
//! through. The offset function sees two values:
//!
//! - `p`: how many alphabet letters came before this one. Spaces,
//!   digits and punctuation never advance it.
//! - `i`: the letter's own position in the alphabet.

use crate::core::alphabet::{position_of, symbol_at};

/// Upper-case `text` and substitute each alphabet letter by
/// `symbol_at(i + offset(p, i))`
///
/// The output has exactly as many `char`s as `text.to_uppercase()`.
pub fn transform_with<F>(text: &str, mut offset: F) -> String
where
    F: FnMut(usize, usize) -> i64,
{
    let upper = text.to_uppercase();
    let mut out = String::with_capacity(upper.len());
    let mut p = 0usize;

    for c in upper.chars() {
        match position_of(c) {
            Some(i) => {
                out.push(symbol_at(i as i64 + offset(p, i)));
                p += 1;
            }
            None => out.push(c),
        }
    }

    out
}
