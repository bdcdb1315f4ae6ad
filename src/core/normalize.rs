// src/core/normalize.rs
//! Input normalization — validation, keyword cleanup, shift resolution
//!
//! Nothing here is consulted by the transformer on its own. Validation
//! is advisory: callers that want strict rejection call [`validate`]
//! themselves (or go through `CipherRequest::execute_checked`).
//!
//! Shift and keyword never produce errors. Bad values silently become
//! the documented defaults: shift `3`, keyword `"A"`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{DEFAULT_SHIFT, FALLBACK_KEYWORD, MAX_SHIFT, MIN_SHIFT};
use crate::core::alphabet::{contains, contains_ignore_case, position_of};
use crate::core::Result;
use crate::error::CipherError;

/// Whitespace as matched by `\s` in browser regexes (ECMAScript
/// `WhiteSpace` + `LineTerminator`). Unlike [`char::is_whitespace`] it
/// accepts U+FEFF and rejects U+0085.
fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// `true` iff every character is whitespace or an alphabet letter (any case)
pub fn is_well_formed(text: &str) -> bool {
    text.chars().all(|c| is_space(c) || contains_ignore_case(c))
}

/// Like [`is_well_formed`], but reports the first offending character
///
/// `index` counts characters, not bytes.
pub fn validate(text: &str) -> Result<()> {
    match text
        .chars()
        .enumerate()
        .find(|&(_, c)| !(is_space(c) || contains_ignore_case(c)))
    {
        Some((index, ch)) => Err(CipherError::InvalidCharacter { ch, index }),
        None => Ok(()),
    }
}

/// Caesar shift, always within `1..=25`
///
/// Deserializes from an optional integer through [`Shift::resolve`], so
/// `99` or `null` become 3 just like any other bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<i64>")]
pub struct Shift(i64);

impl Shift {
    /// Accepts `value` if it is within `1..=25`, otherwise falls back to 3
    pub fn resolve(value: Option<i64>) -> Self {
        match value {
            Some(v) if (MIN_SHIFT..=MAX_SHIFT).contains(&v) => Shift(v),
            Some(v) => {
                debug!(shift = v, fallback = DEFAULT_SHIFT, "shift out of range");
                Shift(DEFAULT_SHIFT)
            }
            None => Shift(DEFAULT_SHIFT),
        }
    }

    /// Parses raw user input; non-numeric input falls back to 3
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match raw.trim().parse::<i64>() {
            Ok(v) => Self::resolve(Some(v)),
            Err(_) => {
                debug!(raw, fallback = DEFAULT_SHIFT, "shift is not an integer");
                Self::default()
            }
        }
    }

    #[inline]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<Option<i64>> for Shift {
    fn from(value: Option<i64>) -> Self {
        Self::resolve(value)
    }
}

impl Default for Shift {
    fn default() -> Self {
        Shift(DEFAULT_SHIFT)
    }
}

/// Cleaned Vigenère keyword: upper-case alphabet symbols only, never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    text: String,
    shifts: Vec<i64>,
}

impl Keyword {
    /// Upper-cases `raw` and drops every non-alphabet character.
    /// An empty result (or `None`) becomes the zero-shift keyword `"A"`.
    pub fn clean(raw: Option<&str>) -> Self {
        let text: String = raw
            .unwrap_or_default()
            .to_uppercase()
            .chars()
            .filter(|&c| contains(c))
            .collect();

        if text.is_empty() {
            if raw.is_some_and(|r| !r.is_empty()) {
                debug!(fallback = FALLBACK_KEYWORD, "keyword has no alphabet letters");
            }
            return Self::from_symbols(FALLBACK_KEYWORD.to_owned());
        }
        Self::from_symbols(text)
    }

    fn from_symbols(text: String) -> Self {
        let shifts = text
            .chars()
            .filter_map(position_of)
            .map(|i| i as i64)
            .collect();
        Keyword { text, shifts }
    }

    /// The cleaned keyword
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of letters in the keyword (at least 1)
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Always false: cleanup never leaves a keyword empty
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Shift for the `p`-th letter of the message, cycling over the keyword
    #[inline]
    pub fn shift_at(&self, p: usize) -> i64 {
        self.shifts[p % self.shifts.len()]
    }
}

impl Default for Keyword {
    fn default() -> Self {
        Self::clean(None)
    }
}
