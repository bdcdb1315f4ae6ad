// src/request.rs
//! Request/result contract around the engine
//!
//! [`transform`] is the single boundary presentation layers call. It
//! always succeeds. [`CipherRequest::execute_checked`] adds the caller-side
//! checks a form would do first: trim, refuse empty messages and,
//! optionally, refuse anything but letters and spaces.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::{Defaults, InputPolicy};
use crate::core::normalize::validate;
use crate::core::variants::Cipher;
use crate::core::Result;
use crate::enums::{Algorithm, Direction};
use crate::error::CipherError;

/// Run `algorithm` over `text`
///
/// `shift` is only read by Caesar and `keyword` only by Vigenère. Bad
/// values fall back to shift 3 / keyword `"A"` instead of failing.
pub fn transform(
    text: &str,
    algorithm: Algorithm,
    direction: Direction,
    shift: Option<i64>,
    keyword: Option<&str>,
) -> String {
    trace!(%algorithm, %direction, chars = text.chars().count(), "transform");
    Cipher::new(algorithm, shift, keyword).apply(text, direction)
}

/// One transformation call, built fresh for every message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherRequest {
    pub text: String,
    pub algorithm: Algorithm,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub shift: Option<i64>,
    #[serde(default)]
    pub keyword: Option<String>,
}

impl CipherRequest {
    pub fn new(text: impl Into<String>, algorithm: Algorithm) -> Self {
        Self {
            text: text.into(),
            algorithm,
            direction: Direction::Encode,
            shift: None,
            keyword: None,
        }
    }

    /// Request pre-filled from the `[defaults]` config table
    pub fn from_defaults(text: impl Into<String>, defaults: &Defaults) -> Self {
        Self {
            text: text.into(),
            algorithm: defaults.algorithm,
            direction: defaults.direction,
            shift: defaults.shift,
            keyword: defaults.keyword.clone(),
        }
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn shift(mut self, shift: i64) -> Self {
        self.shift = Some(shift);
        self
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Normalized cipher this request resolves to
    pub fn cipher(&self) -> Cipher {
        Cipher::new(self.algorithm, self.shift, self.keyword.as_deref())
    }

    /// Transform the text as-is; never fails
    pub fn execute(&self) -> CipherResult {
        CipherResult {
            text: transform(
                &self.text,
                self.algorithm,
                self.direction,
                self.shift,
                self.keyword.as_deref(),
            ),
            algorithm: self.algorithm,
            direction: self.direction,
        }
    }

    /// Apply `policy` to the message first, then transform
    ///
    /// # Errors
    /// - [`CipherError::EmptyMessage`] if nothing is left to transform
    /// - [`CipherError::InvalidCharacter`] in strict mode, for the first
    ///   character that is neither a letter nor whitespace
    pub fn execute_checked(&self, policy: &InputPolicy) -> Result<CipherResult> {
        let message = if policy.trim {
            self.text.trim()
        } else {
            self.text.as_str()
        };

        if message.is_empty() {
            return Err(CipherError::EmptyMessage);
        }
        if policy.strict {
            validate(message)?;
        }

        Ok(CipherResult {
            text: transform(
                message,
                self.algorithm,
                self.direction,
                self.shift,
                self.keyword.as_deref(),
            ),
            algorithm: self.algorithm,
            direction: self.direction,
        })
    }
}

/// Output of one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherResult {
    pub text: String,
    pub algorithm: Algorithm,
    pub direction: Direction,
}

impl CipherResult {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl std::fmt::Display for CipherResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
