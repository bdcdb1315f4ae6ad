// src/lib.rs
//! classical-cipher — Atbash, Caesar, ROT13 and Vigenère over A–Z plus Ñ
//!
//! Features:
//! - 27-symbol alphabet (`A..N, Ñ, O..Z`) with true-modulo wrap-around
//! - One substitution loop shared by all four ciphers
//! - Non-letters pass through untouched and never consume a Vigenère key letter
//! - Bad shift/keyword values fall back to defaults instead of failing
//!
//! These are classroom ciphers. They provide no security at all.
//!
//! ```
//! use classical_cipher::{transform, Algorithm, Direction};
//!
//! let secret = transform("Ataque al alba", Algorithm::Vigenere, Direction::Encode, None, Some("sol"));
//! let plain = transform(&secret, Algorithm::Vigenere, Direction::Decode, None, Some("sol"));
//! assert_eq!(plain, "ATAQUE AL ALBA");
//! ```

pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;
pub mod request;

// Re-export everything users need at the crate root
pub use config::load as load_config;
pub use core::{
    atbash, caesar, is_well_formed, rot13, validate, vigenere, Cipher, Keyword,
    Result as CoreResult, Shift,
};
pub use enums::{Algorithm, Direction};
pub use error::CipherError;
pub use request::{transform, CipherRequest, CipherResult};
