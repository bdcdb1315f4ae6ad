// src/core/mod.rs
//! The substitution engine — pure functions, no I/O, no shared state

pub mod alphabet;
pub mod normalize;
pub mod transform;
pub mod variants;

pub use alphabet::*;
pub use normalize::*;
pub use transform::*;
pub use variants::*;

pub type Result<T> = std::result::Result<T, crate::error::CipherError>;
