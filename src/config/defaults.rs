// src/config/defaults.rs
use crate::config::app::{Defaults, InputPolicy};
use crate::consts::DEFAULT_SHIFT;
use crate::enums::{Algorithm, Direction};

pub fn default_defaults() -> Defaults {
    Defaults {
        algorithm: Algorithm::Atbash,
        direction: Direction::Encode,
        shift: Some(DEFAULT_SHIFT),
        keyword: None,
    }
}

pub fn default_input() -> InputPolicy {
    InputPolicy {
        trim: true,
        strict: false,
    }
}
