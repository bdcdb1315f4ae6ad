// src/config/mod.rs
//! Configuration system for classical-cipher
//!
//! Central, lazy-loaded global config with TOML + env override of the path.
//! Only callers (the CLI, applications) read it; the engine never does.

pub use app::{config_path, load, load_from, Config, Defaults, InputPolicy};

mod app;
mod defaults;
