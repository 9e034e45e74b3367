// src/config/mod.rs
//! Configuration system for textcrypt
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{config_path, load, load_uncached, Config, Defaults, Ui};

mod app;
mod defaults;
