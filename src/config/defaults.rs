// src/config/defaults.rs
use crate::config::app::{Defaults, Ui};
use crate::consts::{DEFAULT_DELAY_MS, DEFAULT_SHIFT};
use crate::enums::Algorithm;

pub fn default_defaults() -> Defaults {
    Defaults {
        algorithm: Algorithm::default(),
        shift: DEFAULT_SHIFT,
    }
}

pub fn default_ui() -> Ui {
    Ui {
        delay_ms: DEFAULT_DELAY_MS,
        json: false,
    }
}
