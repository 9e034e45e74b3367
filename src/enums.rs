// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible choices: which algorithm
//! and which direction a request runs in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported text transforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Base64,
    Rot13,
    Caesar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Base64, Algorithm::Rot13, Algorithm::Caesar];

    /// Name as submitted by the form (`base64`, `rot13`, `caesar`)
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Base64 => "base64",
            Algorithm::Rot13 => "rot13",
            Algorithm::Caesar => "caesar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm `{0}`")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|algo| algo.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseAlgorithmError(s.to_owned()))
    }
}

/// Which way a request runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    pub fn verb(self) -> &'static str {
        match self {
            Direction::Encrypt => "encrypt",
            Direction::Decrypt => "decrypt",
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            Direction::Encrypt => "encryption",
            Direction::Decrypt => "decryption",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}
