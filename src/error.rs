// src/error.rs
//! Public error types for the entire crate

use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

use crate::consts::{DECRYPT_FAILED_MSG, ENCRYPT_FAILED_MSG, INVALID_SHIFT_MSG};
use crate::enums::Direction;

pub type Result<T> = std::result::Result<T, TransformError>;

/// Everything that can go wrong turning a request into output text.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Please provide text to {0}.")]
    EmptyInput(Direction),

    #[error("Invalid {} algorithm.", .direction.noun())]
    UnknownAlgorithm { direction: Direction, name: String },

    #[error("{}", INVALID_SHIFT_MSG)]
    InvalidShift(Option<String>),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("{}", generic_message(.0))]
    Generic(Direction),
}

/// Base64 decode failures, kept separate so the cause reaches the user
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Invalid Base64 input: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Decoded Base64 is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Stable classification of [`TransformError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyInput,
    UnknownAlgorithm,
    InvalidShift,
    Decode,
    Generic,
}

impl TransformError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransformError::EmptyInput(_) => ErrorKind::EmptyInput,
            TransformError::UnknownAlgorithm { .. } => ErrorKind::UnknownAlgorithm,
            TransformError::InvalidShift(_) => ErrorKind::InvalidShift,
            TransformError::Decode(_) => ErrorKind::Decode,
            TransformError::Generic(_) => ErrorKind::Generic,
        }
    }
}

fn generic_message(direction: &Direction) -> &'static str {
    match direction {
        Direction::Encrypt => ENCRYPT_FAILED_MSG,
        Direction::Decrypt => DECRYPT_FAILED_MSG,
    }
}

/// Failures reading an explicit config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in config: {0}")]
    Toml(#[from] toml::de::Error),
}
