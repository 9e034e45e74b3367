// src/engine.rs
//! Transform engine: validation and dispatch for encrypt/decrypt
//!
//! A [`Request`] carries raw form input. [`validate`] turns it into a
//! typed [`Plan`], [`transform`] runs the plan, and [`encrypt`] /
//! [`decrypt`] wrap the result as an [`Outcome`] that never escapes as
//! an error or panic.

use std::panic;

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::{base64, caesar, rot13};
use crate::enums::{Algorithm, Direction};
use crate::error::{Result, TransformError};

#[cfg(feature = "logging")]
use tracing::{debug, error, warn};

/// Raw form input for one transform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub text: String,
    pub algorithm: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "shift_from_str_or_int"
    )]
    pub shift: Option<String>,
}

impl Request {
    pub fn new(text: impl Into<String>, algorithm: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            algorithm: algorithm.into(),
            shift: None,
        }
    }

    pub fn with_shift(mut self, shift: impl ToString) -> Self {
        self.shift = Some(shift.to_string());
        self
    }
}

/// Form payloads send the shift as a string; JSON clients may send a number.
fn shift_from_str_or_int<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Text(String),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Int(n) => n.to_string(),
        Raw::Text(s) => s,
    }))
}

/// A fully validated algorithm choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cipher {
    Base64,
    Rot13,
    Caesar { shift: i64 },
}

impl Cipher {
    pub fn algorithm(self) -> Algorithm {
        match self {
            Cipher::Base64 => Algorithm::Base64,
            Cipher::Rot13 => Algorithm::Rot13,
            Cipher::Caesar { .. } => Algorithm::Caesar,
        }
    }
}

/// Output of [`validate`]: what to run, and which way
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub cipher: Cipher,
    pub direction: Direction,
}

/// Result of one request. Exactly one of result/error, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "result")]
    Success(String),
    #[serde(rename = "error")]
    Failure(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn result(&self) -> Option<&str> {
        match self {
            Outcome::Success(text) => Some(text),
            Outcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(message) => Some(message),
        }
    }
}

impl From<Result<String>> for Outcome {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(text) => Outcome::Success(text),
            Err(err) => Outcome::Failure(err.to_string()),
        }
    }
}

/// Check text, algorithm and shift in that order.
pub fn validate(request: &Request, direction: Direction) -> Result<Plan> {
    if request.text.is_empty() {
        return Err(TransformError::EmptyInput(direction));
    }

    let algorithm: Algorithm = request.algorithm.parse().map_err(|_| {
        TransformError::UnknownAlgorithm {
            direction,
            name: request.algorithm.clone(),
        }
    })?;

    let cipher = match algorithm {
        Algorithm::Base64 => Cipher::Base64,
        Algorithm::Rot13 => Cipher::Rot13,
        Algorithm::Caesar => Cipher::Caesar {
            shift: parse_shift(request.shift.as_deref())?,
        },
    };

    Ok(Plan { cipher, direction })
}

/// Parse a form shift value as a signed integer
pub fn parse_shift(raw: Option<&str>) -> Result<i64> {
    let raw = raw.ok_or(TransformError::InvalidShift(None))?;
    raw.trim()
        .parse::<i64>()
        .map_err(|_| TransformError::InvalidShift(Some(raw.to_owned())))
}

/// Run a validated plan. Pure: identical input gives identical output.
pub fn run(plan: Plan, text: &str) -> Result<String> {
    let Plan { cipher, direction } = plan;
    match (cipher, direction) {
        (Cipher::Base64, Direction::Encrypt) => Ok(base64::encode(text)),
        (Cipher::Base64, Direction::Decrypt) => Ok(base64::decode(text)?),
        (Cipher::Rot13, _) => Ok(rot13::apply(text)),
        (Cipher::Caesar { shift }, _) => {
            caesar::apply(text, shift, direction == Direction::Decrypt)
                .ok_or(TransformError::Generic(direction))
        }
    }
}

/// Validate and run a request, surfacing typed errors.
///
/// A panic inside the algorithm is caught and reported as
/// [`TransformError::Generic`].
pub fn transform(request: &Request, direction: Direction) -> Result<String> {
    let plan = validate(request, direction).inspect_err(|_err| {
        #[cfg(feature = "logging")]
        warn!(%direction, error = %_err, "request rejected");
    })?;

    #[cfg(feature = "logging")]
    debug!(
        algorithm = %plan.cipher.algorithm(),
        %direction,
        input_len = request.text.len(),
        "dispatching transform"
    );

    let text = request.text.as_str();
    match panic::catch_unwind(|| run(plan, text)) {
        Ok(result) => result,
        Err(_) => {
            #[cfg(feature = "logging")]
            error!(algorithm = %plan.cipher.algorithm(), %direction, "transform panicked");
            Err(TransformError::Generic(direction))
        }
    }
}

pub fn try_encrypt(request: &Request) -> Result<String> {
    transform(request, Direction::Encrypt)
}

pub fn try_decrypt(request: &Request) -> Result<String> {
    transform(request, Direction::Decrypt)
}

/// Encrypt entry point for the presentation layer
pub fn encrypt(request: &Request) -> Outcome {
    try_encrypt(request).into()
}

/// Decrypt entry point for the presentation layer
pub fn decrypt(request: &Request) -> Outcome {
    try_decrypt(request).into()
}
