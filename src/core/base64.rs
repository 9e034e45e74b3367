// src/core/base64.rs
//! Base64 codec over UTF-8 text
//!
//! Encoding always uses the canonical padded alphabet. Decoding accepts
//! input with or without padding, ignores ASCII whitespace and tolerates
//! non-zero trailing bits, then validates the bytes as UTF-8.

use base64::alphabet;
use base64::engine::general_purpose::STANDARD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

use crate::error::DecodeError;

/// Standard alphabet, lenient about padding and trailing bits
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Encode the UTF-8 bytes of `text` as padded standard Base64
pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode Base64 back into a UTF-8 string
pub fn decode(text: &str) -> Result<String, DecodeError> {
    let compact = strip_whitespace(text);
    let bytes = LENIENT.decode(compact.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_whitespace()).collect()
}
