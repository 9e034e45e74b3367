// tests/algorithms/base64.rs
use textcrypt::core::base64::{decode, encode};
use textcrypt::DecodeError;

#[test]
fn encode_hello_is_padded() {
    assert_eq!(encode("Hello"), "SGVsbG8=");
    assert_eq!(encode("Hi"), "SGk=");
    assert_eq!(encode(""), "");
}

#[test]
fn encode_uses_utf8_bytes() {
    assert_eq!(encode("é"), "w6k=");
    assert_eq!(decode("w6k=").unwrap(), "é");
}

#[test]
fn decode_accepts_missing_padding_and_whitespace() {
    assert_eq!(decode("SGVsbG8=").unwrap(), "Hello");
    assert_eq!(decode("SGVsbG8").unwrap(), "Hello");
    assert_eq!(decode(" SGVs\nbG8=\n").unwrap(), "Hello");
}

#[test]
fn decode_rejects_invalid_alphabet() {
    let err = decode("not-valid-base64!!").unwrap_err();
    assert!(matches!(err, DecodeError::Base64(_)));
    assert!(err.to_string().starts_with("Invalid Base64 input"));
}

#[test]
fn decode_rejects_non_utf8_bytes() {
    // 0xFF is never valid UTF-8
    let err = decode("/w==").unwrap_err();
    assert!(matches!(err, DecodeError::Utf8(_)));
    assert!(err.to_string().contains("not valid UTF-8"));
}
