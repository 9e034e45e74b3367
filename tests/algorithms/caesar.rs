// tests/algorithms/caesar.rs
use textcrypt::core::caesar::{apply, decrypt, encrypt};

#[test]
fn shifts_code_points_without_alphabet_wrap() {
    assert_eq!(encrypt("abc", 3).unwrap(), "def");
    assert_eq!(encrypt("xyz", 3).unwrap(), "{|}");
    assert_eq!(encrypt("A b", 1).unwrap(), "B!c");
}

#[test]
fn decrypt_is_negative_shift() {
    assert_eq!(decrypt("def", 3).unwrap(), "abc");
    assert_eq!(apply("def", -3, false).unwrap(), decrypt("def", 3).unwrap());
}

#[test]
fn zero_shift_is_identity() {
    assert_eq!(encrypt("unchanged ✓", 0).unwrap(), "unchanged ✓");
}

#[test]
fn negative_shift_below_nul_still_round_trips() {
    let text = "\u{0}\u{1}ab";
    let shifted = encrypt(text, -5).unwrap();
    assert_eq!(decrypt(&shifted, -5).unwrap(), text);
}

#[test]
fn shift_over_the_surrogate_block_is_plain_addition() {
    // 'a' + 0xDF9F is U+E000, the first scalar after the surrogates
    assert_eq!(encrypt("a", 0xDF9F).unwrap(), "\u{E000}");
    assert_eq!(decrypt("\u{E000}", 0xDF9F).unwrap(), "a");
    assert_eq!(encrypt("\u{E001}", 2).unwrap(), "\u{E003}");
}

#[test]
fn targets_inside_the_surrogate_block_are_remapped_and_round_trip() {
    // U+D7FE + 2 is a surrogate; it takes the first scalar nothing else hits
    let text = "\u{D7FE}\u{E001}";
    let shifted = encrypt(text, 2).unwrap();
    assert_eq!(shifted, "\u{0}\u{E003}");
    assert_eq!(decrypt(&shifted, 2).unwrap(), text);
}

#[test]
fn shifting_past_the_last_scalar_round_trips() {
    let text = "\u{10FFFF}\u{10FFFE}x";
    let shifted = encrypt(text, 5).unwrap();
    assert_eq!(shifted.chars().last(), Some('}'));
    assert_eq!(decrypt(&shifted, 5).unwrap(), text);
}

#[test]
fn extreme_shifts_round_trip() {
    let text = "Hello, мир!";
    for shift in [i64::MIN, i64::MIN + 1, -1_000_000, 26, 27, 1_000_000, i64::MAX] {
        let shifted = encrypt(text, shift).unwrap();
        assert_eq!(decrypt(&shifted, shift).unwrap(), text, "shift {shift}");
    }
}
