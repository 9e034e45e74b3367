// tests/algorithms/rot13.rs
use textcrypt::core::rot13::apply;

#[test]
fn rotates_both_cases() {
    assert_eq!(apply("Attack at dawn"), "Nggnpx ng qnja");
    assert_eq!(apply("ABCXYZ abcxyz"), "NOPKLM nopklm");
}

#[test]
fn leaves_non_latin_untouched() {
    let text = "123 !?\t日本語 Ωmega ß";
    let expected = "123 !?\t日本語 Ωzrtn ß";
    assert_eq!(apply(text), expected);
}

#[test]
fn applying_twice_is_identity() {
    let text = "The Quick Brown Fox, 2024!";
    assert_eq!(apply(&apply(text)), text);
}
