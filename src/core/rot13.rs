// src/core/rot13.rs
//! ROT13: rotate basic Latin letters by 13, leave everything else alone

const ROTATION: u8 = 13;

/// Apply ROT13. The transform is its own inverse.
pub fn apply(text: &str) -> String {
    text.chars().map(rotate).collect()
}

fn rotate(c: char) -> char {
    let base = match c {
        'A'..='Z' => b'A',
        'a'..='z' => b'a',
        _ => return c,
    };
    (((c as u8 - base + ROTATION) % 26) + base) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_wraps_at_end_of_alphabet() {
        assert_eq!(rotate('z'), 'm');
        assert_eq!(rotate('N'), 'A');
        assert_eq!(rotate('ä'), 'ä');
    }
}
