// src/core/caesar.rs
//! Caesar cipher over Unicode code points
//!
//! Unlike ROT13 this does not wrap inside a 26-letter alphabet: every
//! character's code point moves by `shift`, so `abc` shifted by 3 is
//! `def` and `z` shifted by 1 is `{`. Large shifts can land in
//! unprintable ranges; only exact invertibility is guaranteed.
//!
//! A character whose `code + shift` is a valid scalar value always maps
//! there. The few characters whose target would be a surrogate, negative
//! or past `U+10FFFF` are matched, in code-point order, with the scalars
//! nothing else maps to. Running the same rule with `-shift` is the exact
//! inverse.

/// Half-open code point range
type Span = (i64, i64);

/// One past `U+10FFFF`
const SCALAR_END: i64 = 0x11_0000;

/// `U+D800..=U+DFFF`
const SURROGATES: Span = (0xD800, 0xE000);

const SCALARS: [Span; 2] = [(0, SURROGATES.0), (SURROGATES.1, SCALAR_END)];

/// Shift every character by `shift`, or by `-shift` when `inverse` is set.
///
/// Returns `None` only if a remapped character fails to land on a
/// `char`, which the leftover bookkeeping rules out.
pub fn apply(text: &str, shift: i64, inverse: bool) -> Option<String> {
    // i64::MIN has no negation; any shift that large is the identity anyway
    let shift = if inverse {
        shift.checked_neg().unwrap_or(i64::MAX)
    } else {
        shift
    };
    let map = ShiftMap::new(shift);
    text.chars().map(|c| map.shift_char(c)).collect()
}

pub fn encrypt(text: &str, shift: i64) -> Option<String> {
    apply(text, shift, false)
}

pub fn decrypt(text: &str, shift: i64) -> Option<String> {
    apply(text, shift, true)
}

/// Bijection on scalar values for one shift
struct ShiftMap {
    shift: i64,
    /// Sources whose `code + shift` is not a scalar
    leftovers: Vec<Span>,
    /// Scalars no direct shift lands on
    targets: Vec<Span>,
}

impl ShiftMap {
    fn new(shift: i64) -> Self {
        let direct = if shift.unsigned_abs() < SCALAR_END as u64 {
            intersect(&SCALARS, &offset(&SCALARS, -shift))
        } else {
            Vec::new()
        };
        let leftovers = subtract(&SCALARS, &direct);
        let targets = subtract(&SCALARS, &offset(&direct, shift));
        Self {
            shift,
            leftovers,
            targets,
        }
    }

    fn shift_char(&self, c: char) -> Option<char> {
        let cp = i64::from(u32::from(c));
        let moved = match cp.checked_add(self.shift).filter(|&t| is_scalar(t)) {
            Some(target) => target,
            None => nth(&self.targets, rank(&self.leftovers, cp)?)?,
        };
        u32::try_from(moved).ok().and_then(char::from_u32)
    }
}

fn is_scalar(cp: i64) -> bool {
    (0..SCALAR_END).contains(&cp) && !(SURROGATES.0..SURROGATES.1).contains(&cp)
}

fn offset(spans: &[Span], by: i64) -> Vec<Span> {
    spans.iter().map(|&(s, e)| (s + by, e + by)).collect()
}

/// Both inputs sorted and disjoint; so is the output
fn intersect(a: &[Span], b: &[Span]) -> Vec<Span> {
    let mut out: Vec<Span> = a
        .iter()
        .flat_map(|&(a0, a1)| b.iter().map(move |&(b0, b1)| (a0.max(b0), a1.min(b1))))
        .filter(|&(s, e)| s < e)
        .collect();
    out.sort_unstable();
    out
}

/// `from` minus `cut`; `cut` must be sorted and disjoint
fn subtract(from: &[Span], cut: &[Span]) -> Vec<Span> {
    let mut out = Vec::new();
    for &(mut start, end) in from {
        for &(cs, ce) in cut {
            if ce <= start || cs >= end {
                continue;
            }
            if cs > start {
                out.push((start, cs));
            }
            start = start.max(ce);
        }
        if start < end {
            out.push((start, end));
        }
    }
    out
}

/// Position of `cp` within the sorted spans
fn rank(spans: &[Span], cp: i64) -> Option<i64> {
    let mut before = 0;
    for &(s, e) in spans {
        if cp < s {
            return None;
        }
        if cp < e {
            return Some(before + cp - s);
        }
        before += e - s;
    }
    None
}

/// The `k`-th code point across the sorted spans
fn nth(spans: &[Span], mut k: i64) -> Option<i64> {
    for &(s, e) in spans {
        if k < e - s {
            return Some(s + k);
        }
        k -= e - s;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_targets_keep_plain_code_point_arithmetic() {
        let map = ShiftMap::new(0xDF9F);
        assert_eq!(map.shift_char('a'), Some('\u{E000}'));
        assert_eq!(ShiftMap::new(3).shift_char('x'), Some('{'));
    }

    #[test]
    fn leftovers_pair_with_unused_targets_in_order() {
        let map = ShiftMap::new(1);
        assert_eq!(map.leftovers, vec![(0xD7FF, 0xD800), (0x10_FFFF, SCALAR_END)]);
        assert_eq!(map.targets, vec![(0, 1), (0xE000, 0xE001)]);
        assert_eq!(map.shift_char('\u{D7FF}'), Some('\0'));
        assert_eq!(map.shift_char(char::MAX), Some('\u{E000}'));
    }

    #[test]
    fn out_of_range_shift_is_identity() {
        let map = ShiftMap::new(SCALAR_END);
        assert_eq!(map.leftovers, map.targets);
        assert_eq!(map.shift_char('q'), Some('q'));
        assert_eq!(ShiftMap::new(i64::MIN).shift_char(char::MAX), Some(char::MAX));
    }

    #[test]
    fn rank_and_nth_agree() {
        let spans = [(2, 4), (10, 12)];
        assert_eq!(rank(&spans, 11), Some(3));
        assert_eq!(nth(&spans, 3), Some(11));
        assert_eq!(rank(&spans, 5), None);
        assert_eq!(nth(&spans, 4), None);
    }
}
