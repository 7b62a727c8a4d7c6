//! ICAO 9303 check digits.
//!
//! Each character maps to a numeric value (digit as itself, `A`..`Z` as
//! 10..35, filler and anything else as 0), is multiplied by a weight cycling
//! 7, 3, 1 over successive positions, and the sum is taken modulo 10.

const WEIGHTS: [u32; 3] = [7, 3, 1];

fn char_value(c: char) -> u32 {
    match c {
        '0'..='9' => c as u32 - '0' as u32,
        'A'..='Z' => c as u32 - 'A' as u32 + 10,
        _ => 0,
    }
}

/// Computes the check digit (0..=9) of a fragment.
pub fn compute_check_digit(fragment: &str) -> u8 {
    let sum: u32 = fragment
        .chars()
        .enumerate()
        .map(|(i, c)| char_value(c) * WEIGHTS[i % 3])
        .sum();
    (sum % 10) as u8
}

/// Computes the check digit of a fragment as its MRZ character.
pub fn check_digit_char(fragment: &str) -> char {
    char::from(b'0' + compute_check_digit(fragment))
}

/// Recomputes the check digit of a fragment and compares it against the
/// printed character.
///
/// A filler `<` in the check-digit position means the document carries no
/// check digit there; this reports `false` rather than an error, as does any
/// other non-digit character.
pub fn validate_check_digit(fragment: &str, expected: char) -> bool {
    expected.is_ascii_digit() && check_digit_char(fragment) == expected
}
