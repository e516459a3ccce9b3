//! The 26-letter alphabet and index conversions.
//!
//! Everything inside the machine works on indices `0..26`; letters only
//! appear at the edges.

// Indices are always below 26
#![allow(clippy::cast_possible_truncation)]

/// Number of letters on the keyboard and contacts on every rotor.
pub const ALPHABET_LEN: usize = 26;

/// Index of an uppercase ASCII letter, `None` for anything else.
#[must_use]
pub const fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_uppercase() {
        Some(c as usize - 'A' as usize)
    } else {
        None
    }
}

/// Letter for an index.
///
/// # Panics
/// Panics if `index >= 26`; indices come from internal tables only.
#[must_use]
pub fn index_letter(index: usize) -> char {
    assert!(index < ALPHABET_LEN, "letter index {index} out of range");
    char::from(b'A' + index as u8)
}

/// Convert a 26-letter wiring string into an index table.
pub(crate) const fn wiring(letters: &[u8; ALPHABET_LEN]) -> [u8; ALPHABET_LEN] {
    let mut table = [0u8; ALPHABET_LEN];
    let mut i = 0;
    while i < ALPHABET_LEN {
        table[i] = letters[i] - b'A';
        i += 1;
    }
    table
}

/// Inverse of a permutation table.
pub(crate) const fn invert(table: &[u8; ALPHABET_LEN]) -> [u8; ALPHABET_LEN] {
    let mut inverse = [0u8; ALPHABET_LEN];
    let mut i = 0;
    while i < ALPHABET_LEN {
        inverse[table[i] as usize] = i as u8;
        i += 1;
    }
    inverse
}

/// `(a + b - c) mod 26` without leaving unsigned arithmetic.
#[inline]
pub(crate) const fn shift(a: usize, b: usize, c: usize) -> usize {
    (a + b + ALPHABET_LEN - c) % ALPHABET_LEN
}
