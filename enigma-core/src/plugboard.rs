//! Plugboard (Steckerbrett): symmetric letter swaps at both ends of the
//! signal path.

use zeroize::Zeroize;

use crate::alphabet::{letter_index, ALPHABET_LEN};
use crate::error::{EnigmaError, Result};

/// Most cables a plugboard can hold: every letter paired.
pub const MAX_PAIRS: usize = ALPHABET_LEN / 2;

/// Swap table built from disjoint letter pairs.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
pub struct Plugboard {
    table: [u8; ALPHABET_LEN],
    pairs: usize,
}

impl Plugboard {
    /// Build a plugboard from letter pairs.
    ///
    /// Letters are case-insensitive. A letter paired with itself, a
    /// non-letter, or a letter used by two pairs is rejected.
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(pairs: &[(char, char)]) -> Result<Self> {
        let mut table = identity();
        let mut used = [false; ALPHABET_LEN];

        for &(a, b) in pairs {
            let ia = plug_index(a)?;
            let ib = plug_index(b)?;
            if ia == ib {
                return Err(EnigmaError::PlugboardSelfPair(a.to_ascii_uppercase()));
            }
            for (index, letter) in [(ia, a), (ib, b)] {
                if used[index] {
                    return Err(EnigmaError::PlugboardLetterReused(
                        letter.to_ascii_uppercase(),
                    ));
                }
                used[index] = true;
            }
            table[ia] = ib as u8;
            table[ib] = ia as u8;
        }

        Ok(Self {
            table,
            pairs: pairs.len(),
        })
    }

    /// A plugboard with no cables.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            table: identity(),
            pairs: 0,
        }
    }

    /// Partner of a letter, or the letter itself when unplugged.
    #[inline]
    #[must_use]
    pub fn swap(&self, index: usize) -> usize {
        usize::from(self.table[index])
    }

    /// Number of cables fitted.
    #[must_use]
    pub const fn pair_count(&self) -> usize {
        self.pairs
    }
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::empty()
    }
}

/// Swap a single letter against a list of pairs without building a board.
///
/// Matching ignores case and a paired letter comes back uppercase. Letters
/// in no pair, and non-letters, are returned unchanged. The pairs are not
/// validated; with overlapping pairs the first match wins.
#[must_use]
pub fn plugboard_swap(letter: char, pairs: &[(char, char)]) -> char {
    for &(a, b) in pairs {
        if letter.eq_ignore_ascii_case(&a) {
            return b.to_ascii_uppercase();
        }
        if letter.eq_ignore_ascii_case(&b) {
            return a.to_ascii_uppercase();
        }
    }
    letter
}

#[allow(clippy::cast_possible_truncation)]
fn identity() -> [u8; ALPHABET_LEN] {
    let mut table = [0u8; ALPHABET_LEN];
    for (i, slot) in table.iter_mut().enumerate() {
        *slot = i as u8;
    }
    table
}

fn plug_index(c: char) -> Result<usize> {
    letter_index(c.to_ascii_uppercase()).ok_or(EnigmaError::InvalidPlugboardLetter(c))
}
