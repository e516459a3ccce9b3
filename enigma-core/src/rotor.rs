//! Rotors: the catalogue of wirings and the per-machine rotor instance.
//!
//! A [`RotorDefinition`] is constant data shared by every machine. A
//! [`Rotor`] pairs a definition with the ring setting and the rotational
//! position of one physical rotor, so two machines never share mutable
//! state even when they use the same wiring.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::alphabet::{invert, shift, wiring, ALPHABET_LEN};
use crate::error::{EnigmaError, Result};

/// Immutable wiring of one rotor type.
#[derive(Debug, PartialEq, Eq)]
pub struct RotorDefinition {
    /// Catalogue name ("I" to "V").
    pub name: &'static str,
    /// Entry contact to exit contact, right-to-left pass.
    pub forward: [u8; ALPHABET_LEN],
    /// Exact inverse of `forward`, used on the return pass.
    pub backward: [u8; ALPHABET_LEN],
    /// Position at which this rotor carries the rotor on its left.
    pub notch: u8,
}

impl RotorDefinition {
    const fn new(name: &'static str, letters: &[u8; ALPHABET_LEN], notch: u8) -> Self {
        let forward = wiring(letters);
        Self {
            name,
            forward,
            backward: invert(&forward),
            notch,
        }
    }
}

/// Rotors I-V of the Enigma I, in catalogue order.
pub static CATALOGUE: [RotorDefinition; 5] = [
    RotorDefinition::new("I", b"EKMFLGDQVZNTOWYHXUSPAIBRCJ", 16),
    RotorDefinition::new("II", b"AJDKSIRUXBLHWTMCQGZNPYFVOE", 4),
    RotorDefinition::new("III", b"BDFHJLCPRTXVZNYEIWGAKMUSQO", 21),
    RotorDefinition::new("IV", b"ESOVPZJAYQUIRHXLNFTGKDCMWB", 9),
    RotorDefinition::new("V", b"VZBRGITYUPSDNHLXAWMJQOFECK", 25),
];

/// Catalogue entry selector.
///
/// Identifier `n` is `CATALOGUE[n]`, so `0, 1, 2` select rotors I, II, III.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotorKind {
    I,
    II,
    III,
    IV,
    V,
}

impl RotorKind {
    /// Every rotor in catalogue order.
    pub const ALL: [Self; 5] = [Self::I, Self::II, Self::III, Self::IV, Self::V];

    /// Catalogue index of this rotor.
    #[must_use]
    pub const fn id(self) -> usize {
        self as usize
    }

    /// Wiring shared by every rotor of this kind.
    #[must_use]
    pub fn definition(self) -> &'static RotorDefinition {
        &CATALOGUE[self.id()]
    }

    /// Roman numeral name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.definition().name
    }
}

impl TryFrom<usize> for RotorKind {
    type Error = EnigmaError;

    fn try_from(id: usize) -> Result<Self> {
        Self::ALL
            .get(id)
            .copied()
            .ok_or(EnigmaError::UnknownRotor(id))
    }
}

impl FromStr for RotorKind {
    type Err = EnigmaError;

    /// Accepts roman names (any case) or catalogue indices.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<usize>() {
            return Self::try_from(id);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EnigmaError::UnknownRotorName(trimmed.to_string()))
    }
}

impl fmt::Display for RotorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One physical rotor in a machine.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
pub struct Rotor {
    #[zeroize(skip)]
    definition: &'static RotorDefinition,
    ring_setting: usize,
    position: usize,
}

impl Rotor {
    /// Place a rotor with the given ring setting at the given position.
    ///
    /// Both values must be in `0..26`.
    pub fn new(kind: RotorKind, ring_setting: usize, position: usize) -> Result<Self> {
        if position >= ALPHABET_LEN {
            return Err(EnigmaError::PositionOutOfRange(position));
        }
        if ring_setting >= ALPHABET_LEN {
            return Err(EnigmaError::RingSettingOutOfRange(ring_setting));
        }
        Ok(Self {
            definition: kind.definition(),
            ring_setting,
            position,
        })
    }

    /// Right-to-left pass through the wiring.
    #[inline]
    #[must_use]
    pub fn forward(&self, index: usize) -> usize {
        self.through(&self.definition.forward, index)
    }

    /// Left-to-right pass through the inverse wiring.
    #[inline]
    #[must_use]
    pub fn backward(&self, index: usize) -> usize {
        self.through(&self.definition.backward, index)
    }

    fn through(&self, table: &[u8; ALPHABET_LEN], index: usize) -> usize {
        let contact = shift(index, self.position, self.ring_setting);
        let out = usize::from(table[contact]);
        shift(out, self.ring_setting, self.position)
    }

    /// Advance one position.
    #[inline]
    pub fn step(&mut self) {
        self.position = (self.position + 1) % ALPHABET_LEN;
    }

    /// Whether the rotor sits at its turnover position.
    #[inline]
    #[must_use]
    pub fn is_at_notch(&self) -> bool {
        self.position == usize::from(self.definition.notch)
    }

    /// Current rotational offset.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Ring setting.
    #[must_use]
    pub const fn ring_setting(&self) -> usize {
        self.ring_setting
    }

    pub(crate) fn set_position(&mut self, position: usize) {
        debug_assert!(position < ALPHABET_LEN);
        self.position = position;
    }

    /// Wiring this rotor was built from.
    #[must_use]
    pub const fn definition(&self) -> &'static RotorDefinition {
        self.definition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::letter_index;

    #[test]
    fn test_catalogue_tables_are_permutations() {
        for def in &CATALOGUE {
            let mut seen = [false; ALPHABET_LEN];
            for &out in &def.forward {
                assert!(!seen[out as usize], "rotor {} repeats {out}", def.name);
                seen[out as usize] = true;
            }
            for i in 0..ALPHABET_LEN {
                assert_eq!(def.backward[def.forward[i] as usize] as usize, i);
            }
        }
    }

    #[test]
    fn test_rotor_i_wiring_at_rest() {
        let rotor = Rotor::new(RotorKind::I, 0, 0).unwrap();
        assert_eq!(rotor.forward(0), letter_index('E').unwrap());
        assert_eq!(rotor.backward(letter_index('E').unwrap()), 0);
    }

    #[test]
    fn test_position_shifts_contacts() {
        // At position B the A key meets contact B, which rotor I maps to K;
        // K shifted back by one is J.
        let rotor = Rotor::new(RotorKind::I, 0, 1).unwrap();
        assert_eq!(rotor.forward(0), letter_index('J').unwrap());
    }

    #[test]
    fn test_ring_setting_cancels_position() {
        // Equal ring and position offsets leave the wiring unshifted.
        let rested = Rotor::new(RotorKind::III, 0, 0).unwrap();
        let turned = Rotor::new(RotorKind::III, 5, 5).unwrap();
        for i in 0..ALPHABET_LEN {
            assert_eq!(rested.forward(i), turned.forward(i));
        }
    }

    #[test]
    fn test_backward_inverts_forward_at_every_setting() {
        for ring in [0, 1, 13, 25] {
            for position in [0, 7, 25] {
                let rotor = Rotor::new(RotorKind::IV, ring, position).unwrap();
                for i in 0..ALPHABET_LEN {
                    assert_eq!(rotor.backward(rotor.forward(i)), i);
                }
            }
        }
    }

    #[test]
    fn test_step_wraps() {
        let mut rotor = Rotor::new(RotorKind::II, 0, 25).unwrap();
        rotor.step();
        assert_eq!(rotor.position(), 0);
    }

    #[test]
    fn test_notch_positions() {
        let cases = [
            (RotorKind::I, 'Q'),
            (RotorKind::II, 'E'),
            (RotorKind::III, 'V'),
            (RotorKind::IV, 'J'),
            (RotorKind::V, 'Z'),
        ];
        for (kind, letter) in cases {
            let at = letter_index(letter).unwrap();
            assert!(Rotor::new(kind, 0, at).unwrap().is_at_notch());
            assert!(!Rotor::new(kind, 0, (at + 1) % 26).unwrap().is_at_notch());
        }
    }

    #[test]
    fn test_out_of_range_settings_rejected() {
        assert!(matches!(
            Rotor::new(RotorKind::I, 0, 26),
            Err(EnigmaError::PositionOutOfRange(26))
        ));
        assert!(matches!(
            Rotor::new(RotorKind::I, 30, 0),
            Err(EnigmaError::RingSettingOutOfRange(30))
        ));
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("iii".parse::<RotorKind>().unwrap(), RotorKind::III);
        assert_eq!("4".parse::<RotorKind>().unwrap(), RotorKind::V);
        assert_eq!(RotorKind::try_from(0).unwrap(), RotorKind::I);
        assert!(matches!(
            RotorKind::try_from(5),
            Err(EnigmaError::UnknownRotor(5))
        ));
        assert!(matches!(
            "VI".parse::<RotorKind>(),
            Err(EnigmaError::UnknownRotorName(_))
        ));
    }
}
