//! The assembled machine: stepping, signal path and message processing.

use tracing::{debug, trace};
use zeroize::Zeroize;

use crate::alphabet::{index_letter, letter_index};
use crate::error::{EnigmaError, Result};
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::{Rotor, RotorKind};
use crate::stepping;

/// Rotor cipher machine.
///
/// Rotors are held left to right as seen by the operator. The only state
/// that changes after construction is the rotor positions, which advance
/// once per letter processed. Enciphering is its own inverse: a second
/// machine with the same settings turns the ciphertext back into the
/// plaintext.
///
/// Rotor positions, ring settings and plugboard wiring form the daily key
/// and are zeroized when the machine is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
pub struct EnigmaMachine {
    rotors: Vec<Rotor>,
    #[zeroize(skip)]
    reflector: Reflector,
    plugboard: Plugboard,
    initial_positions: Vec<usize>,
}

impl EnigmaMachine {
    /// Build a machine from catalogue identifiers and settings.
    ///
    /// `rotor_ids`, `positions` and `ring_settings` are left to right and
    /// must have the same length. Identifier `n` selects the `n`th catalogue
    /// rotor (`0, 1, 2` are rotors I, II, III).
    ///
    /// # Example
    /// ```
    /// use enigma_core::EnigmaMachine;
    ///
    /// let mut sender = EnigmaMachine::new(&[0, 1, 2], &[0, 0, 0], &[0, 0, 0], &[('A', 'B')])?;
    /// let mut receiver = EnigmaMachine::new(&[0, 1, 2], &[0, 0, 0], &[0, 0, 0], &[('A', 'B')])?;
    ///
    /// let ciphertext = sender.process("HELLO");
    /// assert_eq!(receiver.process(&ciphertext), "HELLO");
    /// # Ok::<(), enigma_core::EnigmaError>(())
    /// ```
    pub fn new(
        rotor_ids: &[usize],
        positions: &[usize],
        ring_settings: &[usize],
        plugboard_pairs: &[(char, char)],
    ) -> Result<Self> {
        let kinds = rotor_ids
            .iter()
            .map(|&id| RotorKind::try_from(id))
            .collect::<Result<Vec<_>>>()?;
        Self::with_rotors(&kinds, positions, ring_settings, plugboard_pairs)
    }

    /// Build a machine from rotor kinds and settings.
    pub fn with_rotors(
        kinds: &[RotorKind],
        positions: &[usize],
        ring_settings: &[usize],
        plugboard_pairs: &[(char, char)],
    ) -> Result<Self> {
        if kinds.is_empty() {
            return Err(EnigmaError::NoRotors);
        }
        if kinds.len() != positions.len() || kinds.len() != ring_settings.len() {
            return Err(EnigmaError::RotorCountMismatch {
                rotors: kinds.len(),
                positions: positions.len(),
                rings: ring_settings.len(),
            });
        }

        let rotors = kinds
            .iter()
            .zip(positions)
            .zip(ring_settings)
            .map(|((&kind, &position), &ring)| Rotor::new(kind, ring, position))
            .collect::<Result<Vec<_>>>()?;
        let plugboard = Plugboard::new(plugboard_pairs)?;

        debug!(
            rotors = %kinds.iter().map(|k| k.name()).collect::<Vec<_>>().join("-"),
            plugboard_pairs = plugboard.pair_count(),
            "machine configured"
        );

        Ok(Self {
            rotors,
            reflector: Reflector::default(),
            plugboard,
            initial_positions: positions.to_vec(),
        })
    }

    /// Encipher (or decipher) a message.
    ///
    /// Letters are uppercased and each one advances the rotors before it is
    /// enciphered. Every other character, including non-ASCII letters, is
    /// copied through without touching the rotors.
    pub fn process(&mut self, text: &str) -> String {
        let mut output = String::with_capacity(text.len());
        let mut enciphered = 0usize;

        for c in text.chars() {
            match self.encipher_letter(c) {
                Some(out) => {
                    output.push(out);
                    enciphered += 1;
                }
                None => output.push(c),
            }
        }

        trace!(
            chars = text.chars().count(),
            letters = enciphered,
            "processed message"
        );
        output
    }

    /// Press one key.
    ///
    /// Returns `None` without stepping for anything outside A-Z (after
    /// uppercasing ASCII).
    pub fn encipher_letter(&mut self, c: char) -> Option<char> {
        let index = letter_index(c.to_ascii_uppercase())?;
        stepping::advance(&mut self.rotors);
        Some(index_letter(self.signal_path(index)))
    }

    /// Route one letter through the wiring at the current rotor positions.
    fn signal_path(&self, index: usize) -> usize {
        let mut signal = self.plugboard.swap(index);
        for rotor in self.rotors.iter().rev() {
            signal = rotor.forward(signal);
        }
        signal = self.reflector.reflect(signal);
        for rotor in &self.rotors {
            signal = rotor.backward(signal);
        }
        self.plugboard.swap(signal)
    }

    /// Current rotor positions, left to right.
    #[must_use]
    pub fn positions(&self) -> Vec<usize> {
        self.rotors.iter().map(Rotor::position).collect()
    }

    /// Letters visible in the rotor windows, left to right.
    #[must_use]
    pub fn window(&self) -> String {
        self.rotors.iter().map(|r| index_letter(r.position())).collect()
    }

    /// Turn the rotors back to the positions the machine was built with.
    pub fn reset(&mut self) {
        for (rotor, &position) in self.rotors.iter_mut().zip(&self.initial_positions) {
            rotor.set_position(position);
        }
    }

    /// Number of rotors fitted.
    #[must_use]
    pub fn rotor_count(&self) -> usize {
        self.rotors.len()
    }

    /// Rotors, left to right.
    #[must_use]
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }
}

impl Drop for EnigmaMachine {
    fn drop(&mut self) {
        self.zeroize();
    }
}
