//! Machine configuration: a serializable key sheet entry plus parsers for
//! the human-readable setting formats.
//!
//! # Example
//!
//! ```
//! use enigma_core::config::{parse_plugboard, parse_rotors, parse_settings, MachineConfig};
//!
//! let config = MachineConfig::default()
//!     .with_rotors(parse_rotors("II,IV,V")?)
//!     .with_positions(parse_settings("BLA")?)
//!     .with_rings(parse_settings("2,21,12")?)
//!     .with_plugboard(parse_plugboard("AV BS CG DL FU HZ IN KM OW RX")?);
//!
//! let mut machine = config.build()?;
//! let ciphertext = machine.process("ATTACK AT DAWN");
//! assert_eq!(config.build()?.process(&ciphertext), "ATTACK AT DAWN");
//! # Ok::<(), enigma_core::EnigmaError>(())
//! ```

use rand::rngs::{OsRng, StdRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::alphabet::{letter_index, ALPHABET_LEN};
use crate::error::{EnigmaError, Result};
use crate::machine::EnigmaMachine;
use crate::plugboard::Plugboard;
use crate::rotor::{Rotor, RotorKind};

/// Cables fitted on the historical daily key sheets.
pub const STANDARD_PLUG_COUNT: usize = 10;

/// Everything needed to set up a machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Rotor order, left to right.
    pub rotors: Vec<RotorKind>,
    /// Starting positions (0-25), left to right.
    pub positions: Vec<usize>,
    /// Ring settings (0-25), left to right.
    pub rings: Vec<usize>,
    /// Plugboard cables.
    #[serde(default)]
    pub plugboard: Vec<(char, char)>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            rotors: vec![RotorKind::I, RotorKind::II, RotorKind::III],
            positions: vec![0, 0, 0],
            rings: vec![0, 0, 0],
            plugboard: Vec::new(),
        }
    }
}

impl MachineConfig {
    /// Set rotor order
    #[must_use]
    pub fn with_rotors(mut self, rotors: Vec<RotorKind>) -> Self {
        self.rotors = rotors;
        self
    }

    /// Set starting positions
    #[must_use]
    pub fn with_positions(mut self, positions: Vec<usize>) -> Self {
        self.positions = positions;
        self
    }

    /// Set ring settings
    #[must_use]
    pub fn with_rings(mut self, rings: Vec<usize>) -> Self {
        self.rings = rings;
        self
    }

    /// Set plugboard cables
    #[must_use]
    pub fn with_plugboard(mut self, plugboard: Vec<(char, char)>) -> Self {
        self.plugboard = plugboard;
        self
    }

    /// Check the configuration without building a machine.
    pub fn validate(&self) -> Result<()> {
        if self.rotors.is_empty() {
            return Err(EnigmaError::NoRotors);
        }
        if self.rotors.len() != self.positions.len() || self.rotors.len() != self.rings.len() {
            return Err(EnigmaError::RotorCountMismatch {
                rotors: self.rotors.len(),
                positions: self.positions.len(),
                rings: self.rings.len(),
            });
        }
        for ((&kind, &position), &ring) in self.rotors.iter().zip(&self.positions).zip(&self.rings)
        {
            Rotor::new(kind, ring, position)?;
        }
        Plugboard::new(&self.plugboard)?;
        Ok(())
    }

    /// Build a machine at the configured starting positions.
    pub fn build(&self) -> Result<EnigmaMachine> {
        EnigmaMachine::with_rotors(&self.rotors, &self.positions, &self.rings, &self.plugboard)
    }

    /// Parse a JSON configuration and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// A random key: three distinct rotors, random positions and rings, and
    /// ten plugboard cables.
    ///
    /// Seeded from the operating system RNG.
    pub fn random() -> Result<Self> {
        let mut rng = StdRng::from_rng(OsRng).map_err(|_| EnigmaError::RandomFailed)?;
        Ok(Self::random_with(&mut rng))
    }

    /// A random key drawn from `rng`; a seeded RNG reproduces the same key.
    #[must_use]
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let rotors: Vec<RotorKind> = RotorKind::ALL.choose_multiple(rng, 3).copied().collect();
        let positions = (0..3).map(|_| rng.gen_range(0..ALPHABET_LEN)).collect();
        let rings = (0..3).map(|_| rng.gen_range(0..ALPHABET_LEN)).collect();

        let mut letters: Vec<char> = ('A'..='Z').collect();
        letters.shuffle(rng);
        let plugboard = letters
            .chunks_exact(2)
            .take(STANDARD_PLUG_COUNT)
            .map(|pair| (pair[0], pair[1]))
            .collect();

        Self {
            rotors,
            positions,
            rings,
            plugboard,
        }
    }
}

/// Parse a rotor order such as `"I,II,III"`, `"I II III"` or `"0,1,2"`.
pub fn parse_rotors(s: &str) -> Result<Vec<RotorKind>> {
    let rotors = split_list(s)
        .map(str::parse)
        .collect::<Result<Vec<RotorKind>>>()?;
    if rotors.is_empty() {
        return Err(EnigmaError::NoRotors);
    }
    Ok(rotors)
}

/// Parse positions or ring settings.
///
/// Accepts window letters (`"ADU"`) or separated numbers (`"0,3,20"`).
/// Numbers are taken as written and checked when the machine is built.
pub fn parse_settings(s: &str) -> Result<Vec<usize>> {
    let trimmed = s.trim();
    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Ok(trimmed
            .chars()
            .filter_map(|c| letter_index(c.to_ascii_uppercase()))
            .collect());
    }
    split_list(trimmed)
        .map(|item| {
            item.parse::<usize>()
                .map_err(|_| EnigmaError::InvalidConfig(format!("invalid setting: {item:?}")))
        })
        .collect()
}

/// Parse plugboard cables written as letter pairs: `"AB CD"` or `"AB,CD"`.
pub fn parse_plugboard(s: &str) -> Result<Vec<(char, char)>> {
    split_list(s)
        .map(|item| {
            let mut chars = item.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(a), Some(b), None) => Ok((a.to_ascii_uppercase(), b.to_ascii_uppercase())),
                _ => Err(EnigmaError::InvalidConfig(format!(
                    "plugboard pair must be two letters: {item:?}"
                ))),
            }
        })
        .collect()
}

fn split_list(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|item| !item.is_empty())
}
