//! Error types for machine configuration.

use thiserror::Error;

/// Result type for Enigma operations.
pub type Result<T> = std::result::Result<T, EnigmaError>;

/// Errors that can occur while configuring a machine.
///
/// Enciphering itself never fails; every variant here is raised before a
/// usable [`EnigmaMachine`](crate::EnigmaMachine) exists.
#[derive(Error, Debug)]
pub enum EnigmaError {
    /// No rotors were selected.
    #[error("at least one rotor is required")]
    NoRotors,

    /// Rotor selection, positions and ring settings disagree in length.
    #[error(
        "rotor count mismatch: {rotors} rotors, {positions} positions, {rings} ring settings"
    )]
    RotorCountMismatch {
        rotors: usize,
        positions: usize,
        rings: usize,
    },

    /// Rotor identifier outside the catalogue.
    #[error("unknown rotor identifier: {0}")]
    UnknownRotor(usize),

    /// Rotor name that does not match any catalogue entry.
    #[error("unknown rotor name: {0}")]
    UnknownRotorName(String),

    /// Initial rotor position outside 0-25.
    #[error("rotor position {0} out of range (expected 0-25)")]
    PositionOutOfRange(usize),

    /// Ring setting outside 0-25.
    #[error("ring setting {0} out of range (expected 0-25)")]
    RingSettingOutOfRange(usize),

    /// Plugboard pair contains something other than A-Z.
    #[error("invalid plugboard letter: {0:?}")]
    InvalidPlugboardLetter(char),

    /// Plugboard pair connects a letter to itself.
    #[error("plugboard letter {0} cannot be paired with itself")]
    PlugboardSelfPair(char),

    /// Letter appears in more than one plugboard pair.
    #[error("plugboard letter {0} is used by more than one pair")]
    PlugboardLetterReused(char),

    /// Malformed human-readable setting.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON configuration could not be read or written.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Random number generation failed.
    #[error("random generation failed")]
    RandomFailed,
}
