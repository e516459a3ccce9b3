//! # Enigma Core
//!
//! Rotor cipher machine simulator: interchangeable rotors, a fixed reflector
//! and an optional plugboard.
//!
//! ## Signal Path
//!
//! For every letter the rotors step first, then the signal runs:
//! - plugboard
//! - rotors right to left (forward wiring)
//! - reflector
//! - rotors left to right (inverse wiring)
//! - plugboard again
//!
//! Because the reflector is an involution, the whole machine is self-inverse:
//! a second machine with the same settings deciphers what the first
//! enciphered.
//!
//! ## Usage
//!
//! ```rust
//! use enigma_core::EnigmaMachine;
//!
//! let mut machine = EnigmaMachine::new(&[0, 1, 2], &[0, 0, 0], &[0, 0, 0], &[]).unwrap();
//! assert_eq!(machine.process("AAAAA"), "BDZGO");
//! ```
//!
//! ## Error Handling
//!
//! Configuration is validated up front and returns `Result<T, EnigmaError>`:
//! - [`EnigmaError::RotorCountMismatch`] - rotors, positions and rings differ in length
//! - [`EnigmaError::UnknownRotor`] - identifier outside the catalogue
//! - [`EnigmaError::PlugboardLetterReused`] - a letter in two plugboard pairs
//!
//! Processing text never fails: characters outside A-Z pass through.
//!
//! ## Panics
//!
//! Table lookups panic on an out-of-range index. Indices are produced
//! internally, so a panic there is a bug, never bad input.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
// Error/panic docs are centralized above; individual function docs are concise
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod alphabet;
pub mod config;
mod error;
mod machine;
pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod stepping;
#[cfg(feature = "wasm")]
mod wasm;

pub use config::MachineConfig;
pub use error::{EnigmaError, Result};
pub use machine::EnigmaMachine;
pub use plugboard::{plugboard_swap, Plugboard};
pub use reflector::Reflector;
pub use rotor::{Rotor, RotorDefinition, RotorKind, CATALOGUE};

#[cfg(feature = "wasm")]
pub use wasm::*;

/// Run text through a fresh machine built from `config`.
pub fn encipher(config: &MachineConfig, text: &str) -> Result<String> {
    Ok(config.build()?.process(text))
}
