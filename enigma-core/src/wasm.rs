//! WebAssembly bindings.
//!
//! ## Usage in JavaScript
//!
//! ```javascript
//! import init, { WasmEnigma, wasm_encipher } from './enigma_core.js';
//!
//! await init();
//!
//! // Stateful machine: rotors I, II, III at AAA, rings AAA, two cables
//! const machine = new WasmEnigma("I,II,III", "AAA", "AAA", "AB CD");
//! const ct = machine.process("HELLO");
//! machine.reset();
//!
//! // Or a one-shot call with a JSON configuration
//! const pt = wasm_encipher(configJson, ct);
//! ```

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::config::{parse_plugboard, parse_rotors, parse_settings};
#[cfg(feature = "wasm")]
use crate::{encipher, EnigmaMachine, MachineConfig};

/// WASM-compatible machine wrapper.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct WasmEnigma {
    inner: EnigmaMachine,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl WasmEnigma {
    /// Build a machine from the textual setting formats.
    #[wasm_bindgen(constructor)]
    pub fn new(
        rotors: &str,
        positions: &str,
        rings: &str,
        plugboard: &str,
    ) -> Result<WasmEnigma, JsError> {
        let build = || -> crate::Result<EnigmaMachine> {
            EnigmaMachine::with_rotors(
                &parse_rotors(rotors)?,
                &parse_settings(positions)?,
                &parse_settings(rings)?,
                &parse_plugboard(plugboard)?,
            )
        };
        build()
            .map(|inner| Self { inner })
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Encipher text, advancing the rotors.
    #[wasm_bindgen]
    pub fn process(&mut self, text: &str) -> String {
        self.inner.process(text)
    }

    /// Letters in the rotor windows.
    #[wasm_bindgen]
    pub fn window(&self) -> String {
        self.inner.window()
    }

    /// Return the rotors to their starting positions.
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

/// One-shot encipher with a JSON configuration (WASM export).
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn wasm_encipher(config_json: &str, text: &str) -> Result<String, JsError> {
    let config = MachineConfig::from_json(config_json).map_err(|e| JsError::new(&e.to_string()))?;
    encipher(&config, text).map_err(|e| JsError::new(&e.to_string()))
}
