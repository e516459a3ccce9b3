//! Rotor advancement, run once before every enciphered letter.
//!
//! Rotors are stored left to right. The rightmost rotor moves on every key
//! press. Any other rotor moves when its right neighbour sat at its notch,
//! and an interior rotor also moves when it sits at its own notch (its pawl
//! carries the left neighbour and drags the rotor with it). That second rule
//! is the double-stepping anomaly: the middle rotor moves on two
//! consecutive key presses.
//!
//! All notch checks use positions from before the key press. A rotor whose
//! two conditions hold at once moves a single position; both pawls push the
//! same ratchet.

use crate::rotor::Rotor;

/// Advance the rotor stack for one key press.
pub fn advance(rotors: &mut [Rotor]) {
    let Some(rightmost) = rotors.len().checked_sub(1) else {
        return;
    };

    // Sweeping left to right, rotor `i + 1` is still unstepped when rotor
    // `i` reads its notch, so every read sees the pre-press position.
    for i in 0..rightmost {
        let carried = rotors[i + 1].is_at_notch();
        let double_step = i > 0 && rotors[i].is_at_notch();
        if carried || double_step {
            rotors[i].step();
        }
    }
    rotors[rightmost].step();
}
