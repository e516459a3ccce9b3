//! The fixed reflector (UKW-B).

use crate::alphabet::{wiring, ALPHABET_LEN};

const UKW_B: [u8; ALPHABET_LEN] = wiring(b"YRUHQSLDPXNGOKMIEBFZCWVJAT");

/// Stateless reflector: an involution with no fixed points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    table: &'static [u8; ALPHABET_LEN],
}

impl Reflector {
    /// Reflector B, the standard wide reflector.
    #[must_use]
    pub const fn ukw_b() -> Self {
        Self { table: &UKW_B }
    }

    /// Send the signal back through the rotor stack.
    #[inline]
    #[must_use]
    pub fn reflect(&self, index: usize) -> usize {
        usize::from(self.table[index])
    }

    /// Wiring as letters, for display.
    #[must_use]
    pub fn wiring(&self) -> String {
        self.table.iter().map(|&i| char::from(b'A' + i)).collect()
    }
}

impl Default for Reflector {
    fn default() -> Self {
        Self::ukw_b()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflector_is_involution() {
        let reflector = Reflector::default();
        for i in 0..ALPHABET_LEN {
            assert_eq!(reflector.reflect(reflector.reflect(i)), i);
        }
    }

    #[test]
    fn test_reflector_has_no_fixed_points() {
        let reflector = Reflector::default();
        for i in 0..ALPHABET_LEN {
            assert_ne!(reflector.reflect(i), i);
        }
    }

    #[test]
    fn test_ukw_b_table_pairs_every_letter() {
        assert_eq!(UKW_B.len(), ALPHABET_LEN);
        let mut seen = [false; ALPHABET_LEN];
        for (i, &j) in UKW_B.iter().enumerate() {
            let j = usize::from(j);
            assert_eq!(usize::from(UKW_B[j]), i, "{i} and {j} are not paired");
            seen[j] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_wiring_display() {
        assert_eq!(Reflector::ukw_b().wiring(), "YRUHQSLDPXNGOKMIEBFZCWVJAT");
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_index_panics() {
        let _ = Reflector::default().reflect(26);
    }
}
