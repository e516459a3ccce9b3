//! Property tests over random machine configurations.
//!
//! Every configuration the constructor accepts must produce a self-inverse
//! machine, whatever the rotor count, settings or plugboard.

use enigma_core::{plugboard_swap, EnigmaMachine};
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Settings {
    rotors: Vec<usize>,
    positions: Vec<usize>,
    rings: Vec<usize>,
    pairs: Vec<(char, char)>,
}

impl Settings {
    fn build(&self) -> EnigmaMachine {
        EnigmaMachine::new(&self.rotors, &self.positions, &self.rings, &self.pairs)
            .expect("generated settings are valid")
    }
}

fn pairs_strategy() -> impl Strategy<Value = Vec<(char, char)>> {
    let letters: Vec<char> = ('A'..='Z').collect();
    (Just(letters).prop_shuffle(), 0_usize..=13).prop_map(|(shuffled, count)| {
        shuffled
            .chunks(2)
            .take(count)
            .map(|pair| (pair[0], pair[1]))
            .collect()
    })
}

fn settings_strategy() -> impl Strategy<Value = Settings> {
    (1_usize..=5)
        .prop_flat_map(|count| {
            (
                prop::collection::vec(0_usize..5, count),
                prop::collection::vec(0_usize..26, count),
                prop::collection::vec(0_usize..26, count),
                pairs_strategy(),
            )
        })
        .prop_map(|(rotors, positions, rings, pairs)| Settings {
            rotors,
            positions,
            rings,
            pairs,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn symmetric_roundtrip(settings in settings_strategy(), text in "[A-Za-z0-9 ,.!?]{0,80}") {
        let ciphertext = settings.build().process(&text);
        let recovered = settings.build().process(&ciphertext);
        prop_assert_eq!(recovered, text.to_ascii_uppercase());
    }

    #[test]
    fn output_preserves_shape(settings in settings_strategy(), text in "\\PC{0,40}") {
        let ciphertext = settings.build().process(&text);
        prop_assert_eq!(ciphertext.chars().count(), text.chars().count());
        for (plain, cipher) in text.chars().zip(ciphertext.chars()) {
            if plain.is_ascii_alphabetic() {
                prop_assert!(cipher.is_ascii_uppercase());
                prop_assert_ne!(cipher, plain.to_ascii_uppercase());
            } else {
                prop_assert_eq!(cipher, plain);
            }
        }
    }

    #[test]
    fn non_letters_do_not_perturb_stepping(
        settings in settings_strategy(),
        letters in "[A-Z]{1,40}",
        noise in "[0-9 .,;:!?-]{1,5}",
    ) {
        let interleaved: String = letters
            .chars()
            .flat_map(|c| std::iter::once(c).chain(noise.chars()))
            .collect();

        let bare = settings.build().process(&letters);
        let noisy = settings.build().process(&interleaved);
        let stripped: String = noisy.chars().filter(char::is_ascii_uppercase).collect();
        prop_assert_eq!(stripped, bare);
    }

    #[test]
    fn case_is_normalized(settings in settings_strategy(), text in "[a-z]{0,40}") {
        prop_assert_eq!(
            settings.build().process(&text),
            settings.build().process(&text.to_ascii_uppercase())
        );
    }

    #[test]
    fn plugboard_swap_is_involution(pairs in pairs_strategy()) {
        for c in 'A'..='Z' {
            prop_assert_eq!(plugboard_swap(plugboard_swap(c, &pairs), &pairs), c);
        }
    }

    #[test]
    fn reset_restores_initial_state(settings in settings_strategy(), text in "[A-Z]{1,40}") {
        let mut machine = settings.build();
        let first = machine.process(&text);
        machine.reset();
        prop_assert_eq!(machine.positions(), settings.positions.clone());
        prop_assert_eq!(machine.process(&text), first);
    }
}

#[test]
fn hello_roundtrip_without_plugboard() {
    let build = || EnigmaMachine::new(&[0, 1, 2], &[0, 0, 0], &[0, 0, 0], &[]).unwrap();
    let ciphertext = build().process("HELLO");
    assert_eq!(build().process(&ciphertext), "HELLO");
}

#[test]
fn statefulness_same_letter_differs() {
    let mut machine = EnigmaMachine::new(&[0, 1, 2], &[0, 0, 0], &[0, 0, 0], &[]).unwrap();
    let outputs: Vec<String> = (0..5).map(|_| machine.process("A")).collect();
    assert_eq!(outputs.concat(), "BDZGO");
}

#[test]
fn rotor_order_changes_ciphertext() {
    let orders: [[usize; 3]; 3] = [[0, 1, 2], [1, 0, 2], [2, 1, 0]];
    let outputs: Vec<String> = orders
        .iter()
        .map(|order| {
            EnigmaMachine::new(order, &[0, 0, 0], &[0, 0, 0], &[('A', 'B')])
                .unwrap()
                .process("THEQUICKBROWNFOX")
        })
        .collect();
    assert_ne!(outputs[0], outputs[1]);
    assert_ne!(outputs[0], outputs[2]);
    assert_ne!(outputs[1], outputs[2]);
}
