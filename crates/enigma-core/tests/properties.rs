use enigma_core::defaults::historical_machine;
use enigma_core::{Alphabet, Engine, MachineBuilder};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn output_length_equals_input_length() {
    let mut e = Engine::new(historical_machine().unwrap()).unwrap();
    for msg in ["", "A", "HELLO, WORLD! 123", "   ", "A B C D E F"] {
        let out = e.encode(msg);
        assert_eq!(out.chars().count(), msg.chars().count(), "input {msg:?}");
    }
}

#[test]
fn non_alphabet_characters_pass_through_in_place() {
    let mut e = Engine::new(historical_machine().unwrap()).unwrap();
    let out = e.encode("AB, CD! 9");
    let in_chars: Vec<char> = "AB, CD! 9".chars().collect();
    let out_chars: Vec<char> = out.chars().collect();

    for (i, (&ic, &oc)) in in_chars.iter().zip(out_chars.iter()).enumerate() {
        if ic.is_ascii_uppercase() {
            assert!(oc.is_ascii_uppercase(), "position {i}");
        } else {
            assert_eq!(ic, oc, "position {i} must pass through");
        }
    }
}

#[test]
fn every_output_character_is_in_the_alphabet_or_passed_through() {
    let alphabet = Alphabet::latin_upper();
    let mut e = Engine::new(historical_machine().unwrap()).unwrap();
    let msg = "MIXED input; with 42 symbols & spaces";
    let out = e.encode(msg);

    for (ic, oc) in msg.chars().zip(out.chars()) {
        let normalized = ic.to_uppercase().next().unwrap();
        if alphabet.contains(normalized) {
            assert!(alphabet.contains(oc));
        } else {
            assert_eq!(ic, oc);
        }
    }
}

#[test]
fn lowercase_input_is_normalized_to_uppercase() {
    let m = historical_machine().unwrap();
    let mut lower = Engine::new(m.clone()).unwrap();
    let mut upper = Engine::new(m).unwrap();

    assert_eq!(lower.encode("attack at dawn"), upper.encode("ATTACK AT DAWN"));
}

#[test]
fn trace_never_alters_the_result() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let m = MachineBuilder::new(Alphabet::latin_upper(), 3)
        .unwrap()
        .random_rotors(&mut rng)
        .random_reflector(&mut rng)
        .unwrap()
        .random_plugboard(&mut rng, 10)
        .random_turnovers(&mut rng)
        .build()
        .unwrap();

    let msg = "TRACE ME 1234";
    let mut plain_engine = Engine::new(m.clone()).unwrap();
    let expected = plain_engine.encode(msg);

    let mut traced_engine = Engine::new(m).unwrap();
    let (out, traces) = traced_engine.encode_with_trace(msg);

    assert_eq!(out, expected);
    assert_eq!(traces.len(), msg.chars().count());

    for (c, t) in msg.chars().zip(traces.iter()) {
        if c.is_ascii_alphabetic() {
            assert!(!t.pass_through);
            assert_eq!(t.rotors_forward.len(), 3);
            assert_eq!(t.rotors_reverse.len(), 3);
            assert!(t.reflected.is_some());
            assert!(!t.stepped.is_empty(), "stepping happens every character");
            assert!(!t.lines().is_empty());
        } else {
            assert!(t.pass_through);
            assert_eq!(t.input, t.output);
            assert!(t.stepped.is_empty());
        }
    }
}

#[test]
fn single_rotor_machine_is_still_an_involution() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let m = MachineBuilder::new(Alphabet::latin_upper(), 1)
        .unwrap()
        .random_rotors(&mut rng)
        .random_reflector(&mut rng)
        .unwrap()
        .base("M")
        .unwrap()
        .build()
        .unwrap();

    let mut e = Engine::new(m).unwrap();
    let cipher = e.encode("ONEWHEELONLY");
    e.reset();
    assert_eq!(e.encode(&cipher), "ONEWHEELONLY");
}
