use enigma_core::defaults::historical_machine;
use enigma_core::{Alphabet, Engine, MachineBuilder};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Encoding is self-inverse: with the rotors reset to the same base, running
// the ciphertext back through reproduces the plaintext.
#[test]
fn involution_on_historical_machine() {
    let mut e = Engine::new(historical_machine().unwrap()).unwrap();

    let plain = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG";
    let cipher = e.encode(plain);
    e.reset();
    assert_eq!(e.encode(&cipher), plain);
}

#[test]
fn involution_on_random_machines() {
    for seed in [1u64, 7, 42, 1918, 0xDEAD_BEEF] {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let m = MachineBuilder::new(Alphabet::latin_upper(), 3)
            .unwrap()
            .random_rotors(&mut rng)
            .random_reflector(&mut rng)
            .unwrap()
            .random_plugboard(&mut rng, 10)
            .random_turnovers(&mut rng)
            .base("KQX")
            .unwrap()
            .build()
            .unwrap();

        let mut e = Engine::new(m).unwrap();
        let plain = "ATTACK AT DAWN, BRING 3 DIVISIONS";
        let cipher = e.encode(plain);
        e.reset();
        assert_eq!(e.encode(&cipher), plain);
    }
}

#[test]
fn involution_with_five_rotors() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let m = MachineBuilder::new(Alphabet::latin_upper(), 5)
        .unwrap()
        .random_rotors(&mut rng)
        .random_reflector(&mut rng)
        .unwrap()
        .random_turnovers(&mut rng)
        .base("QWERT")
        .unwrap()
        .build()
        .unwrap();

    let mut e = Engine::new(m).unwrap();
    let plain = "GENERALIZEDROTORCOUNT";
    let cipher = e.encode(plain);
    e.reset();
    assert_eq!(e.encode(&cipher), plain);
}

// The whole per-character map is a conjugate of the reflector, which has no
// fixed point, so no alphabetic character ever encodes to itself.
#[test]
fn no_character_encodes_to_itself() {
    let mut rng = ChaCha8Rng::seed_from_u64(1234);
    let m = MachineBuilder::new(Alphabet::latin_upper(), 3)
        .unwrap()
        .random_rotors(&mut rng)
        .random_reflector(&mut rng)
        .unwrap()
        .random_plugboard(&mut rng, 10)
        .build()
        .unwrap();

    let mut e = Engine::new(m).unwrap();
    for c in 'A'..='Z' {
        for _ in 0..40 {
            assert_ne!(e.encode_char(c), c, "'{c}' mapped to itself");
        }
    }
}
