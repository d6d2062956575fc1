use enigma_core::defaults::{self, historical_machine};
use enigma_core::{Alphabet, Engine, MachineBuilder};

fn lcm_machine() -> enigma_core::Machine {
    MachineBuilder::new(Alphabet::latin_upper(), 3)
        .unwrap()
        .rotor(0, defaults::ROTOR_III)
        .unwrap()
        .rotor(1, defaults::ROTOR_II)
        .unwrap()
        .rotor(2, defaults::ROTOR_I)
        .unwrap()
        .reflector(defaults::REFLECTOR_B)
        .unwrap()
        .turnovers(&[22, 5, 1])
        .unwrap()
        .base("LCM")
        .unwrap()
        .build()
        .unwrap()
}

#[test]
fn same_message_same_output() {
    let m = historical_machine().unwrap();
    let mut e1 = Engine::new(m.clone()).unwrap();
    let mut e2 = Engine::new(m).unwrap();

    let msg = "WEATHERREPORTFORTONIGHT";
    assert_eq!(e1.encode(msg), e2.encode(msg));
}

// Encoding two halves back to back equals encoding the concatenation: rotor
// state carries across calls exactly like the physical machine.
#[test]
fn split_encoding_equals_whole() {
    let m = lcm_machine();
    let mut split = Engine::new(m.clone()).unwrap();
    let mut whole = Engine::new(m).unwrap();

    let a = "QMJIDO M";
    let b = "ZWZJFJR";
    let mut out = split.encode(a);
    out.push_str(&split.encode(b));

    assert_eq!(out, whole.encode(&format!("{a}{b}")));
}

// Base LCM with turnovers 22/5/1: rotor 0 starts at position 11 ('L'), so
// its counter reaches 22 on the 11th alphabetic character and carries
// rotor 1 exactly once over this message.
#[test]
fn middle_rotor_steps_at_turnover() {
    let mut e = Engine::new(lcm_machine()).unwrap();
    assert_eq!(e.positions(), &[11, 2, 12]);

    for _ in 0..10 {
        e.encode_char('A');
    }
    assert_eq!(e.positions()[1], 2, "rotor 1 must not have moved yet");

    e.encode_char('A');
    assert_eq!(e.positions()[1], 3, "rotor 1 steps on the 11th character");

    for _ in 0..3 {
        e.encode_char('A');
    }
    assert_eq!(e.positions(), &[(11 + 14) % 26, 3, 12]);
}

#[test]
fn rotor_zero_advances_once_per_alphabetic_character() {
    let mut e = Engine::new(historical_machine().unwrap()).unwrap();
    assert_eq!(e.positions(), &[0, 0, 0]);

    e.encode("AB C-3!");
    // 3 alphabetic characters out of 7.
    assert_eq!(e.positions()[0], 3);
}

#[test]
fn default_turnover_carries_after_full_revolution() {
    let mut e = Engine::new(historical_machine().unwrap()).unwrap();

    for _ in 0..25 {
        e.encode_char('A');
    }
    assert_eq!(e.positions(), &[25, 0, 0]);

    e.encode_char('A');
    assert_eq!(e.positions(), &[0, 1, 0]);
}

#[test]
fn reset_rewinds_to_base() {
    let mut e = Engine::new(lcm_machine()).unwrap();
    let first = e.encode("QMJIDO MZWZJFJR");
    e.reset();
    assert_eq!(e.positions(), &[11, 2, 12]);
    assert_eq!(e.encode("QMJIDO MZWZJFJR"), first);
}
