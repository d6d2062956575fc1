// crates/enigma-core/src/defaults.rs
//
// Historical drum wirings (Wehrmacht Enigma I) plus a ready-made machine
// using them. Rotor III sits in slot 0 (encountered first on the forward
// pass), matching the published test vectors for this wiring order.

use crate::alphabet::Alphabet;
use crate::error::Result;
use crate::machine::{Machine, MachineBuilder};

pub const ROTOR_I: &str = "EKMFLGDQVZNTOWYHXUSPAIBRCJ";
pub const ROTOR_II: &str = "AJDKSIRUXBLHWTMCQGZNPYFVOE";
pub const ROTOR_III: &str = "BDFHJLCPRTXVZNYEIWGAKMUSQO";
pub const REFLECTOR_B: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";

/// Three-rotor machine over the Latin alphabet: rotors III, II, I, reflector
/// B, no plugboard, turnovers at the alphabet size, base "AAA".
pub fn historical_machine() -> Result<Machine> {
    MachineBuilder::new(Alphabet::latin_upper(), 3)?
        .rotor(0, ROTOR_III)?
        .rotor(1, ROTOR_II)?
        .rotor(2, ROTOR_I)?
        .reflector(REFLECTOR_B)?
        .build()
}
