// crates/enigma-core/src/validate.rs

use crate::error::{EnigmaError, Result};
use crate::machine::Machine;

/// Cross-field consistency for an assembled machine. The builder runs this
/// before handing out a `Machine`, and `Engine::new` runs it again so it can
/// trust whatever it is given.
pub fn validate_machine(m: &Machine) -> Result<()> {
    let n = m.alphabet().len();

    if m.num_rotors() == 0 {
        return Err(EnigmaError::InvalidConfiguration(
            "machine needs at least one rotor".into(),
        ));
    }

    for (i, rotor) in m.rotors().iter().enumerate() {
        if rotor.wiring.len() != n {
            return Err(EnigmaError::InvalidWiring(format!(
                "rotor {} wiring has {} positions, alphabet has {}",
                i,
                rotor.wiring.len(),
                n
            )));
        }
        if rotor.turnover < 1 || rotor.turnover > n {
            return Err(EnigmaError::InvalidTurnover(format!(
                "rotor {} turnover {} outside [1, {}]",
                i, rotor.turnover, n
            )));
        }
    }

    if m.reflector().len() != n {
        return Err(EnigmaError::InvalidWiring(format!(
            "reflector has {} positions, alphabet has {}",
            m.reflector().len(),
            n
        )));
    }
    // Pure involution over disjoint pairs, no fixed point.
    for i in 0..n {
        let j = m.reflector().forward(i);
        if j == i {
            return Err(EnigmaError::InvalidWiring(format!(
                "reflector maps '{}' to itself",
                m.alphabet().symbol(i)
            )));
        }
        if m.reflector().forward(j) != i {
            return Err(EnigmaError::InvalidWiring(format!(
                "reflector is not an involution at '{}'",
                m.alphabet().symbol(i)
            )));
        }
    }

    if m.plugboard().len() != n {
        return Err(EnigmaError::InvalidPlugboard(format!(
            "plugboard table has {} entries, alphabet has {}",
            m.plugboard().len(),
            n
        )));
    }
    for i in 0..n {
        if m.plugboard().map(m.plugboard().map(i)) != i {
            return Err(EnigmaError::InvalidPlugboard(format!(
                "plugboard is not symmetric at '{}'",
                m.alphabet().symbol(i)
            )));
        }
    }

    if m.base().len() != m.num_rotors() {
        return Err(EnigmaError::InvalidBase(format!(
            "{} base positions for {} rotors",
            m.base().len(),
            m.num_rotors()
        )));
    }
    for &b in m.base() {
        if b >= n {
            return Err(EnigmaError::InvalidBase(format!(
                "base position {b} outside [0, {n})"
            )));
        }
    }

    Ok(())
}
