// crates/enigma-core/src/machine.rs
//
// Configuration model. `MachineBuilder` validates every piece at the point
// it is set and only ever yields a fully consistent, immutable `Machine`.
// Mutation after build is not possible; callers build a new machine or
// reset an engine for a different starting position.

use rand::Rng;

use crate::alphabet::Alphabet;
use crate::error::{EnigmaError, Result};
use crate::plugboard::Plugboard;
use crate::validate::validate_machine;
use crate::wiring::Wiring;

/// One stepping wheel: a wiring plus the turnover at which it carries the
/// next rotor. Turnover is 1-based, in [1, alphabet size].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rotor {
    pub wiring: Wiring,
    pub turnover: usize,
}

/// A complete validated machine setting. Index 0 is the rotor encountered
/// first on the forward pass and last on the reverse pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Machine {
    alphabet: Alphabet,
    rotors: Vec<Rotor>,
    reflector: Wiring,
    plugboard: Plugboard,
    base: Vec<usize>,
}

impl Machine {
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    pub fn num_rotors(&self) -> usize {
        self.rotors.len()
    }

    pub fn reflector(&self) -> &Wiring {
        &self.reflector
    }

    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Starting offset per rotor, as alphabet indices.
    pub fn base(&self) -> &[usize] {
        &self.base
    }

    pub fn rotor_string(&self, index: usize) -> String {
        self.rotors[index].wiring.to_string_in(&self.alphabet)
    }

    pub fn reflector_string(&self) -> String {
        self.reflector.to_string_in(&self.alphabet)
    }

    pub fn turnovers(&self) -> Vec<usize> {
        self.rotors.iter().map(|r| r.turnover).collect()
    }

    pub fn base_string(&self) -> String {
        self.base.iter().map(|&i| self.alphabet.symbol(i)).collect()
    }
}

#[derive(Debug)]
pub struct MachineBuilder {
    alphabet: Alphabet,
    rotors: Vec<Option<Wiring>>,
    turnovers: Option<Vec<usize>>,
    reflector: Option<Wiring>,
    plugboard: Option<Plugboard>,
    base: Option<Vec<usize>>,
}

impl MachineBuilder {
    pub fn new(alphabet: Alphabet, num_rotors: usize) -> Result<Self> {
        if num_rotors == 0 {
            return Err(EnigmaError::InvalidConfiguration(
                "machine needs at least one rotor".into(),
            ));
        }
        Ok(Self {
            rotors: vec![None; num_rotors],
            turnovers: None,
            reflector: None,
            plugboard: None,
            base: None,
            alphabet,
        })
    }

    /// Set the wiring of one rotor. Fails unless it is exactly a permutation
    /// of the alphabet.
    pub fn rotor(mut self, index: usize, wiring: &str) -> Result<Self> {
        if index >= self.rotors.len() {
            return Err(EnigmaError::InvalidConfiguration(format!(
                "rotor index {} out of range ({} rotors)",
                index,
                self.rotors.len()
            )));
        }
        self.rotors[index] = Some(Wiring::from_str(&self.alphabet, wiring)?);
        Ok(self)
    }

    /// Fill every rotor slot with a fresh random permutation.
    pub fn random_rotors<R: Rng>(mut self, rng: &mut R) -> Self {
        for slot in self.rotors.iter_mut() {
            *slot = Some(Wiring::random(&self.alphabet, rng));
        }
        self
    }

    /// Set the reflector. Fails unless it is a permutation and a
    /// fixed-point-free involution.
    pub fn reflector(mut self, wiring: &str) -> Result<Self> {
        self.reflector = Some(Wiring::reflector_from_str(&self.alphabet, wiring)?);
        Ok(self)
    }

    pub fn random_reflector<R: Rng>(mut self, rng: &mut R) -> Result<Self> {
        self.reflector = Some(Wiring::random_reflector(&self.alphabet, rng)?);
        Ok(self)
    }

    /// Set the plugboard pairs. Fails if any symbol appears in more than one
    /// pair or lies outside the alphabet.
    pub fn plugboard(mut self, pairs: &[(char, char)]) -> Result<Self> {
        self.plugboard = Some(Plugboard::from_pairs(&self.alphabet, pairs)?);
        Ok(self)
    }

    pub fn random_plugboard<R: Rng>(mut self, rng: &mut R, max_pairs: usize) -> Self {
        self.plugboard = Some(Plugboard::random(&self.alphabet, rng, max_pairs));
        self
    }

    /// Set the turnover values, one per rotor, each in [1, alphabet size].
    pub fn turnovers(mut self, values: &[usize]) -> Result<Self> {
        if values.len() != self.rotors.len() {
            return Err(EnigmaError::InvalidTurnover(format!(
                "{} turnover values for {} rotors",
                values.len(),
                self.rotors.len()
            )));
        }
        for &v in values {
            if v < 1 || v > self.alphabet.len() {
                return Err(EnigmaError::InvalidTurnover(format!(
                    "turnover {} outside [1, {}]",
                    v,
                    self.alphabet.len()
                )));
            }
        }
        self.turnovers = Some(values.to_vec());
        Ok(self)
    }

    pub fn random_turnovers<R: Rng>(mut self, rng: &mut R) -> Self {
        let n = self.alphabet.len();
        self.turnovers = Some(
            (0..self.rotors.len())
                .map(|_| rng.gen_range(1..=n))
                .collect(),
        );
        self
    }

    /// Set the starting rotor positions, one alphabet symbol per rotor.
    pub fn base(mut self, symbols: &str) -> Result<Self> {
        let chars: Vec<char> = symbols.chars().collect();
        if chars.len() != self.rotors.len() {
            return Err(EnigmaError::InvalidBase(format!(
                "base '{}' has {} symbols for {} rotors",
                symbols,
                chars.len(),
                self.rotors.len()
            )));
        }
        let mut base = Vec::with_capacity(chars.len());
        for c in chars {
            let i = self.alphabet.index_of(c).ok_or_else(|| {
                EnigmaError::InvalidBase(format!("symbol '{c}' is not in the alphabet"))
            })?;
            base.push(i);
        }
        self.base = Some(base);
        Ok(self)
    }

    /// Assemble the machine. Unset rotors default to the identity wiring,
    /// turnovers to the alphabet size, the base to the first alphabet symbol
    /// and the plugboard to no pairs. A reflector has no valid default (the
    /// identity has fixed points), so one must have been set.
    pub fn build(self) -> Result<Machine> {
        let n = self.alphabet.len();
        let num = self.rotors.len();

        let reflector = self.reflector.ok_or_else(|| {
            EnigmaError::InvalidConfiguration("no reflector wiring was set".into())
        })?;

        let turnovers = self.turnovers.unwrap_or_else(|| vec![n; num]);
        let rotors = self
            .rotors
            .into_iter()
            .zip(turnovers)
            .map(|(w, turnover)| Rotor {
                wiring: w.unwrap_or_else(|| Wiring::identity(&self.alphabet)),
                turnover,
            })
            .collect();

        let machine = Machine {
            rotors,
            reflector,
            plugboard: self
                .plugboard
                .unwrap_or_else(|| Plugboard::identity(&self.alphabet)),
            base: self.base.unwrap_or_else(|| vec![0; num]),
            alphabet: self.alphabet,
        };
        validate_machine(&machine)?;
        Ok(machine)
    }
}
