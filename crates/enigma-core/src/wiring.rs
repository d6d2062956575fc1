// crates/enigma-core/src/wiring.rs
//
// A wiring is a permutation of the alphabet, expressed as position tables.
// Forward and inverse tables are computed once at build time so the
// per-character path is O(1) per rotor.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::alphabet::Alphabet;
use crate::error::{EnigmaError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wiring {
    forward: Vec<usize>,
    inverse: Vec<usize>,
}

impl Wiring {
    /// Parse a rotor wiring string: every alphabet symbol exactly once.
    pub fn from_str(alphabet: &Alphabet, s: &str) -> Result<Self> {
        let forward = permutation_of(alphabet, s)?;
        Ok(Self::from_table(forward))
    }

    /// Parse a reflector wiring string. On top of being a permutation it must
    /// be an involution with no fixed point: pairs of symbols swapped, none
    /// mapping to itself.
    pub fn reflector_from_str(alphabet: &Alphabet, s: &str) -> Result<Self> {
        let forward = permutation_of(alphabet, s)?;
        for (i, &j) in forward.iter().enumerate() {
            if j == i {
                return Err(EnigmaError::InvalidWiring(format!(
                    "reflector maps '{}' to itself",
                    alphabet.symbol(i)
                )));
            }
            if forward[j] != i {
                return Err(EnigmaError::InvalidWiring(format!(
                    "reflector is not an involution at '{}'",
                    alphabet.symbol(i)
                )));
            }
        }
        Ok(Self::from_table(forward))
    }

    /// Identity wiring (each symbol maps to itself). Never valid as a
    /// reflector; the builder uses it as the rotor default.
    pub fn identity(alphabet: &Alphabet) -> Self {
        Self::from_table((0..alphabet.len()).collect())
    }

    /// Uniform random permutation.
    pub fn random<R: Rng>(alphabet: &Alphabet, rng: &mut R) -> Self {
        let mut forward: Vec<usize> = (0..alphabet.len()).collect();
        forward.shuffle(rng);
        Self::from_table(forward)
    }

    /// Random fixed-point-free involution: repeatedly draw two symbols from
    /// the unpaired remainder and swap them, until none remain.
    pub fn random_reflector<R: Rng>(alphabet: &Alphabet, rng: &mut R) -> Result<Self> {
        let n = alphabet.len();
        if n % 2 != 0 {
            return Err(EnigmaError::InvalidWiring(
                "a fixed-point-free reflector needs an even alphabet size".into(),
            ));
        }
        let mut forward = vec![0usize; n];
        let mut unpaired: Vec<usize> = (0..n).collect();
        while unpaired.len() >= 2 {
            let a = unpaired.swap_remove(rng.gen_range(0..unpaired.len()));
            let b = unpaired.swap_remove(rng.gen_range(0..unpaired.len()));
            forward[a] = b;
            forward[b] = a;
        }
        Ok(Self::from_table(forward))
    }

    fn from_table(forward: Vec<usize>) -> Self {
        let mut inverse = vec![0usize; forward.len()];
        for (i, &j) in forward.iter().enumerate() {
            inverse[j] = i;
        }
        Self { forward, inverse }
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    #[inline]
    pub fn forward(&self, i: usize) -> usize {
        self.forward[i]
    }

    #[inline]
    pub fn inverse(&self, i: usize) -> usize {
        self.inverse[i]
    }

    /// Render as a wiring string in the given alphabet.
    pub fn to_string_in(&self, alphabet: &Alphabet) -> String {
        self.forward.iter().map(|&j| alphabet.symbol(j)).collect()
    }
}

fn permutation_of(alphabet: &Alphabet, s: &str) -> Result<Vec<usize>> {
    let n = alphabet.len();
    let chars: Vec<char> = s.chars().collect();
    if chars.len() != n {
        return Err(EnigmaError::InvalidWiring(format!(
            "wiring has {} symbols, alphabet has {}",
            chars.len(),
            n
        )));
    }
    let mut seen = vec![false; n];
    let mut forward = Vec::with_capacity(n);
    for c in chars {
        let i = alphabet.index_of(c).ok_or_else(|| {
            EnigmaError::InvalidWiring(format!("symbol '{c}' is not in the alphabet"))
        })?;
        if seen[i] {
            return Err(EnigmaError::InvalidWiring(format!(
                "symbol '{c}' appears more than once"
            )));
        }
        seen[i] = true;
        forward.push(i);
    }
    Ok(forward)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn inverse_undoes_forward() {
        let a = Alphabet::latin_upper();
        let w = Wiring::from_str(&a, "EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
        for i in 0..a.len() {
            assert_eq!(w.inverse(w.forward(i)), i);
        }
    }

    #[test]
    fn random_reflector_is_fixed_point_free_involution() {
        let a = Alphabet::latin_upper();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let w = Wiring::random_reflector(&a, &mut rng).unwrap();
        for i in 0..a.len() {
            assert_ne!(w.forward(i), i);
            assert_eq!(w.forward(w.forward(i)), i);
        }
    }

    #[test]
    fn round_trips_through_string_form() {
        let a = Alphabet::latin_upper();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let w = Wiring::random(&a, &mut rng);
        let s = w.to_string_in(&a);
        assert_eq!(Wiring::from_str(&a, &s).unwrap(), w);
    }
}
