// crates/enigma-core/src/plugboard.rs
//
// Disjoint unordered symbol pairs; any symbol not listed maps to itself.
// Stored as a full involutive lookup table so application is one index.

use rand::Rng;

use crate::alphabet::Alphabet;
use crate::error::{EnigmaError, Result};

pub const DEFAULT_MAX_PAIRS: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plugboard {
    table: Vec<usize>,
    pairs: Vec<(char, char)>,
}

impl Plugboard {
    /// No pairs plugged; every symbol maps to itself.
    pub fn identity(alphabet: &Alphabet) -> Self {
        Self {
            table: (0..alphabet.len()).collect(),
            pairs: Vec::new(),
        }
    }

    pub fn from_pairs(alphabet: &Alphabet, pairs: &[(char, char)]) -> Result<Self> {
        if pairs.len() > alphabet.len() / 2 {
            return Err(EnigmaError::InvalidPlugboard(format!(
                "{} pairs cannot be disjoint over {} symbols",
                pairs.len(),
                alphabet.len()
            )));
        }
        let mut table: Vec<usize> = (0..alphabet.len()).collect();
        let mut used = vec![false; alphabet.len()];
        let mut kept = Vec::with_capacity(pairs.len());
        for &(a, b) in pairs {
            let i = alphabet.index_of(a).ok_or_else(|| {
                EnigmaError::InvalidPlugboard(format!("symbol '{a}' is not in the alphabet"))
            })?;
            let j = alphabet.index_of(b).ok_or_else(|| {
                EnigmaError::InvalidPlugboard(format!("symbol '{b}' is not in the alphabet"))
            })?;
            if i == j {
                return Err(EnigmaError::InvalidPlugboard(format!(
                    "pair '{a}{b}' plugs a symbol into itself"
                )));
            }
            if used[i] || used[j] {
                return Err(EnigmaError::InvalidPlugboard(format!(
                    "a symbol of pair '{a}{b}' appears in more than one pair"
                )));
            }
            used[i] = true;
            used[j] = true;
            table[i] = j;
            table[j] = i;
            kept.push((a, b));
        }
        Ok(Self { table, pairs: kept })
    }

    /// Up to `max_pairs` random disjoint pairs, drawn from the unpaired
    /// remainder.
    pub fn random<R: Rng>(alphabet: &Alphabet, rng: &mut R, max_pairs: usize) -> Self {
        let mut table: Vec<usize> = (0..alphabet.len()).collect();
        let mut unpaired: Vec<usize> = (0..alphabet.len()).collect();
        let mut pairs = Vec::new();
        while unpaired.len() >= 2 && pairs.len() < max_pairs {
            let a = unpaired.swap_remove(rng.gen_range(0..unpaired.len()));
            let b = unpaired.swap_remove(rng.gen_range(0..unpaired.len()));
            table[a] = b;
            table[b] = a;
            pairs.push((alphabet.symbol(a), alphabet.symbol(b)));
        }
        Self { table, pairs }
    }

    #[inline]
    pub fn map(&self, i: usize) -> usize {
        self.table[i]
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn pairs(&self) -> &[(char, char)] {
        &self.pairs
    }
}
