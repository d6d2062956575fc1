// crates/enigma-core/src/alphabet.rs
//
// Ordered set of distinct symbols. Defines the universe of valid characters
// and the radix for all positional arithmetic. Fixed for the lifetime of a
// machine setting.

use crate::error::{EnigmaError, Result};

pub const LATIN_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    pub fn new(symbols: &str) -> Result<Self> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.is_empty() {
            return Err(EnigmaError::InvalidConfiguration(
                "alphabet must not be empty".into(),
            ));
        }
        for (i, c) in symbols.iter().enumerate() {
            if symbols[..i].contains(c) {
                return Err(EnigmaError::InvalidConfiguration(format!(
                    "duplicate symbol '{c}' in alphabet"
                )));
            }
        }
        Ok(Self { symbols })
    }

    /// The 26 uppercase Latin letters.
    pub fn latin_upper() -> Self {
        Self {
            symbols: LATIN_UPPER.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    pub fn index_of(&self, c: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == c)
    }

    pub fn contains(&self, c: char) -> bool {
        self.index_of(c).is_some()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn as_string(&self) -> String {
        self.symbols.iter().collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::latin_upper()
    }
}
