// crates/enigma-core/src/engine.rs
//
// Encoding engine. Holds the mutable rotor-position state derived from a
// machine's base positions and pushes characters through the signal path:
// plugboard -> rotors forward -> reflector -> rotors reverse -> plugboard,
// stepping the rotors once per alphabetic character.
//
// Rotor math, for a rotor at rotation offset `pos` over an alphabet of n:
//   forward:  out = (wiring[(in + pos) mod n] - pos) mod n
//   reverse:  out = (inverse[(in + pos) mod n] - pos) mod n
// The reflector does not rotate and is applied unshifted. For a fixed set of
// positions the two passes are mutual inverses and the reflector is a
// fixed-point-free involution, so the whole per-character map is an
// involution: the same setting decodes what it encoded.

use crate::error::{EnigmaError, Result};
use crate::machine::Machine;
use crate::trace::CharTrace;
use crate::validate::validate_machine;

pub struct Engine {
    machine: Machine,
    /// Current rotation offset per rotor, in [0, alphabet size).
    positions: Vec<usize>,
    /// Cumulative step count per rotor, wrapping through 1..=n. Compared
    /// against the rotor's turnover right after that rotor advances.
    counters: Vec<usize>,
}

impl Engine {
    /// Build an engine at the machine's base positions. Re-validates the
    /// machine; an inconsistent one is reported as a configuration error.
    pub fn new(machine: Machine) -> Result<Self> {
        validate_machine(&machine)
            .map_err(|e| EnigmaError::InvalidConfiguration(e.to_string()))?;
        let positions = machine.base().to_vec();
        let counters = machine.base().to_vec();
        Ok(Self {
            machine,
            positions,
            counters,
        })
    }

    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Wind the rotors back to the machine's base positions.
    pub fn reset(&mut self) {
        self.positions.copy_from_slice(self.machine.base());
        self.counters.copy_from_slice(self.machine.base());
    }

    /// Encode one character. Input is uppercased first; anything outside the
    /// alphabet is returned unchanged and does not step the rotors.
    pub fn encode_char(&mut self, c: char) -> char {
        self.encode_char_inner(c, None)
    }

    /// Encode a whole message, leaving the rotors advanced by one step per
    /// alphabetic character. Output length always equals input length.
    pub fn encode(&mut self, msg: &str) -> String {
        msg.chars().map(|c| self.encode_char(c)).collect()
    }

    /// Like `encode`, but also records what every character went through.
    pub fn encode_with_trace(&mut self, msg: &str) -> (String, Vec<CharTrace>) {
        let mut out = String::with_capacity(msg.len());
        let mut traces = Vec::with_capacity(msg.chars().count());
        for c in msg.chars() {
            let upper = uppercase(c);
            if self.machine.alphabet().contains(upper) {
                let mut t = CharTrace::begin(upper);
                out.push(self.encode_char_inner(c, Some(&mut t)));
                traces.push(t);
            } else {
                out.push(c);
                traces.push(CharTrace::pass_through(c));
            }
        }
        (out, traces)
    }

    fn encode_char_inner(&mut self, input: char, mut trace: Option<&mut CharTrace>) -> char {
        let alphabet = self.machine.alphabet();
        let n = alphabet.len();

        let c = uppercase(input);
        let Some(start) = alphabet.index_of(c) else {
            // Deliberate leniency: unrecognized characters pass through.
            return input;
        };

        let mut i = self.machine.plugboard().map(start);
        if let Some(t) = trace.as_deref_mut() {
            if i != start {
                t.plug_forward = Some(alphabet.symbol(i));
            }
        }

        for (r, rotor) in self.machine.rotors().iter().enumerate() {
            let pos = self.positions[r];
            i = (rotor.wiring.forward((i + pos) % n) + n - pos) % n;
            if let Some(t) = trace.as_deref_mut() {
                t.rotors_forward.push(alphabet.symbol(i));
            }
        }

        i = self.machine.reflector().forward(i);
        if let Some(t) = trace.as_deref_mut() {
            t.reflected = Some(alphabet.symbol(i));
        }

        for r in (0..self.machine.num_rotors()).rev() {
            let pos = self.positions[r];
            i = (self.machine.rotors()[r].wiring.inverse((i + pos) % n) + n - pos) % n;
            if let Some(t) = trace.as_deref_mut() {
                t.rotors_reverse.push(alphabet.symbol(i));
            }
        }

        let end = self.machine.plugboard().map(i);
        if let Some(t) = trace.as_deref_mut() {
            if end != i {
                t.plug_reverse = Some(alphabet.symbol(end));
            }
        }

        let out = self.machine.alphabet().symbol(end);
        let stepped = self.step();
        if let Some(t) = trace.as_deref_mut() {
            t.output = out;
            t.stepped = stepped;
        }
        out
    }

    /// Advance rotor 0, then cascade: while the rotor that just advanced has
    /// its counter on its turnover, advance the next one too. Runs exactly
    /// once per alphabetic character, independent of the character's value.
    fn step(&mut self) -> Vec<usize> {
        let n = self.machine.alphabet().len();
        let mut stepped = Vec::new();
        for r in 0..self.positions.len() {
            self.positions[r] = (self.positions[r] + 1) % n;
            self.counters[r] = self.counters[r] % n + 1;
            stepped.push(r);
            if self.counters[r] != self.machine.rotors()[r].turnover {
                break;
            }
        }
        stepped
    }
}

fn uppercase(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}
