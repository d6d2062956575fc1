// crates/enigma-core/src/trace.rs
//
// Per-character observability for the signal path. A trace is collected on
// the side by `Engine::encode_with_trace`; it never feeds back into the
// cryptographic result.

/// Everything one input character went through. Stage fields are filled in
/// signal-path order; `stepped` lists the rotors advanced afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharTrace {
    pub input: char,
    /// Partner symbol if the plugboard swapped the input.
    pub plug_forward: Option<char>,
    /// Symbol leaving each rotor on the forward pass, rotor 0 first.
    pub rotors_forward: Vec<char>,
    pub reflected: Option<char>,
    /// Symbol leaving each rotor on the reverse pass, last rotor first.
    pub rotors_reverse: Vec<char>,
    /// Partner symbol if the plugboard swapped the result.
    pub plug_reverse: Option<char>,
    pub output: char,
    /// Indices of the rotors that advanced after this character.
    pub stepped: Vec<usize>,
    /// True for characters outside the alphabet; they skip every stage.
    pub pass_through: bool,
}

impl CharTrace {
    pub(crate) fn pass_through(c: char) -> Self {
        Self {
            input: c,
            plug_forward: None,
            rotors_forward: Vec::new(),
            reflected: None,
            rotors_reverse: Vec::new(),
            plug_reverse: None,
            output: c,
            stepped: Vec::new(),
            pass_through: true,
        }
    }

    pub(crate) fn begin(c: char) -> Self {
        Self {
            input: c,
            plug_forward: None,
            rotors_forward: Vec::new(),
            reflected: None,
            rotors_reverse: Vec::new(),
            plug_reverse: None,
            output: c,
            stepped: Vec::new(),
            pass_through: false,
        }
    }

    /// Human-readable step-by-step rendering, one line per stage.
    pub fn lines(&self) -> Vec<String> {
        if self.pass_through {
            return vec![format!("'{}' passed through unchanged", self.input)];
        }
        let mut out = Vec::new();
        out.push(format!("input: {}", self.input));
        if let Some(p) = self.plug_forward {
            out.push(format!("plugboard: {} -> {}", self.input, p));
        }
        for (i, c) in self.rotors_forward.iter().enumerate() {
            out.push(format!("rotor {}: -> {}", i + 1, c));
        }
        if let Some(r) = self.reflected {
            out.push(format!("reflector: -> {r}"));
        }
        let n = self.rotors_reverse.len();
        for (i, c) in self.rotors_reverse.iter().enumerate() {
            out.push(format!("rotor {} (return): -> {}", n - i, c));
        }
        if let Some(p) = self.plug_reverse {
            out.push(format!("plugboard: -> {p}"));
        }
        out.push(format!("output: {}", self.output));
        if !self.stepped.is_empty() {
            let list: Vec<String> = self.stepped.iter().map(|r| (r + 1).to_string()).collect();
            out.push(format!("stepped rotors: {}", list.join(", ")));
        }
        out
    }
}
