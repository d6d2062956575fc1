// crates/enigma-cli/src/cmd/setting.rs
//
// Shared machine-setting flags. Precedence per piece:
// 1) explicit flag value
// 2) --random: drawn from the seeded RNG
// 3) built-in default (historical wirings on the Latin alphabet, otherwise
//    the builder's identity defaults)

use anyhow::{bail, Context};
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use enigma_core::alphabet::LATIN_UPPER;
use enigma_core::plugboard::DEFAULT_MAX_PAIRS;
use enigma_core::{defaults, Alphabet, Machine, MachineBuilder};

#[derive(Args)]
pub struct SettingArgs {
    /// Alphabet: ordered distinct symbols
    #[arg(long, default_value = LATIN_UPPER)]
    pub alphabet: String,

    /// Rotor wiring, repeat once per rotor, first rotor first
    /// (default: historical rotors III, II, I)
    #[arg(long = "rotor")]
    pub rotors: Vec<String>,

    /// Reflector wiring (default: historical reflector B)
    #[arg(long)]
    pub reflector: Option<String>,

    /// Plugboard pair of two symbols; repeatable (e.g. --plug AB --plug CD)
    #[arg(long = "plug")]
    pub plugs: Vec<String>,

    /// Turnover values, comma separated, one per rotor, each in [1, alphabet size]
    #[arg(long)]
    pub turnovers: Option<String>,

    /// Starting rotor positions, one symbol per rotor
    #[arg(long)]
    pub base: Option<String>,

    /// Number of rotors; ignored when --rotor flags are given
    #[arg(long, default_value_t = 3)]
    pub num_rotors: usize,

    /// Randomize every piece not given explicitly (rotors, reflector,
    /// plugboard, turnovers)
    #[arg(long)]
    pub random: bool,

    /// Seed for --random; omit for a time-based seed (printed to stderr)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Max random plugboard pairs when --random fills the plugboard
    #[arg(long, default_value_t = DEFAULT_MAX_PAIRS)]
    pub max_pairs: usize,
}

pub fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

pub fn build_machine(args: &SettingArgs) -> anyhow::Result<Machine> {
    let alphabet = Alphabet::new(&args.alphabet)?;
    let is_latin = args.alphabet == LATIN_UPPER;
    let num_rotors = if args.rotors.is_empty() {
        args.num_rotors
    } else {
        args.rotors.len()
    };

    let mut b = MachineBuilder::new(alphabet, num_rotors)?;

    let seed = args.seed.unwrap_or_else(time_seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    if args.random && args.seed.is_none() {
        eprintln!("seed={seed}");
    }

    if !args.rotors.is_empty() {
        for (i, w) in args.rotors.iter().enumerate() {
            b = b.rotor(i, w).with_context(|| format!("--rotor #{}", i + 1))?;
        }
    } else if args.random {
        b = b.random_rotors(&mut rng);
    } else if is_latin && num_rotors == 3 {
        b = b
            .rotor(0, defaults::ROTOR_III)?
            .rotor(1, defaults::ROTOR_II)?
            .rotor(2, defaults::ROTOR_I)?;
    }

    b = match args.reflector.as_deref() {
        Some(w) => b.reflector(w).context("--reflector")?,
        None if args.random => b.random_reflector(&mut rng)?,
        None if is_latin => b.reflector(defaults::REFLECTOR_B)?,
        None => b,
    };

    if !args.plugs.is_empty() {
        let mut pairs = Vec::with_capacity(args.plugs.len());
        for p in &args.plugs {
            let chars: Vec<char> = p.chars().collect();
            if chars.len() != 2 {
                bail!("--plug '{p}' must be exactly two symbols");
            }
            pairs.push((chars[0], chars[1]));
        }
        b = b.plugboard(&pairs).context("--plug")?;
    } else if args.random {
        b = b.random_plugboard(&mut rng, args.max_pairs);
    }

    b = match args.turnovers.as_deref() {
        Some(list) => {
            let values = list
                .split(',')
                .map(|v| v.trim().parse::<usize>())
                .collect::<Result<Vec<_>, _>>()
                .with_context(|| format!("--turnovers '{list}'"))?;
            b.turnovers(&values)?
        }
        None if args.random => b.random_turnovers(&mut rng),
        None => b,
    };

    if let Some(base) = args.base.as_deref() {
        b = b.base(base).context("--base")?;
    }

    Ok(b.build()?)
}

/// Key-sheet style rendering of a machine setting.
pub fn setting_lines(m: &Machine) -> Vec<String> {
    let mut out = Vec::new();
    out.push(format!("alphabet:  {}", m.alphabet().as_string()));
    for i in 0..m.num_rotors() {
        out.push(format!("rotor {}:   {}", i + 1, m.rotor_string(i)));
    }
    out.push(format!("reflector: {}", m.reflector_string()));
    let plugs: Vec<String> = m
        .plugboard()
        .pairs()
        .iter()
        .map(|&(a, b)| format!("{a}{b}"))
        .collect();
    out.push(format!(
        "plugboard: {}",
        if plugs.is_empty() {
            "(none)".to_string()
        } else {
            plugs.join(" ")
        }
    ));
    let turnovers: Vec<String> = m.turnovers().iter().map(|t| t.to_string()).collect();
    out.push(format!("turnovers: {}", turnovers.join(" ")));
    out.push(format!("base:      {}", m.base_string()));
    out
}
