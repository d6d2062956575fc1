// crates/enigma-cli/src/cmd/keygen.rs
//
// Print a reproducible random machine setting. Two parties running keygen
// with the same seed get the same key sheet, and `encode --random --seed N`
// with matching flags uses exactly that setting.

use clap::Args;

use crate::cmd::setting::{self, SettingArgs};
use enigma_core::alphabet::LATIN_UPPER;
use enigma_core::plugboard::DEFAULT_MAX_PAIRS;

#[derive(Args)]
pub struct KeygenArgs {
    /// Seed for the generated setting; omit for a time-based seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of rotors
    #[arg(long, default_value_t = 3)]
    pub num_rotors: usize,

    /// Alphabet: ordered distinct symbols
    #[arg(long, default_value = LATIN_UPPER)]
    pub alphabet: String,

    /// Max plugboard pairs
    #[arg(long, default_value_t = DEFAULT_MAX_PAIRS)]
    pub max_pairs: usize,
}

pub fn run(args: KeygenArgs) -> anyhow::Result<()> {
    let seed = args.seed.unwrap_or_else(setting::time_seed);

    let machine = setting::build_machine(&SettingArgs {
        alphabet: args.alphabet,
        rotors: Vec::new(),
        reflector: None,
        plugs: Vec::new(),
        turnovers: None,
        base: None,
        num_rotors: args.num_rotors,
        random: true,
        seed: Some(seed),
        max_pairs: args.max_pairs,
    })?;

    println!("seed:      {seed}");
    for line in setting::setting_lines(&machine) {
        println!("{line}");
    }
    Ok(())
}
