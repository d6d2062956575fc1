// crates/enigma-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "enigma-cli")]
#[command(about = "Rotor cipher machine CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode (or decode) a message with a machine setting
    Encode(cmd::encode::EncodeArgs),

    /// Generate a reproducible random machine setting (key sheet)
    Keygen(cmd::keygen::KeygenArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Encode(args) => cmd::encode::run(args),
        Commands::Keygen(args) => cmd::keygen::run(args),
    }
}
