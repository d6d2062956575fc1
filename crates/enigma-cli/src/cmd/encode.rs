// crates/enigma-cli/src/cmd/encode.rs

use std::io::Read;

use clap::Args;
use enigma_core::Engine;

use crate::cmd::setting::{self, SettingArgs};

#[derive(Args)]
pub struct EncodeArgs {
    /// Message to encode; reads stdin when omitted
    pub msg: Option<String>,

    #[command(flatten)]
    pub setting: SettingArgs,

    /// -v prints the machine setting, -vv also the per-character signal path
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn run(args: EncodeArgs) -> anyhow::Result<()> {
    let machine = setting::build_machine(&args.setting)?;

    let msg = match args.msg {
        Some(m) => m,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            // A trailing newline would pass through into the output.
            buf.trim_end_matches('\n').to_string()
        }
    };

    let mut engine = Engine::new(machine)?;

    if args.verbose >= 1 {
        for line in setting::setting_lines(engine.machine()) {
            eprintln!("{line}");
        }
    }

    let out = if args.verbose >= 2 {
        let (out, traces) = engine.encode_with_trace(&msg);
        for t in &traces {
            for line in t.lines() {
                eprintln!("  {line}");
            }
        }
        out
    } else {
        engine.encode(&msg)
    };

    if args.verbose >= 1 {
        eprintln!("message: {msg}");
        eprintln!("code:    {out}");
    }
    println!("{out}");
    Ok(())
}
