//! OxiLZ CLI - shared plumbing for the `encode` and `decode` executables.
//!
//! Both executables read from stdin or `-i <PATH>` and write to stdout or
//! `-o <PATH>`. Help and usage errors exit with status 1, as does any
//! failure while coding.

pub mod commands;
pub mod utils;

use clap::Args;
use std::path::PathBuf;

/// Options shared by both executables.
#[derive(Args, Debug, Clone, Default)]
pub struct StreamArgs {
    /// Display compression statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Input file (default: stdin)
    #[arg(short, long, value_name = "input")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "output")]
    pub output: Option<PathBuf>,
}

/// Parse arguments for `P`, printing help or usage errors and exiting with
/// status 1 on either.
pub fn parse_or_exit<P: clap::Parser>() -> P {
    match P::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    }
}

/// Report a failed run and exit with status 1.
pub fn exit_on_error(result: Result<(), Box<dyn std::error::Error>>) {
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
