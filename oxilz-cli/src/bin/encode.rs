//! `encode`: compress a file using LZ78.

use clap::Parser;
use oxilz_cli::commands::cmd_encode;
use oxilz_cli::{StreamArgs, exit_on_error, parse_or_exit, utils};

#[derive(Parser)]
#[command(name = "encode")]
#[command(about = "Compresses files using the LZ78 compression algorithm")]
#[command(long_about = "
Compresses files using the LZ78 compression algorithm.
Compressed files are decompressed with the corresponding decoder.

Examples:
  encode -i notes.txt -o notes.lz78
  encode -v < notes.txt > notes.lz78
  RUST_LOG=debug encode -i notes.txt -o notes.lz78
")]
struct Cli {
    #[command(flatten)]
    stream: StreamArgs,
}

fn main() {
    let cli: Cli = parse_or_exit();
    utils::init_tracing();
    exit_on_error(cmd_encode(&cli.stream));
}
