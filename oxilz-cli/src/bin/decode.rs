//! `decode`: decompress a file produced by `encode`.

use clap::Parser;
use oxilz_cli::commands::cmd_decode;
use oxilz_cli::{StreamArgs, exit_on_error, parse_or_exit, utils};

#[derive(Parser)]
#[command(name = "decode")]
#[command(about = "Decompresses files compressed with the LZ78 encoder")]
#[command(long_about = "
Decompresses files using the LZ78 decompression algorithm.
Used with files compressed by the corresponding encoder.

Examples:
  decode -i notes.lz78 -o notes.txt
  decode -v < notes.lz78 > notes.txt
")]
struct Cli {
    #[command(flatten)]
    stream: StreamArgs,
}

fn main() {
    let cli: Cli = parse_or_exit();
    utils::init_tracing();
    exit_on_error(cmd_decode(&cli.stream));
}
