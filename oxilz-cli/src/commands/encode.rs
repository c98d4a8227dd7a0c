//! Encode command implementation.

use crate::StreamArgs;
use crate::utils::{apply_protection, open_sink, open_source};
use oxilz_lz78::Lz78Encoder;
use std::io::Write;

/// Compress the input into the output, carrying the input's mode bits.
pub fn cmd_encode(args: &StreamArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (input, protection) = open_source(args.input.as_deref())?;
    let (mut output, handle) = open_sink(args.output.as_deref())?;
    apply_protection(handle.as_ref(), protection)?;

    let mut encoder = Lz78Encoder::new()?;
    let stats = encoder.encode(input, &mut output, protection)?;
    output.flush()?;

    if args.verbose {
        eprintln!("{}", stats);
    }
    Ok(())
}
