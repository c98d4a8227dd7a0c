//! Decode command implementation.

use crate::StreamArgs;
use crate::utils::{apply_protection, open_sink, open_source};
use oxilz_lz78::Lz78Decoder;
use std::io::Write;

/// Decompress the input into the output and restore the recorded mode bits.
pub fn cmd_decode(args: &StreamArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (input, _) = open_source(args.input.as_deref())?;
    let (mut output, handle) = open_sink(args.output.as_deref())?;

    let mut decoder = Lz78Decoder::new()?;
    // Words decoded before a failure are still delivered.
    let result = decoder.decode(input, &mut output);
    output.flush()?;
    let decoded = result?;
    apply_protection(handle.as_ref(), decoded.header.protection)?;

    if args.verbose {
        eprintln!("{}", decoded.stats);
    }
    Ok(())
}
