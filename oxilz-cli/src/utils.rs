//! Utility functions for the CLI.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Permission bits that may be applied to an output file.
pub const PERMISSION_MASK: u16 = 0o7777;

/// Install a stderr subscriber honouring `RUST_LOG`, `warn` by default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

/// Open the input, or stdin when `path` is `None`.
///
/// Also returns the input's mode bits (low 16 bits), which `encode` records
/// in the header. Where no mode is available,
/// [`DEFAULT_PROTECTION`](oxilz_lz78::DEFAULT_PROTECTION) is used.
pub fn open_source(path: Option<&Path>) -> io::Result<(Box<dyn Read>, u16)> {
    match path {
        Some(path) => {
            let file = File::open(path)?;
            let mode = file_mode(&file)?;
            Ok((Box::new(file), mode))
        }
        None => stdin_source(),
    }
}

#[cfg(unix)]
fn stdin_source() -> io::Result<(Box<dyn Read>, u16)> {
    use std::os::fd::AsFd;

    let file = File::from(io::stdin().as_fd().try_clone_to_owned()?);
    let mode = file_mode(&file)?;
    Ok((Box::new(file), mode))
}

#[cfg(not(unix))]
fn stdin_source() -> io::Result<(Box<dyn Read>, u16)> {
    Ok((Box::new(io::stdin()), oxilz_lz78::DEFAULT_PROTECTION))
}

#[cfg(unix)]
fn file_mode(file: &File) -> io::Result<u16> {
    use std::os::unix::fs::PermissionsExt;

    Ok(file.metadata()?.permissions().mode() as u16)
}

#[cfg(not(unix))]
fn file_mode(_file: &File) -> io::Result<u16> {
    Ok(oxilz_lz78::DEFAULT_PROTECTION)
}

/// Open the output, or stdout when `path` is `None`.
///
/// A file output is created or truncated. Its handle is returned alongside
/// the writer so permissions can be applied once they are known.
pub fn open_sink(path: Option<&Path>) -> io::Result<(Box<dyn Write>, Option<File>)> {
    match path {
        Some(path) => {
            let file = File::create(path)?;
            let handle = file.try_clone()?;
            Ok((Box::new(file), Some(handle)))
        }
        None => Ok((Box::new(io::stdout().lock()), None)),
    }
}

/// Apply `protection & 0o7777` to a file output. Stdout is left alone.
#[cfg(unix)]
pub fn apply_protection(file: Option<&File>, protection: u16) -> io::Result<()> {
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    if let Some(file) = file {
        let mode = u32::from(protection & PERMISSION_MASK);
        file.set_permissions(Permissions::from_mode(mode))?;
        tracing::debug!(mode = format_args!("{:o}", mode), "applied output permissions");
    }
    Ok(())
}

/// Apply `protection` to a file output. Only unix modes are supported.
#[cfg(not(unix))]
pub fn apply_protection(_file: Option<&File>, _protection: u16) -> io::Result<()> {
    Ok(())
}
