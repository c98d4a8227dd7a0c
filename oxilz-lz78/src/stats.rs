//! Compression statistics.

use crate::header::FileHeader;
use oxilz_core::bits::bytes;
use std::fmt;

/// Bit and symbol counters gathered while encoding or decoding one stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Bits on the compressed side: header plus every pair, stop pair included.
    pub total_bits: u64,
    /// Symbols on the uncompressed side.
    pub total_syms: u64,
}

impl Stats {
    /// Compressed size in bytes.
    pub fn compressed_bytes(&self) -> u64 {
        bytes(self.total_bits)
    }

    /// Uncompressed size in bytes.
    pub fn uncompressed_bytes(&self) -> u64 {
        self.total_syms
    }

    /// Space saving in percent, `100 * (1 - compressed / uncompressed)`.
    ///
    /// An empty input saves nothing and reports `0.0`.
    pub fn space_saving(&self) -> f64 {
        if self.total_syms == 0 {
            return 0.0;
        }
        100.0 * (1.0 - self.compressed_bytes() as f64 / self.uncompressed_bytes() as f64)
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Compressed file size: {} bytes", self.compressed_bytes())?;
        writeln!(f, "Uncompressed file size: {} bytes", self.uncompressed_bytes())?;
        write!(f, "Space saving: {:4.2}%", self.space_saving())
    }
}

/// Result of decoding one stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// Validated header of the stream.
    pub header: FileHeader,
    /// Counters for the stream.
    pub stats: Stats,
}
