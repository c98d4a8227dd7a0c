//! # OxiLZ-LZ78: Pure Rust LZ78 Compression
//!
//! This crate provides LZ78 compression and decompression of arbitrary byte
//! streams.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Streaming**: Any `Read` in, any `Write` out, 4 KiB block buffering
//! - **Variable-width codes**: Code width grows with the dictionary
//! - **Bounded memory**: The dictionary is reset once 65,533 codes are used
//! - **Portable header**: Little-endian on disk regardless of host
//!
//! ## Stream Format
//!
//! - **Header**: 4-byte magic, 2-byte protection bits, little-endian
//! - **Pairs**: `bitlen(next_code)` bits of code, then 8 bits of symbol,
//!   LSB-first with no padding between pairs
//! - **Stop pair**: Code 0 at the current width; the last byte is
//!   zero-padded
//!
//! ## Example
//!
//! ```rust
//! use oxilz_lz78::{compress, decompress};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! // Compress
//! let compressed = compress(original).unwrap();
//!
//! // Decompress
//! let decompressed = decompress(&compressed).unwrap();
//!
//! assert_eq!(decompressed, original);
//! ```
//!
//! ## Streaming
//!
//! ```rust
//! use oxilz_lz78::{Lz78Decoder, Lz78Encoder};
//!
//! let mut encoder = Lz78Encoder::new().unwrap();
//! let mut compressed = Vec::new();
//! let stats = encoder
//!     .encode(&b"abracadabra"[..], &mut compressed, 0o600)
//!     .unwrap();
//! assert_eq!(stats.total_syms, 11);
//!
//! let mut decoder = Lz78Decoder::new().unwrap();
//! let mut decompressed = Vec::new();
//! let decoded = decoder.decode(compressed.as_slice(), &mut decompressed).unwrap();
//! assert_eq!(decoded.header.protection, 0o600);
//! assert_eq!(decompressed, b"abracadabra");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod code;
mod decoder;
mod encoder;
pub mod header;
pub mod io;
mod stats;
pub mod trie;
pub mod word;

pub use code::{CodeCounter, EMPTY_CODE, MAX_CODE, START_CODE, STOP_CODE};
pub use decoder::Lz78Decoder;
pub use encoder::Lz78Encoder;
pub use header::{DEFAULT_PROTECTION, FileHeader, MAGIC};
pub use oxilz_core::{ByteOrder, OxiLzError, Result};
pub use stats::{Decoded, Stats};

/// Compress data with LZ78, recording the default protection bits.
///
/// # Example
///
/// ```rust
/// use oxilz_lz78::compress;
///
/// let data = vec![b'X'; 1000];
/// let compressed = compress(&data).unwrap();
/// assert!(compressed.len() < data.len());
/// ```
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    compress_with_protection(data, DEFAULT_PROTECTION)
}

/// Compress data with LZ78, recording `protection` in the header.
pub fn compress_with_protection(data: &[u8], protection: u16) -> Result<Vec<u8>> {
    let mut encoder = Lz78Encoder::new()?;
    let mut output = Vec::new();
    encoder.encode(data, &mut output, protection)?;
    Ok(output)
}

/// Decompress one LZ78 stream.
///
/// # Example
///
/// ```rust
/// use oxilz_lz78::{compress, decompress};
///
/// let original = b"Hello, World!";
/// let compressed = compress(original).unwrap();
/// assert_eq!(decompress(&compressed).unwrap(), original);
/// ```
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = Lz78Decoder::new()?;
    let mut output = Vec::new();
    decoder.decode(data, &mut output)?;
    Ok(output)
}
