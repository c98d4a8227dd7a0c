//! # OxiLZ Core
//!
//! Core components for the OxiLZ dictionary codec.
//!
//! This crate provides the building blocks shared by the encoder and the
//! decoder:
//!
//! - [`bits`]: Bit length, bit-to-byte rounding and single-bit access on
//!   bytes, 16-bit words and byte buffers
//! - [`endian`]: Host byte order detection and canonical (little-endian)
//!   normalization
//! - [`bitstream`]: Block-buffered, LSB-first bit reader and writer
//! - [`block`]: Block-buffered byte reader and writer
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L4: CLI                                                 │
//! │     encode / decode executables                         │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     LZ78 trie, word table, pair I/O, file header        │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: BitStream (this crate)                              │
//! │     BlockBitReader/Writer, BlockByteReader/Writer       │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxilz_core::bitstream::{BlockBitReader, BlockBitWriter};
//!
//! let mut output = Vec::new();
//! {
//!     let mut writer = BlockBitWriter::new(&mut output);
//!     writer.write_bits(0b101, 3).unwrap();
//!     writer.write_bits(0xAB, 8).unwrap();
//!     writer.flush().unwrap();
//! }
//!
//! let mut reader = BlockBitReader::new(output.as_slice());
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(8).unwrap(), 0xAB);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

pub mod bits;
pub mod bitstream;
pub mod block;
pub mod endian;
pub mod error;

// Re-exports for convenience
pub use bitstream::{BLOCK, BlockBitReader, BlockBitWriter};
pub use block::{BlockByteReader, BlockByteWriter};
pub use endian::ByteOrder;
pub use error::{OxiLzError, Result};
