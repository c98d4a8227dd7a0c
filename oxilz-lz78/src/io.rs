//! Pair, symbol, and word I/O.
//!
//! The encoder reads raw symbols through [`SymReader`] and writes pairs
//! through [`PairWriter`]; the decoder reads pairs through [`PairReader`] and
//! writes reconstructed words through [`WordWriter`]. Every stream is block
//! buffered. The writers flush their last partial block on
//! [`PairWriter::flush_pairs`]/[`WordWriter::flush_words`], and on a
//! best-effort basis when dropped on an error path.
//!
//! A pair is `width` bits of code followed by 8 bits of symbol, both
//! LSB-first, with no padding between pairs.

use crate::code::STOP_CODE;
use oxilz_core::bitstream::{BlockBitReader, BlockBitWriter};
use oxilz_core::block::{BlockByteReader, BlockByteWriter};
use oxilz_core::error::{OxiLzError, Result};
use std::io::{Read, Write};

/// Widest code a pair can carry.
const MAX_CODE_BITS: u8 = 16;

/// One `(code, symbol)` unit of the compressed stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    /// Code of the dictionary entry being extended.
    pub code: u16,
    /// Symbol appended to that entry.
    pub symbol: u8,
}

/// Writes pairs into a block-buffered bit stream.
#[derive(Debug)]
pub struct PairWriter<W: Write> {
    bits: BlockBitWriter<W>,
}

impl<W: Write> PairWriter<W> {
    /// Create a pair writer on top of `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            bits: BlockBitWriter::new(writer),
        }
    }

    /// Append the low `width` bits of `code`, then the 8 bits of `symbol`.
    pub fn write_pair(&mut self, code: u16, symbol: u8, width: u8) -> Result<()> {
        if width > MAX_CODE_BITS {
            return Err(OxiLzError::InvalidBitWidth(width));
        }
        self.bits.write_bits(code as u32, width)?;
        self.bits.write_bits(symbol as u32, 8)
    }

    /// Write out any partially filled block.
    pub fn flush_pairs(&mut self) -> Result<()> {
        self.bits.flush()
    }

    /// Total bits of pair data written.
    pub fn bits_written(&self) -> u64 {
        self.bits.bits_written()
    }
}

/// Reads pairs from a block-buffered bit stream.
#[derive(Debug)]
pub struct PairReader<R: Read> {
    bits: BlockBitReader<R>,
}

impl<R: Read> PairReader<R> {
    /// Create a pair reader on top of `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            bits: BlockBitReader::new(reader),
        }
    }

    /// Read one pair whose code is `width` bits wide.
    ///
    /// Returns `None` once the [`STOP_CODE`] pair has been read. A stream
    /// that ends mid-pair yields [`OxiLzError::UnexpectedEof`].
    pub fn read_pair(&mut self, width: u8) -> Result<Option<Pair>> {
        if width > MAX_CODE_BITS {
            return Err(OxiLzError::InvalidBitWidth(width));
        }
        let code = self.bits.read_bits(width)? as u16;
        let symbol = self.bits.read_bits(8)? as u8;

        if code == STOP_CODE {
            return Ok(None);
        }
        Ok(Some(Pair { code, symbol }))
    }

    /// Total bits of pair data read, including the stop pair.
    pub fn bits_read(&self) -> u64 {
        self.bits.bits_read()
    }
}

/// Reads raw input symbols for the encoder.
#[derive(Debug)]
pub struct SymReader<R: Read> {
    bytes: BlockByteReader<R>,
}

impl<R: Read> SymReader<R> {
    /// Create a symbol reader on top of `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            bytes: BlockByteReader::new(reader),
        }
    }

    /// Next input symbol, or `None` once the input is exhausted.
    pub fn read_sym(&mut self) -> Result<Option<u8>> {
        self.bytes.read_byte()
    }

    /// Number of symbols read.
    pub fn symbols_read(&self) -> u64 {
        self.bytes.bytes_read()
    }
}

/// Writes decoded words for the decoder.
#[derive(Debug)]
pub struct WordWriter<W: Write> {
    bytes: BlockByteWriter<W>,
}

impl<W: Write> WordWriter<W> {
    /// Create a word writer on top of `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            bytes: BlockByteWriter::new(writer),
        }
    }

    /// Append the symbols of one word.
    pub fn write_word(&mut self, word: &[u8]) -> Result<()> {
        self.bytes.write_bytes(word)
    }

    /// Write out any partially filled block.
    pub fn flush_words(&mut self) -> Result<()> {
        self.bytes.flush()
    }

    /// Number of symbols written.
    pub fn symbols_written(&self) -> u64 {
        self.bytes.bytes_written()
    }
}
