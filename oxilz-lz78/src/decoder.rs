//! LZ78 decoder (decompression).

use crate::code::CodeCounter;
use crate::header::{FileHeader, HEADER_BITS};
use crate::io::{PairReader, WordWriter};
use crate::stats::{Decoded, Stats};
use crate::word::WordTable;
use oxilz_core::ByteOrder;
use oxilz_core::error::Result;
use std::io::{Read, Write};

/// LZ78 decoder for decompression.
#[derive(Debug)]
pub struct Lz78Decoder {
    /// Words reconstructed so far, indexed by code.
    table: WordTable,
    /// Code assignment, shared rule with the encoder.
    codes: CodeCounter,
    /// Host byte order assumed when reading the header.
    byte_order: ByteOrder,
}

impl Lz78Decoder {
    /// Create a new LZ78 decoder.
    pub fn new() -> Result<Self> {
        Ok(Self {
            table: WordTable::new()?,
            codes: CodeCounter::new(),
            byte_order: ByteOrder::NATIVE,
        })
    }

    /// Parse the header as a host with `order` would.
    pub fn with_byte_order(mut self, order: ByteOrder) -> Self {
        self.byte_order = order;
        self
    }

    /// Decode one compressed stream from `input` into `output`.
    ///
    /// The header is read and its magic checked before any pair is touched.
    /// Each pair `(code, symbol)` is stored as a new word under the next
    /// code and the word is written out. Decoding stops at the stop pair.
    ///
    /// # Errors
    ///
    /// - [`OxiLzError::InvalidMagic`](oxilz_core::OxiLzError::InvalidMagic)
    ///   if the stream is not ours
    /// - [`OxiLzError::UnexpectedEof`](oxilz_core::OxiLzError::UnexpectedEof)
    ///   if the stream ends before the stop pair
    /// - [`OxiLzError::InvalidCode`](oxilz_core::OxiLzError::InvalidCode)
    ///   if a pair names a code that has not been assigned
    ///
    /// Words decoded before an error have already been passed to `output`.
    pub fn decode<R: Read, W: Write>(&mut self, mut input: R, output: W) -> Result<Decoded> {
        let header = FileHeader::read_from(&mut input, self.byte_order)?;
        header.validate()?;
        tracing::debug!(
            protection = format_args!("{:o}", header.protection),
            "read header"
        );

        self.table.reset();
        self.codes = CodeCounter::new();

        let mut pairs = PairReader::new(&mut input);
        let mut words = WordWriter::new(output);
        let mut scratch = Vec::new();

        while let Some(pair) = pairs.read_pair(self.codes.width())? {
            let code = self.codes.next_code();
            self.table.append_sym(pair.code, pair.symbol, code)?;
            self.table.materialize(code, &mut scratch)?;
            words.write_word(&scratch)?;

            if self.codes.advance() {
                tracing::debug!(resets = self.codes.resets(), "dictionary full, table reset");
                self.table.reset();
            }
        }
        words.flush_words()?;

        let stats = Stats {
            total_bits: HEADER_BITS + pairs.bits_read(),
            total_syms: words.symbols_written(),
        };
        tracing::debug!(
            bits = stats.total_bits,
            symbols = stats.total_syms,
            codes = self.codes.assigned(),
            resets = self.codes.resets(),
            "decoded stream"
        );
        Ok(Decoded { header, stats })
    }

    /// Codes assigned during the last stream.
    pub fn codes_assigned(&self) -> u64 {
        self.codes.assigned()
    }

    /// Dictionary resets during the last stream.
    pub fn resets(&self) -> u64 {
        self.codes.resets()
    }
}
