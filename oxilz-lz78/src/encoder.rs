//! LZ78 encoder (compression).

use crate::code::{CodeCounter, STOP_CODE};
use crate::header::{FileHeader, HEADER_BITS};
use crate::io::{PairWriter, SymReader};
use crate::stats::Stats;
use crate::trie::{NodeId, Trie};
use oxilz_core::ByteOrder;
use oxilz_core::error::Result;
use std::io::{Read, Write};

/// LZ78 encoder for compression.
#[derive(Debug)]
pub struct Lz78Encoder {
    /// Dictionary of sequences seen so far.
    trie: Trie,
    /// Code assignment, shared rule with the decoder.
    codes: CodeCounter,
    /// Host byte order assumed when writing the header.
    byte_order: ByteOrder,
}

impl Lz78Encoder {
    /// Create a new LZ78 encoder.
    pub fn new() -> Result<Self> {
        Ok(Self {
            trie: Trie::new()?,
            codes: CodeCounter::new(),
            byte_order: ByteOrder::NATIVE,
        })
    }

    /// Serialize the header as a host with `order` would.
    pub fn with_byte_order(mut self, order: ByteOrder) -> Self {
        self.byte_order = order;
        self
    }

    /// Encode all of `input` into `output`.
    ///
    /// # Algorithm
    ///
    /// 1. Write the header carrying `protection`
    /// 2. Walk the trie from the root, one input symbol at a time
    /// 3. On a missing transition, emit `(node code, symbol)`, add the
    ///    transition under the next code, and restart at the root
    /// 4. Reset the trie whenever the next code reaches `MAX_CODE`
    /// 5. At end of input, emit a pair for any pending partial match
    /// 6. Emit the stop pair and flush
    ///
    /// The encoder can be reused; each call starts with an empty dictionary.
    pub fn encode<R: Read, W: Write>(
        &mut self,
        input: R,
        mut output: W,
        protection: u16,
    ) -> Result<Stats> {
        self.trie.reset();
        self.codes = CodeCounter::new();

        FileHeader::new(protection).write_to(&mut output, self.byte_order)?;

        let mut syms = SymReader::new(input);
        let mut pairs = PairWriter::new(&mut output);

        let mut node = Trie::ROOT;
        // Parent and symbol that led to `node` while it is not the root.
        let mut pending: Option<(NodeId, u8)> = None;

        while let Some(sym) = syms.read_sym()? {
            if let Some(child) = self.trie.step(node, sym) {
                pending = Some((node, sym));
                node = child;
                continue;
            }

            pairs.write_pair(self.trie.code(node), sym, self.codes.width())?;
            self.trie.insert(node, sym, self.codes.next_code())?;
            node = Trie::ROOT;
            pending = None;
            self.advance_code();
        }

        if let Some((parent, sym)) = pending {
            // The decoder stores this pair as a new word, so the code is
            // consumed on both sides.
            pairs.write_pair(self.trie.code(parent), sym, self.codes.width())?;
            self.advance_code();
        }

        pairs.write_pair(STOP_CODE, 0, self.codes.width())?;
        pairs.flush_pairs()?;

        let stats = Stats {
            total_bits: HEADER_BITS + pairs.bits_written(),
            total_syms: syms.symbols_read(),
        };
        tracing::debug!(
            bits = stats.total_bits,
            symbols = stats.total_syms,
            codes = self.codes.assigned(),
            resets = self.codes.resets(),
            "encoded stream"
        );
        Ok(stats)
    }

    /// Advance the code counter, resetting the trie when it wraps.
    fn advance_code(&mut self) {
        if self.codes.advance() {
            tracing::debug!(resets = self.codes.resets(), "dictionary full, trie reset");
            self.trie.reset();
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::{EMPTY_CODE, START_CODE};
    use crate::decoder::Lz78Decoder;
    use crate::header::HEADER_SIZE;
    use crate::io::{Pair, PairReader};

    fn encode(data: &[u8]) -> (Vec<u8>, Lz78Encoder) {
        let mut encoder = Lz78Encoder::new().unwrap();
        let mut compressed = Vec::new();
        encoder.encode(data, &mut compressed, 0o644).unwrap();
        (compressed, encoder)
    }

    /// Read the pair stream back with the same width rule as the decoder.
    fn pairs_of(compressed: &[u8]) -> Vec<Pair> {
        let mut reader = PairReader::new(&compressed[HEADER_SIZE..]);
        let mut codes = CodeCounter::new();
        let mut pairs = Vec::new();
        while let Some(pair) = reader.read_pair(codes.width()).unwrap() {
            pairs.push(pair);
            codes.advance();
        }
        pairs
    }

    #[test]
    fn test_encode_empty() {
        let (compressed, encoder) = encode(b"");
        // Header plus a 2-bit stop code and its symbol, padded to 2 bytes.
        assert_eq!(compressed.len(), HEADER_SIZE + 2);
        assert!(pairs_of(&compressed).is_empty());
        assert_eq!(encoder.codes_assigned(), 0);
    }

    #[test]
    fn test_encode_pairs() {
        let (compressed, _) = encode(b"abab");
        let pairs = pairs_of(&compressed);
        assert_eq!(
            pairs,
            vec![
                Pair {
                    code: EMPTY_CODE,
                    symbol: b'a'
                },
                Pair {
                    code: EMPTY_CODE,
                    symbol: b'b'
                },
                // "ab": match 'a' (code 2), miss on 'b'
                Pair {
                    code: START_CODE,
                    symbol: b'b'
                },
            ]
        );
    }

    #[test]
    fn test_encode_pending_match() {
        // After "a", "b", the trailing "a" is a pending match of code 2.
        let (compressed, encoder) = encode(b"aba");
        let pairs = pairs_of(&compressed);
        assert_eq!(pairs.len(), 3);
        assert_eq!(
            pairs[2],
            Pair {
                code: EMPTY_CODE,
                symbol: b'a'
            }
        );
        assert_eq!(encoder.codes_assigned(), 3);
    }

    #[test]
    fn test_encode_stats() {
        let data = b"TOBEORNOTTOBEORTOBEORNOT";
        let mut encoder = Lz78Encoder::new().unwrap();
        let mut compressed = Vec::new();
        let stats = encoder.encode(&data[..], &mut compressed, 0o600).unwrap();

        assert_eq!(stats.total_syms, data.len() as u64);
        assert_eq!(stats.compressed_bytes(), compressed.len() as u64);
    }

    #[test]
    fn test_encoder_reuse() {
        let mut encoder = Lz78Encoder::new().unwrap();
        let mut first = Vec::new();
        let mut second = Vec::new();
        encoder.encode(&b"repeat repeat"[..], &mut first, 0).unwrap();
        encoder.encode(&b"repeat repeat"[..], &mut second, 0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_encode_roundtrip() {
        let original = b"This is a test of compression! ".repeat(10);
        let (compressed, encoder) = encode(&original);

        let mut decoder = Lz78Decoder::new().unwrap();
        let mut decompressed = Vec::new();
        decoder.decode(compressed.as_slice(), &mut decompressed).unwrap();
        assert_eq!(decompressed, original);
        assert_eq!(decoder.codes_assigned(), encoder.codes_assigned());
    }
}
