//! Block-buffered bit-level I/O.
//!
//! `BlockBitWriter` and `BlockBitReader` pack values into a fixed-size
//! block of [`BLOCK`] bytes and move whole blocks to and from the
//! underlying stream, so each system call carries many codes.
//!
//! # Bit Ordering
//!
//! Values are written LSB-first: bit 0 of a value lands at the current bit
//! index, and bit indices within the block are themselves LSB-first per
//! byte. Bits are extracted from the integer value, never from its memory
//! image, so the packed stream is identical on little- and big-endian
//! hosts.
//!
//! # Example
//!
//! ```
//! use oxilz_core::bitstream::{BlockBitReader, BlockBitWriter};
//!
//! let mut output = Vec::new();
//! {
//!     let mut writer = BlockBitWriter::new(&mut output);
//!     writer.write_bits(0b101, 3).unwrap();
//!     writer.write_bits(0b11001, 5).unwrap();
//!     writer.flush().unwrap();
//! }
//! assert_eq!(output, vec![0xCD]);
//!
//! let mut reader = BlockBitReader::new(output.as_slice());
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(5).unwrap(), 0b11001);
//! ```

use crate::bits::{buf_get_bit, buf_put_bit, bytes};
use crate::block::read_full;
use crate::error::{OxiLzError, Result};
use std::io::{Read, Write};

/// Size in bytes of one I/O block.
pub const BLOCK: usize = 4096;

/// Number of bits in one block.
const BLOCK_BITS: usize = BLOCK * 8;

/// Widest value accepted by a single read or write.
const MAX_BITS: u8 = 32;

/// A bit-level reader that refills a fixed-size block from any `Read`.
#[derive(Debug)]
pub struct BlockBitReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Current block.
    block: Box<[u8; BLOCK]>,
    /// Number of valid bits in the block.
    bits_in_block: usize,
    /// Next bit to read within the block.
    bit_index: usize,
    /// Total bits read (for error reporting and statistics).
    total_bits_read: u64,
}

impl<R: Read> BlockBitReader<R> {
    /// Create a new `BlockBitReader` wrapping the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            block: Box::new([0u8; BLOCK]),
            bits_in_block: 0,
            bit_index: 0,
            total_bits_read: 0,
        }
    }

    /// Get the total number of bits read so far.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    /// Refill the block once every buffered bit has been consumed.
    #[inline]
    fn fill_block(&mut self) -> Result<()> {
        if self.bit_index < self.bits_in_block {
            return Ok(());
        }

        let n = read_full(&mut self.reader, &mut self.block[..])?;
        tracing::trace!(bytes = n, "filled bit block");
        if n == 0 {
            return Err(OxiLzError::unexpected_eof(self.total_bits_read));
        }

        self.bits_in_block = n * 8;
        self.bit_index = 0;
        Ok(())
    }

    /// Read up to 32 bits from the stream.
    ///
    /// The first bit read ends up in the LSB position of the result. Running
    /// out of input before `count` bits are available is reported as
    /// [`OxiLzError::UnexpectedEof`].
    pub fn read_bits(&mut self, count: u8) -> Result<u32> {
        if count > MAX_BITS {
            return Err(OxiLzError::InvalidBitWidth(count));
        }

        let mut value = 0u32;
        for i in 0..count {
            self.fill_block()?;
            if buf_get_bit(&self.block[..], self.bit_index) {
                value |= 1 << i;
            }
            self.bit_index += 1;
        }

        self.total_bits_read += count as u64;
        Ok(value)
    }
}

/// A bit-level writer that emits whole blocks to any `Write`.
///
/// Call [`flush`](Self::flush) when done to write the final partial block
/// (zero-padded to a byte boundary). Dropping the writer flushes on a
/// best-effort basis.
#[derive(Debug)]
pub struct BlockBitWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// Current block.
    block: Box<[u8; BLOCK]>,
    /// Next bit to write within the block.
    bit_index: usize,
    /// Total bits written.
    total_bits_written: u64,
}

impl<W: Write> BlockBitWriter<W> {
    /// Create a new `BlockBitWriter` wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            block: Box::new([0u8; BLOCK]),
            bit_index: 0,
            total_bits_written: 0,
        }
    }

    /// Get the total number of bits written so far.
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Write up to 32 bits to the stream.
    ///
    /// # Arguments
    ///
    /// * `value` - The bits to write (LSB-first); bits above `count` are ignored
    /// * `count` - Number of bits to write (0-32)
    pub fn write_bits(&mut self, value: u32, count: u8) -> Result<()> {
        if count > MAX_BITS {
            return Err(OxiLzError::InvalidBitWidth(count));
        }

        for i in 0..count {
            buf_put_bit(&mut self.block[..], self.bit_index, (value >> i) & 1 == 1);
            self.bit_index += 1;

            if self.bit_index == BLOCK_BITS {
                self.write_block()?;
            }
        }

        self.total_bits_written += count as u64;
        Ok(())
    }

    /// Flush the partial block, padding the last byte with zeros.
    pub fn flush(&mut self) -> Result<()> {
        self.write_block()?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_block(&mut self) -> Result<()> {
        if self.bit_index == 0 {
            return Ok(());
        }

        let len = bytes(self.bit_index as u64) as usize;
        // Clear the unused high bits of the last byte.
        let tail = self.bit_index % 8;
        if tail != 0 {
            self.block[len - 1] &= (1u8 << tail) - 1;
        }

        self.writer.write_all(&self.block[..len])?;
        tracing::trace!(bytes = len, "wrote bit block");
        self.bit_index = 0;
        Ok(())
    }
}

impl<W: Write> Drop for BlockBitWriter<W> {
    fn drop(&mut self) {
        // Best-effort flush on drop
        if self.bit_index > 0 {
            let _ = self.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_basic() {
        // 0b10110101 = 0xB5
        let data = [0xB5u8];
        let mut reader = BlockBitReader::new(&data[..]);

        assert_eq!(reader.read_bits(1).unwrap(), 1); // LSB first
        assert_eq!(reader.read_bits(1).unwrap(), 0);
        assert_eq!(reader.read_bits(1).unwrap(), 1);
        assert_eq!(reader.read_bits(1).unwrap(), 0);
        assert_eq!(reader.read_bits(4).unwrap(), 0b1011);
        assert_eq!(reader.bits_read(), 8);
    }

    #[test]
    fn test_reader_multi_byte() {
        let data = [0xFFu8, 0x00];
        let mut reader = BlockBitReader::new(&data[..]);

        assert_eq!(reader.read_bits(4).unwrap(), 0xF);
        assert_eq!(reader.read_bits(8).unwrap(), 0x0F); // Crosses byte boundary
        assert_eq!(reader.read_bits(4).unwrap(), 0x0);
    }

    #[test]
    fn test_reader_truncated() {
        let data = [0xABu8];
        let mut reader = BlockBitReader::new(&data[..]);

        assert_eq!(reader.read_bits(6).unwrap(), 0x2B);
        let err = reader.read_bits(4).unwrap_err();
        assert!(matches!(err, OxiLzError::UnexpectedEof { bit_position: 6 }));
    }

    #[test]
    fn test_zero_width() {
        let mut reader = BlockBitReader::new(&[0u8; 0][..]);
        assert_eq!(reader.read_bits(0).unwrap(), 0);

        let mut output = Vec::new();
        let mut writer = BlockBitWriter::new(&mut output);
        writer.write_bits(0xFFFF, 0).unwrap();
        assert_eq!(writer.bits_written(), 0);
    }

    #[test]
    fn test_writer_multi_bits() {
        let mut output = Vec::new();
        {
            let mut writer = BlockBitWriter::new(&mut output);
            writer.write_bits(0b101, 3).unwrap();
            writer.write_bits(0b11001, 5).unwrap();
            writer.write_bits(0b1, 1).unwrap();
            writer.flush().unwrap();
        }
        // 3 bits: 101, 5 bits: 11001 -> 11001_101 = 0xCD, then a padded 0x01
        assert_eq!(output, vec![0xCD, 0x01]);
    }

    #[test]
    fn test_writer_ignores_high_bits() {
        let mut output = Vec::new();
        {
            let mut writer = BlockBitWriter::new(&mut output);
            writer.write_bits(0xFFFF_FFF0, 4).unwrap();
        }
        assert_eq!(output, vec![0x00]);
    }

    #[test]
    fn test_block_boundary_roundtrip() {
        // 9-bit values straddle the block boundary several times.
        let values: Vec<u32> = (0..10_000u32).map(|i| (i * 37) % 512).collect();

        let mut output = Vec::new();
        {
            let mut writer = BlockBitWriter::new(&mut output);
            for &v in &values {
                writer.write_bits(v, 9).unwrap();
            }
            assert_eq!(writer.bits_written(), 90_000);
            writer.flush().unwrap();
        }
        assert_eq!(output.len(), 11_250);

        let mut reader = BlockBitReader::new(output.as_slice());
        for &v in &values {
            assert_eq!(reader.read_bits(9).unwrap(), v);
        }
    }

    #[test]
    fn test_flush_on_drop() {
        let mut output = Vec::new();
        {
            let mut writer = BlockBitWriter::new(&mut output);
            writer.write_bits(0x3, 2).unwrap();
        }
        assert_eq!(output, vec![0x03]);
    }

    #[test]
    fn test_invalid_width() {
        let mut output = Vec::new();
        let mut writer = BlockBitWriter::new(&mut output);
        assert!(matches!(
            writer.write_bits(0, 33),
            Err(OxiLzError::InvalidBitWidth(33))
        ));
    }
}
