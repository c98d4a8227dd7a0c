//! Block-buffered byte I/O.
//!
//! Bytes are moved between the caller and the underlying stream in
//! [`BLOCK`]-sized transfers. A single `read`/`write` call may move fewer
//! bytes than requested, so [`read_full`] loops until the block is full or
//! the stream ends.

use crate::bitstream::BLOCK;
use crate::error::Result;
use std::io::{self, Read, Write};

/// Read into `buf` until it is full or the reader reports end of stream.
///
/// Returns the number of bytes read; a value smaller than `buf.len()` means
/// the stream ended.
pub fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut total = 0;
    while total < buf.len() {
        match reader.read(&mut buf[total..]) {
            Ok(0) => break,
            Ok(n) => total += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(total)
}

/// A byte reader that refills a fixed-size block from the underlying reader.
#[derive(Debug)]
pub struct BlockByteReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Current block.
    block: Box<[u8; BLOCK]>,
    /// Number of valid bytes in the block.
    filled: usize,
    /// Next byte to hand out.
    pos: usize,
    /// Set once the reader returned a short block.
    exhausted: bool,
    /// Total bytes handed out.
    total_bytes_read: u64,
}

impl<R: Read> BlockByteReader<R> {
    /// Create a new `BlockByteReader` wrapping the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            block: Box::new([0u8; BLOCK]),
            filled: 0,
            pos: 0,
            exhausted: false,
            total_bytes_read: 0,
        }
    }

    /// Total number of bytes returned by [`read_byte`](Self::read_byte).
    pub fn bytes_read(&self) -> u64 {
        self.total_bytes_read
    }

    /// Read the next byte, or `None` at end of stream.
    pub fn read_byte(&mut self) -> Result<Option<u8>> {
        if self.pos == self.filled {
            if self.exhausted {
                return Ok(None);
            }
            self.filled = read_full(&mut self.reader, &mut self.block[..])?;
            self.pos = 0;
            self.exhausted = self.filled < BLOCK;
            tracing::trace!(bytes = self.filled, "filled symbol block");
            if self.filled == 0 {
                return Ok(None);
            }
        }

        let byte = self.block[self.pos];
        self.pos += 1;
        self.total_bytes_read += 1;
        Ok(Some(byte))
    }
}

/// A byte writer that emits whole blocks to the underlying writer.
///
/// Any partially filled block is written by [`flush`](Self::flush), and on
/// a best-effort basis when the writer is dropped.
#[derive(Debug)]
pub struct BlockByteWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// Current block.
    block: Box<[u8; BLOCK]>,
    /// Number of pending bytes in the block.
    len: usize,
    /// Total bytes accepted.
    total_bytes_written: u64,
}

impl<W: Write> BlockByteWriter<W> {
    /// Create a new `BlockByteWriter` wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            block: Box::new([0u8; BLOCK]),
            len: 0,
            total_bytes_written: 0,
        }
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Total number of bytes accepted so far (flushed or pending).
    pub fn bytes_written(&self) -> u64 {
        self.total_bytes_written
    }

    /// Append bytes, writing out every block that fills up.
    pub fn write_bytes(&mut self, mut buf: &[u8]) -> Result<()> {
        while !buf.is_empty() {
            let take = (BLOCK - self.len).min(buf.len());
            self.block[self.len..self.len + take].copy_from_slice(&buf[..take]);
            self.len += take;
            self.total_bytes_written += take as u64;
            buf = &buf[take..];

            if self.len == BLOCK {
                self.write_block()?;
            }
        }
        Ok(())
    }

    /// Write any pending bytes and flush the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.write_block()?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_block(&mut self) -> Result<()> {
        if self.len > 0 {
            self.writer.write_all(&self.block[..self.len])?;
            tracing::trace!(bytes = self.len, "wrote symbol block");
            self.len = 0;
        }
        Ok(())
    }
}

impl<W: Write> Drop for BlockByteWriter<W> {
    fn drop(&mut self) {
        // Best-effort flush on drop
        if self.len > 0 {
            let _ = self.flush();
        }
    }
}
