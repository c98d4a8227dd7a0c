//! Compressed file header.
//!
//! ```text
//! offset  size  field
//!      0     4  magic       (little-endian, 0xBAADBAAC)
//!      4     2  protection  (little-endian, source permission bits)
//! ```
//!
//! The header is serialized as the in-memory image of its two fields after
//! byte-order normalization, so both conversions take the host
//! [`ByteOrder`] as a parameter. Production code passes
//! [`ByteOrder::NATIVE`]; tests can force either order.

use oxilz_core::ByteOrder;
use oxilz_core::error::{OxiLzError, Result};
use std::io::{self, Read, Write};

/// Magic number identifying a compressed stream.
pub const MAGIC: u32 = 0xBAAD_BAAC;

/// Serialized header size in bytes.
pub const HEADER_SIZE: usize = 6;

/// Serialized header size in bits, as counted by the statistics.
pub const HEADER_BITS: u64 = (HEADER_SIZE * 8) as u64;

/// Permission bits used when the source has none to offer.
pub const DEFAULT_PROTECTION: u16 = 0o644;

/// Header written in front of the pair stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// Magic number; must equal [`MAGIC`].
    pub magic: u32,
    /// Permission bits of the original file.
    pub protection: u16,
}

impl FileHeader {
    /// Create a header carrying the given permission bits.
    pub fn new(protection: u16) -> Self {
        Self {
            magic: MAGIC,
            protection,
        }
    }

    /// Swap the fields between host layout and canonical layout.
    ///
    /// A no-op on little-endian hosts; applying it twice is the identity.
    pub fn normalize(self, host: ByteOrder) -> Self {
        Self {
            magic: host.normalize_u32(self.magic),
            protection: host.normalize_u16(self.protection),
        }
    }

    /// In-memory image of the header on a host with the given byte order.
    pub fn to_raw(&self, host: ByteOrder) -> [u8; HEADER_SIZE] {
        let mut raw = [0u8; HEADER_SIZE];
        raw[..4].copy_from_slice(&host.u32_to_raw(self.magic));
        raw[4..].copy_from_slice(&host.u16_to_raw(self.protection));
        raw
    }

    /// Interpret raw header bytes the way a host with the given byte order would.
    pub fn from_raw(raw: [u8; HEADER_SIZE], host: ByteOrder) -> Self {
        Self {
            magic: host.u32_from_raw([raw[0], raw[1], raw[2], raw[3]]),
            protection: host.u16_from_raw([raw[4], raw[5]]),
        }
    }

    /// Canonical on-disk bytes, as produced by a host with the given order.
    pub fn to_bytes(&self, host: ByteOrder) -> [u8; HEADER_SIZE] {
        self.normalize(host).to_raw(host)
    }

    /// Parse canonical on-disk bytes on a host with the given order.
    pub fn from_bytes(bytes: [u8; HEADER_SIZE], host: ByteOrder) -> Self {
        Self::from_raw(bytes, host).normalize(host)
    }

    /// Reject a header whose magic is not [`MAGIC`].
    pub fn validate(&self) -> Result<()> {
        if self.magic != MAGIC {
            return Err(OxiLzError::invalid_magic(MAGIC, self.magic));
        }
        Ok(())
    }

    /// Write the header.
    pub fn write_to<W: Write>(&self, writer: &mut W, host: ByteOrder) -> Result<()> {
        writer.write_all(&self.to_bytes(host))?;
        Ok(())
    }

    /// Read a header. The magic is not checked; see [`validate`](Self::validate).
    pub fn read_from<R: Read>(reader: &mut R, host: ByteOrder) -> Result<Self> {
        let mut bytes = [0u8; HEADER_SIZE];
        reader.read_exact(&mut bytes).map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => OxiLzError::invalid_header(format!(
                "stream shorter than the {HEADER_SIZE}-byte header"
            )),
            _ => OxiLzError::Io(e),
        })?;
        Ok(Self::from_bytes(bytes, host))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_layout() {
        let header = FileHeader::new(0o100644);
        assert_eq!(
            header.to_bytes(ByteOrder::Little),
            [0xAC, 0xBA, 0xAD, 0xBA, 0xA4, 0x81]
        );
    }

    #[test]
    fn test_same_bytes_on_both_hosts() {
        let header = FileHeader::new(0o755);
        let little = header.to_bytes(ByteOrder::Little);
        let big = header.to_bytes(ByteOrder::Big);
        assert_eq!(little, big);

        // A big-endian host reading a little-endian host's file and vice versa.
        assert_eq!(FileHeader::from_bytes(little, ByteOrder::Big), header);
        assert_eq!(FileHeader::from_bytes(big, ByteOrder::Little), header);
    }

    #[test]
    fn test_unnormalized_image_differs_on_big_host() {
        let header = FileHeader::new(0x0102);
        let raw = header.to_raw(ByteOrder::Big);
        assert_ne!(raw, header.to_bytes(ByteOrder::Big));
        assert_eq!(FileHeader::from_raw(raw, ByteOrder::Big), header);
    }

    #[test]
    fn test_validate() {
        assert!(FileHeader::new(0).validate().is_ok());

        let bad = FileHeader {
            magic: 0xDEAD_BEEF,
            protection: 0,
        };
        assert!(matches!(
            bad.validate(),
            Err(OxiLzError::InvalidMagic {
                expected: MAGIC,
                found: 0xDEAD_BEEF
            })
        ));
    }

    #[test]
    fn test_read_write() {
        let mut buf = Vec::new();
        FileHeader::new(0o600)
            .write_to(&mut buf, ByteOrder::NATIVE)
            .unwrap();
        assert_eq!(buf.len(), HEADER_SIZE);

        let header = FileHeader::read_from(&mut buf.as_slice(), ByteOrder::NATIVE).unwrap();
        assert_eq!(header.protection, 0o600);
        header.validate().unwrap();
    }

    #[test]
    fn test_short_header() {
        let err = FileHeader::read_from(&mut &[0xACu8, 0xBA, 0xAD][..], ByteOrder::NATIVE)
            .unwrap_err();
        assert!(matches!(err, OxiLzError::InvalidHeader { .. }));
    }
}
