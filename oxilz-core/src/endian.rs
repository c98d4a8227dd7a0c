//! Byte order detection and normalization.
//!
//! Multi-byte header fields are stored little-endian on disk. A host that
//! lays out integers big-endian must swap them right after reading raw
//! bytes and right before writing them. The swap is an involution, so the
//! same [`ByteOrder::normalize_u16`]/[`ByteOrder::normalize_u32`] call is
//! used at both points.

/// Byte order of a host (or of a raw in-memory image).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Least significant byte first (the canonical on-disk order).
    Little,
    /// Most significant byte first.
    Big,
}

impl ByteOrder {
    /// Byte order of the machine this crate was built for.
    pub const NATIVE: Self = if cfg!(target_endian = "big") {
        Self::Big
    } else {
        Self::Little
    };

    /// The canonical on-disk byte order.
    pub const CANONICAL: Self = Self::Little;

    /// Whether this is a big-endian order.
    #[inline]
    pub const fn is_big(self) -> bool {
        matches!(self, Self::Big)
    }

    /// Convert a 16-bit field between this host's layout and the canonical one.
    #[inline]
    pub const fn normalize_u16(self, value: u16) -> u16 {
        if self.is_big() {
            value.swap_bytes()
        } else {
            value
        }
    }

    /// Convert a 32-bit field between this host's layout and the canonical one.
    #[inline]
    pub const fn normalize_u32(self, value: u32) -> u32 {
        if self.is_big() {
            value.swap_bytes()
        } else {
            value
        }
    }

    /// In-memory image of `value` on a host with this byte order.
    #[inline]
    pub const fn u16_to_raw(self, value: u16) -> [u8; 2] {
        match self {
            Self::Little => value.to_le_bytes(),
            Self::Big => value.to_be_bytes(),
        }
    }

    /// In-memory image of `value` on a host with this byte order.
    #[inline]
    pub const fn u32_to_raw(self, value: u32) -> [u8; 4] {
        match self {
            Self::Little => value.to_le_bytes(),
            Self::Big => value.to_be_bytes(),
        }
    }

    /// Interpret raw bytes the way a host with this byte order would.
    #[inline]
    pub const fn u16_from_raw(self, raw: [u8; 2]) -> u16 {
        match self {
            Self::Little => u16::from_le_bytes(raw),
            Self::Big => u16::from_be_bytes(raw),
        }
    }

    /// Interpret raw bytes the way a host with this byte order would.
    #[inline]
    pub const fn u32_from_raw(self, raw: [u8; 4]) -> u32 {
        match self {
            Self::Little => u32::from_le_bytes(raw),
            Self::Big => u32::from_be_bytes(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_matches_target() {
        assert_eq!(ByteOrder::NATIVE.is_big(), cfg!(target_endian = "big"));
        assert_eq!(ByteOrder::CANONICAL, ByteOrder::Little);
    }

    #[test]
    fn test_normalize_is_involution() {
        for order in [ByteOrder::Little, ByteOrder::Big] {
            assert_eq!(order.normalize_u16(order.normalize_u16(0x1234)), 0x1234);
            assert_eq!(
                order.normalize_u32(order.normalize_u32(0xBAAD_BAAC)),
                0xBAAD_BAAC
            );
        }
        assert_eq!(ByteOrder::Big.normalize_u16(0x1234), 0x3412);
        assert_eq!(ByteOrder::Little.normalize_u32(0x1234_5678), 0x1234_5678);
    }

    #[test]
    fn test_normalized_image_is_canonical_on_both_hosts() {
        let value = 0x0102_0304u32;
        for order in [ByteOrder::Little, ByteOrder::Big] {
            let raw = order.u32_to_raw(order.normalize_u32(value));
            assert_eq!(raw, value.to_le_bytes());
            assert_eq!(order.normalize_u32(order.u32_from_raw(raw)), value);

            let raw = order.u16_to_raw(order.normalize_u16(0x01A4));
            assert_eq!(raw, [0xA4, 0x01]);
        }
    }
}
