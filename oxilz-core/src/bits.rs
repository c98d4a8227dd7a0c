//! Bit and byte primitives.
//!
//! Bit indices are counted from the least significant bit. For byte
//! buffers, bit `i` lives in byte `i / 8` at position `i % 8`, so a buffer
//! filled through [`buf_put_bit`] is LSB-first on the wire.

/// Number of bits needed to represent `value`.
///
/// This is the smallest `w` such that `value < 2^w`; `bitlen(0) == 0`.
///
/// # Example
///
/// ```
/// use oxilz_core::bits::bitlen;
///
/// assert_eq!(bitlen(0), 0);
/// assert_eq!(bitlen(2), 2);
/// assert_eq!(bitlen(255), 8);
/// assert_eq!(bitlen(256), 9);
/// ```
#[inline]
pub const fn bitlen(value: u16) -> u8 {
    (u16::BITS - value.leading_zeros()) as u8
}

/// Number of whole bytes needed to hold `bits` bits.
#[inline]
pub const fn bytes(bits: u64) -> u64 {
    bits.div_ceil(8)
}

/// Get bit `index` of a byte.
#[inline]
pub fn get_bit_u8(byte: u8, index: u8) -> bool {
    debug_assert!(index < 8, "bit index out of range for u8");
    (byte >> index) & 1 == 1
}

/// Set bit `index` of a byte to one.
#[inline]
pub fn set_bit_u8(byte: &mut u8, index: u8) {
    debug_assert!(index < 8, "bit index out of range for u8");
    *byte |= 1 << index;
}

/// Clear bit `index` of a byte.
#[inline]
pub fn clr_bit_u8(byte: &mut u8, index: u8) {
    debug_assert!(index < 8, "bit index out of range for u8");
    *byte &= !(1 << index);
}

/// Get bit `index` of a 16-bit word.
#[inline]
pub fn get_bit_u16(word: u16, index: u8) -> bool {
    debug_assert!(index < 16, "bit index out of range for u16");
    (word >> index) & 1 == 1
}

/// Set bit `index` of a 16-bit word to one.
#[inline]
pub fn set_bit_u16(word: &mut u16, index: u8) {
    debug_assert!(index < 16, "bit index out of range for u16");
    *word |= 1 << index;
}

/// Clear bit `index` of a 16-bit word.
#[inline]
pub fn clr_bit_u16(word: &mut u16, index: u8) {
    debug_assert!(index < 16, "bit index out of range for u16");
    *word &= !(1 << index);
}

/// Get bit `bit_index` of a byte buffer.
#[inline]
pub fn buf_get_bit(buf: &[u8], bit_index: usize) -> bool {
    get_bit_u8(buf[bit_index / 8], (bit_index % 8) as u8)
}

/// Set bit `bit_index` of a byte buffer to one.
#[inline]
pub fn buf_set_bit(buf: &mut [u8], bit_index: usize) {
    set_bit_u8(&mut buf[bit_index / 8], (bit_index % 8) as u8);
}

/// Clear bit `bit_index` of a byte buffer.
#[inline]
pub fn buf_clr_bit(buf: &mut [u8], bit_index: usize) {
    clr_bit_u8(&mut buf[bit_index / 8], (bit_index % 8) as u8);
}

/// Store `bit` at `bit_index` of a byte buffer.
#[inline]
pub fn buf_put_bit(buf: &mut [u8], bit_index: usize, bit: bool) {
    if bit {
        buf_set_bit(buf, bit_index);
    } else {
        buf_clr_bit(buf, bit_index);
    }
}
