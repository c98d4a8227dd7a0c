//! Error types for OxiLZ operations.
//!
//! A single error type covers the whole codec: I/O failures from the
//! underlying streams, header validation, stream corruption detected while
//! decoding, and allocation failures while growing a dictionary.

use std::io;
use thiserror::Error;

/// The main error type for OxiLZ operations.
#[derive(Debug, Error)]
pub enum OxiLzError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Header magic does not match the expected constant.
    #[error("Bad magic number: expected {expected:#010x}, found {found:#010x}")]
    InvalidMagic {
        /// Expected magic value.
        expected: u32,
        /// Magic value found after byte-order normalization.
        found: u32,
    },

    /// Invalid header format.
    #[error("Invalid header: {message}")]
    InvalidHeader {
        /// Description of the header error.
        message: String,
    },

    /// The bit stream ended in the middle of a pair.
    #[error("Corrupted file: pairs do not match exactly (truncated at bit {bit_position})")]
    UnexpectedEof {
        /// Bit position where the stream ran out.
        bit_position: u64,
    },

    /// A pair referenced a code that is not in the dictionary.
    #[error("Corrupted file: code {code} is not in the dictionary (next code {next_code})")]
    InvalidCode {
        /// The offending code.
        code: u16,
        /// The next code the dictionary would assign.
        next_code: u16,
    },

    /// Requested code width is outside the supported range.
    #[error("Invalid bit width: {0}")]
    InvalidBitWidth(u8),

    /// Memory for a dictionary structure could not be reserved.
    #[error("Out of memory while allocating {what}")]
    AllocationFailed {
        /// What was being allocated.
        what: &'static str,
    },
}

/// Result type alias for OxiLZ operations.
pub type Result<T> = std::result::Result<T, OxiLzError>;

impl OxiLzError {
    /// Create an invalid magic error.
    pub fn invalid_magic(expected: u32, found: u32) -> Self {
        Self::InvalidMagic { expected, found }
    }

    /// Create an invalid header error.
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }

    /// Create a truncated-stream error.
    pub fn unexpected_eof(bit_position: u64) -> Self {
        Self::UnexpectedEof { bit_position }
    }

    /// Create an invalid code error.
    pub fn invalid_code(code: u16, next_code: u16) -> Self {
        Self::InvalidCode { code, next_code }
    }

    /// Create an allocation failure error.
    pub fn allocation_failed(what: &'static str) -> Self {
        Self::AllocationFailed { what }
    }

    /// Whether this error means the compressed stream itself is damaged.
    pub fn is_corruption(&self) -> bool {
        matches!(self, Self::UnexpectedEof { .. } | Self::InvalidCode { .. })
    }
}
