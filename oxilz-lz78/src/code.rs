//! Reserved codes, dictionary capacity, and code assignment.

use oxilz_core::bits::bitlen;

/// Code that terminates the pair stream.
pub const STOP_CODE: u16 = 0;

/// Code of the empty sequence (the trie root and the seeded table slot).
pub const EMPTY_CODE: u16 = 1;

/// First code assigned to a dictionary entry.
pub const START_CODE: u16 = 2;

/// Dictionary capacity. When the next code to assign reaches this value the
/// dictionary is reset.
pub const MAX_CODE: u16 = u16::MAX;

/// Number of distinct symbols.
pub const ALPHABET: usize = 256;

/// Number of entries a dictionary holds before it resets.
pub const EPOCH_CODES: u32 = (MAX_CODE - START_CODE) as u32;

/// Width in bits used to transmit a code while `next_code` is the next code
/// to be assigned.
///
/// Encoder and decoder both derive every code width from this function.
#[inline]
pub const fn code_width(next_code: u16) -> u8 {
    bitlen(next_code)
}

/// Sequential code assignment shared by the encoder and the decoder.
///
/// Both sides advance their counter once per dictionary insertion, so they
/// agree on the code width of every pair and reset at the same pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeCounter {
    /// Next code to assign.
    next: u16,
    /// Codes assigned since creation, across all epochs.
    assigned: u64,
    /// Number of completed dictionary epochs.
    resets: u64,
}

impl CodeCounter {
    /// Create a counter positioned at [`START_CODE`].
    pub fn new() -> Self {
        Self {
            next: START_CODE,
            assigned: 0,
            resets: 0,
        }
    }

    /// The next code to be assigned.
    #[inline]
    pub fn next_code(&self) -> u16 {
        self.next
    }

    /// Width of the next code to be transmitted.
    #[inline]
    pub fn width(&self) -> u8 {
        code_width(self.next)
    }

    /// Record one assignment.
    ///
    /// Returns `true` when the dictionary is now full and must be reset; the
    /// counter itself has already restarted at [`START_CODE`].
    pub fn advance(&mut self) -> bool {
        self.next += 1;
        self.assigned += 1;
        if self.next == MAX_CODE {
            self.next = START_CODE;
            self.resets += 1;
            return true;
        }
        false
    }

    /// Total codes assigned.
    pub fn assigned(&self) -> u64 {
        self.assigned
    }

    /// Number of dictionary resets.
    pub fn resets(&self) -> u64 {
        self.resets
    }
}

impl Default for CodeCounter {
    fn default() -> Self {
        Self::new()
    }
}
