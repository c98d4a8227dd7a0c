//! Decoder dictionary: code -> word.
//!
//! A [`Word`] is stored as the code of its prefix plus one symbol. Bytes are
//! only materialized when a word is written out, so growing a long chain of
//! words costs one slot per code instead of a copy of the whole prefix.
//! Codes within an epoch only ever refer to smaller codes of the same
//! epoch, so every prefix chain ends at the empty word.

use crate::code::{EMPTY_CODE, MAX_CODE, START_CODE};
use oxilz_core::error::{OxiLzError, Result};

/// An immutable word: the word at `prefix` followed by `symbol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word {
    prefix: u16,
    symbol: u8,
    len: u32,
}

impl Word {
    /// The empty word.
    pub const EMPTY: Self = Self {
        prefix: EMPTY_CODE,
        symbol: 0,
        len: 0,
    };

    /// Code of the word this one extends.
    pub fn prefix(&self) -> u16 {
        self.prefix
    }

    /// Last symbol of the word (meaningless for the empty word).
    pub fn last_symbol(&self) -> u8 {
        self.symbol
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether this is the empty word.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Fixed-capacity table of words indexed by code.
#[derive(Debug)]
pub struct WordTable {
    slots: Vec<Option<Word>>,
    /// Populated slots, the empty word included.
    populated: usize,
}

impl WordTable {
    /// Create a table of `MAX_CODE` slots with the empty word seeded.
    pub fn new() -> Result<Self> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(MAX_CODE as usize)
            .map_err(|_| OxiLzError::allocation_failed("word table"))?;
        slots.resize(MAX_CODE as usize, None);
        slots[EMPTY_CODE as usize] = Some(Word::EMPTY);
        Ok(Self {
            slots,
            populated: 1,
        })
    }

    /// Word stored at `code`, if any.
    #[inline]
    pub fn get(&self, code: u16) -> Option<&Word> {
        self.slots.get(code as usize).and_then(Option::as_ref)
    }

    /// Store `word[prefix] ++ symbol` at `code` and return the new word.
    ///
    /// `code` is the next code to assign. A `prefix` naming an empty slot
    /// means the stream is corrupted.
    pub fn append_sym(&mut self, prefix: u16, symbol: u8, code: u16) -> Result<Word> {
        let parent = self
            .get(prefix)
            .ok_or_else(|| OxiLzError::invalid_code(prefix, code))?;
        let word = Word {
            prefix,
            symbol,
            len: parent.len + 1,
        };

        let slot = self
            .slots
            .get_mut(code as usize)
            .ok_or_else(|| OxiLzError::invalid_code(code, code))?;
        if slot.replace(word).is_none() {
            self.populated += 1;
        }
        Ok(word)
    }

    /// Write the symbols of the word at `code` into `out`, replacing its
    /// contents.
    pub fn materialize(&self, code: u16, out: &mut Vec<u8>) -> Result<()> {
        let word = self
            .get(code)
            .ok_or_else(|| OxiLzError::invalid_code(code, code))?;

        out.clear();
        out.resize(word.len(), 0);

        let mut cursor = *word;
        for i in (0..word.len()).rev() {
            out[i] = cursor.symbol;
            cursor = *self
                .get(cursor.prefix)
                .ok_or_else(|| OxiLzError::invalid_code(cursor.prefix, code))?;
        }
        Ok(())
    }

    /// Release every word except the empty one.
    pub fn reset(&mut self) {
        self.slots[START_CODE as usize..].fill(None);
        self.slots[EMPTY_CODE as usize] = Some(Word::EMPTY);
        self.populated = 1;
    }

    /// Number of populated slots, including the empty word.
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Whether only the empty word is present.
    pub fn is_empty(&self) -> bool {
        self.len() == 1
    }
}
