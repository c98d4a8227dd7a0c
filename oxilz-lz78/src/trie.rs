//! Encoder dictionary: a prefix trie over previously seen sequences.
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. Transitions are
//! kept in a single `(parent, symbol) -> child` map rather than a 256-slot
//! child array per node, so a node costs a few bytes and dropping the whole
//! trie is a pair of `clear()` calls instead of a recursive walk.

use crate::code::{ALPHABET, EMPTY_CODE};
use oxilz_core::error::{OxiLzError, Result};
use std::collections::HashMap;

/// Index of a node in the trie arena.
pub type NodeId = u32;

/// One dictionary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrieNode {
    /// Code assigned when the node was created.
    pub code: u16,
}

/// LZ78 prefix trie.
#[derive(Debug)]
pub struct Trie {
    /// Node arena; index 0 is the root.
    nodes: Vec<TrieNode>,
    /// Transitions: (parent, symbol) -> child.
    children: HashMap<(NodeId, u8), NodeId>,
}

impl Trie {
    /// The root node, representing the empty sequence.
    pub const ROOT: NodeId = 0;

    /// Create a trie holding only the root, with room for every child of
    /// the root.
    pub fn new() -> Result<Self> {
        let mut nodes = Vec::new();
        nodes
            .try_reserve(ALPHABET + 1)
            .map_err(|_| OxiLzError::allocation_failed("trie root"))?;
        nodes.push(TrieNode { code: EMPTY_CODE });

        let mut children = HashMap::new();
        children
            .try_reserve(ALPHABET)
            .map_err(|_| OxiLzError::allocation_failed("trie transitions"))?;

        Ok(Self { nodes, children })
    }

    /// Follow the transition for `symbol` out of `node`, if it exists.
    #[inline]
    pub fn step(&self, node: NodeId, symbol: u8) -> Option<NodeId> {
        self.children.get(&(node, symbol)).copied()
    }

    /// Code stored at `node`.
    #[inline]
    pub fn code(&self, node: NodeId) -> u16 {
        self.nodes[node as usize].code
    }

    /// Add a child of `parent` for `symbol`, holding `code`.
    ///
    /// Fails with [`OxiLzError::AllocationFailed`] if the arena or the
    /// transition map cannot grow.
    pub fn insert(&mut self, parent: NodeId, symbol: u8, code: u16) -> Result<NodeId> {
        debug_assert!(self.step(parent, symbol).is_none(), "transition already present");

        self.nodes
            .try_reserve(1)
            .map_err(|_| OxiLzError::allocation_failed("trie node"))?;
        self.children
            .try_reserve(1)
            .map_err(|_| OxiLzError::allocation_failed("trie transition"))?;

        let id = self.nodes.len() as NodeId;
        self.nodes.push(TrieNode { code });
        self.children.insert((parent, symbol), id);
        Ok(id)
    }

    /// Drop every node except the root.
    pub fn reset(&mut self) {
        self.nodes.truncate(1);
        self.children.clear();
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the trie holds only the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::START_CODE;

    #[test]
    fn test_new_trie() {
        let trie = Trie::new().unwrap();
        assert_eq!(trie.len(), 1);
        assert!(trie.is_empty());
        assert_eq!(trie.code(Trie::ROOT), EMPTY_CODE);
        assert_eq!(trie.step(Trie::ROOT, b'a'), None);
    }

    #[test]
    fn test_insert_and_step() {
        let mut trie = Trie::new().unwrap();
        let a = trie.insert(Trie::ROOT, b'a', START_CODE).unwrap();
        let ab = trie.insert(a, b'b', START_CODE + 1).unwrap();

        assert_eq!(trie.step(Trie::ROOT, b'a'), Some(a));
        assert_eq!(trie.step(a, b'b'), Some(ab));
        assert_eq!(trie.step(Trie::ROOT, b'b'), None);
        assert_eq!(trie.code(ab), START_CODE + 1);
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn test_children_cover_whole_alphabet() {
        let mut trie = Trie::new().unwrap();
        for sym in 0..=255u8 {
            trie.insert(Trie::ROOT, sym, START_CODE + sym as u16).unwrap();
        }
        assert_eq!(trie.len(), ALPHABET + 1);
        for sym in 0..=255u8 {
            let child = trie.step(Trie::ROOT, sym).unwrap();
            assert_eq!(trie.code(child), START_CODE + sym as u16);
        }
    }

    #[test]
    fn test_reset_keeps_root() {
        let mut trie = Trie::new().unwrap();
        let a = trie.insert(Trie::ROOT, b'a', START_CODE).unwrap();
        trie.insert(a, b'a', START_CODE + 1).unwrap();

        trie.reset();
        assert!(trie.is_empty());
        assert_eq!(trie.code(Trie::ROOT), EMPTY_CODE);
        assert_eq!(trie.step(Trie::ROOT, b'a'), None);

        // Ids are reused after a reset.
        let again = trie.insert(Trie::ROOT, b'z', START_CODE).unwrap();
        assert_eq!(again, a);
    }
}
