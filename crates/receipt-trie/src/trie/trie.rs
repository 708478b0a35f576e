//! The trie surface. The per-variant structural work lives in the sibling
//! modules.
use alloy_primitives::{Bytes, B256};
use alloy_trie::{Nibbles, EMPTY_ROOT_HASH};

use super::nodes::{LeafNode, Node};
use super::Trie;

impl Trie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Inserts a value under `key`, replacing any previous value.
    pub fn insert(&mut self, key: &[u8], value: Bytes) {
        let path = Nibbles::unpack(key);
        match self.root.as_mut() {
            Some(root) => root.insert(path, value),
            None => self.root = Some(Node::Leaf(LeafNode::new(path, value))),
        }
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &[u8]) -> Option<&Bytes> {
        self.root.as_ref()?.get(Nibbles::unpack(key))
    }

    /// Removes the value stored under `key`. Absent keys are a no-op.
    pub fn remove(&mut self, key: &[u8]) {
        if let Some(root) = self.root.take() {
            self.root = root.removed(Nibbles::unpack(key));
        }
    }

    /// The Keccak-256 digest of the root node encoding; this is the value
    /// a block header commits to in `receiptsRoot`.
    pub fn hash(&mut self) -> B256 {
        match self.root.as_mut() {
            Some(root) => root.hash(),
            None => EMPTY_ROOT_HASH,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}
