//! The node variants of the trie.
use alloy_primitives::{Bytes, B256};
use alloy_trie::Nibbles;

pub(super) use super::children::BranchChildren;

/// Terminal node carrying the remainder of a key and its value.
#[derive(Debug, Clone)]
pub(super) struct LeafNode {
    pub(super) path: Nibbles,
    pub(super) value: Bytes,
    pub(super) hash: Option<B256>,
}

/// A key prefix shared by every entry below it, pointing at exactly one
/// branch node.
#[derive(Debug, Clone)]
pub(super) struct ExtensionNode {
    pub(super) path: Nibbles,
    pub(super) child: Box<Node>,
    pub(super) hash: Option<B256>,
}

/// Sixteen-way fork, one slot per nibble, with an optional value for a key
/// that ends here.
#[derive(Debug, Clone)]
pub(super) struct BranchNode {
    pub(super) children: BranchChildren,
    pub(super) value: Option<Bytes>,
    pub(super) hash: Option<B256>,
}

/// A node known only by its Keccak digest. Produced when decoding proof
/// nodes whose children are referenced by hash; never present in a trie
/// built through insertion.
#[derive(Debug, Clone)]
pub(super) struct DigestNode {
    pub(super) digest: B256,
}

#[derive(Debug, Clone)]
pub(super) enum Node {
    Leaf(LeafNode),
    Extension(ExtensionNode),
    Branch(BranchNode),
    Digest(DigestNode),
}

impl LeafNode {
    pub(super) fn new(path: Nibbles, value: Bytes) -> Self {
        Self {
            path,
            value,
            hash: None,
        }
    }
}

impl ExtensionNode {
    pub(super) fn new(path: Nibbles, child: Box<Node>) -> Self {
        Self {
            path,
            child,
            hash: None,
        }
    }
}

impl BranchNode {
    pub(super) fn empty() -> Self {
        Self {
            children: BranchChildren::new(),
            value: None,
            hash: None,
        }
    }
}
