//! Canonical RLP encoding and Keccak hashing for each node variant.
//!
//! Child references follow the yellow-paper rule: an encoding shorter than
//! 32 bytes is inlined into the parent, anything else is referenced by its
//! Keccak-256 digest.
use alloy_primitives::{keccak256, B256};
use alloy_rlp::{Encodable, EMPTY_STRING_CODE};
use alloy_trie::nodes::encode_path_leaf;

use super::nodes::{BranchNode, DigestNode, ExtensionNode, LeafNode, Node};
use super::rlp::encode_list_header;

impl Node {
    // Digests are cached per node and invalidated along the path of every
    // mutation, so rehashing after an insert only touches changed nodes.
    pub(super) fn hash(&mut self) -> B256 {
        if let Some(digest) = self.cached_hash() {
            return digest;
        }
        let digest = keccak256(self.encode());
        self.cache_hash(digest);
        digest
    }

    pub(super) fn encode(&mut self) -> Vec<u8> {
        match self {
            Node::Leaf(leaf) => leaf.encode(),
            Node::Extension(ext) => ext.encode(),
            Node::Branch(branch) => branch.encode(),
            Node::Digest(digest) => digest.encode(),
        }
    }

    // The reference to this node as placed inside its parent's list.
    pub(super) fn encode_ref(&mut self, out: &mut Vec<u8>) {
        if let Node::Digest(digest) = self {
            digest.digest.encode(out);
            return;
        }
        let encoded = self.encode();
        if encoded.len() < 32 {
            out.extend_from_slice(&encoded);
        } else {
            let digest = keccak256(&encoded);
            self.cache_hash(digest);
            digest.encode(out);
        }
    }

    pub(super) fn clear_cache(&mut self) {
        match self {
            Node::Leaf(leaf) => leaf.hash = None,
            Node::Extension(ext) => ext.hash = None,
            Node::Branch(branch) => branch.hash = None,
            Node::Digest(_) => {}
        }
    }

    fn cached_hash(&self) -> Option<B256> {
        match self {
            Node::Leaf(leaf) => leaf.hash,
            Node::Extension(ext) => ext.hash,
            Node::Branch(branch) => branch.hash,
            // A digest node's hash is the reference it holds.
            Node::Digest(digest) => Some(digest.digest),
        }
    }

    fn cache_hash(&mut self, digest: B256) {
        match self {
            Node::Leaf(leaf) => leaf.hash = Some(digest),
            Node::Extension(ext) => ext.hash = Some(digest),
            Node::Branch(branch) => branch.hash = Some(digest),
            Node::Digest(_) => {}
        }
    }
}

impl LeafNode {
    // Two-element list: the hex-prefix encoded path with the leaf flag set,
    // then the value.
    fn encode(&self) -> Vec<u8> {
        let path = encode_path_leaf(&self.path, true);
        let mut out = encode_list_header(path.length() + self.value.length());
        path.encode(&mut out);
        self.value[..].encode(&mut out);
        out
    }
}

impl ExtensionNode {
    // Two-element list: the hex-prefix encoded path with the leaf flag
    // clear, then the reference to the branch below.
    fn encode(&mut self) -> Vec<u8> {
        let path = encode_path_leaf(&self.path, false);
        let mut child = Vec::with_capacity(33);
        self.child.encode_ref(&mut child);
        let mut out = encode_list_header(path.length() + child.len());
        path.encode(&mut out);
        out.extend_from_slice(&child);
        out
    }
}

impl BranchNode {
    // Seventeen-element list: one reference per nibble slot, empty slots as
    // the empty string, and the optional value last.
    fn encode(&mut self) -> Vec<u8> {
        let mut payload = Vec::new();
        for child in self.children.iter_mut() {
            match child {
                Some(child) => child.encode_ref(&mut payload),
                None => payload.push(EMPTY_STRING_CODE),
            }
        }
        match &self.value {
            Some(value) => value[..].encode(&mut payload),
            None => payload.push(EMPTY_STRING_CODE),
        }
        let mut out = encode_list_header(payload.len());
        out.append(&mut payload);
        out
    }
}

impl DigestNode {
    fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(33);
        self.digest.encode(&mut out);
        out
    }
}
