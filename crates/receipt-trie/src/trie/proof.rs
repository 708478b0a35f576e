//! Inclusion proofs: generation from a trie, verification from a root hash.
use alloy_primitives::{hex, keccak256, Bytes, B256};
use alloy_trie::Nibbles;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::nodes::Node;
use super::Trie;
use crate::error::TrieError;

/// The RLP-encoded nodes of one root-to-leaf walk, keyed by Keccak digest.
///
/// Entries keep insertion order: iterating yields the root node first and
/// the terminal node last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofNodes {
    entries: Vec<(B256, Bytes)>,
}

impl ProofNodes {
    pub fn insert(&mut self, digest: B256, rlp: Bytes) {
        if self.get(&digest).is_none() {
            self.entries.push((digest, rlp));
        }
    }

    pub fn get(&self, digest: &B256) -> Option<&Bytes> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == digest)
            .map(|(_, rlp)| rlp)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&B256, &Bytes)> {
        self.entries.iter().map(|(digest, rlp)| (digest, rlp))
    }

    /// The node encodings alone, in walk order.
    pub fn nodes(&self) -> impl Iterator<Item = &Bytes> {
        self.entries.iter().map(|(_, rlp)| rlp)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Trie {
    /// Collects the nodes visited on the walk to `key`.
    ///
    /// Only inclusion proofs exist: asking for an absent key is
    /// [`TrieError::KeyNotFound`].
    pub fn prove(&mut self, key: &[u8]) -> Result<ProofNodes, TrieError> {
        let root = self.root.as_mut().ok_or(TrieError::KeyNotFound)?;
        let mut nodes = ProofNodes::default();
        root.prove(Nibbles::unpack(key), &mut nodes)?;
        trace!(key = %hex::encode(key), nodes = nodes.len(), "collected inclusion proof");
        Ok(nodes)
    }

    /// Walks `proof` from `root` and checks that `key` resolves to
    /// `expected`.
    ///
    /// `Ok(false)` is returned only when the walk reaches a terminal value
    /// that differs from `expected`; a proof that does not describe a walk
    /// to the key at all is an error.
    pub fn verify_proof(
        root: B256,
        key: &[u8],
        expected: &[u8],
        proof: &ProofNodes,
    ) -> Result<bool, TrieError> {
        trace!(root = %root, key = %hex::encode(key), "verifying inclusion proof");
        let mut path = Nibbles::unpack(key);
        let mut node = lookup(root, proof)?;
        loop {
            node = match node {
                Node::Leaf(leaf) => {
                    return if leaf.path == path {
                        Ok(leaf.value.as_ref() == expected)
                    } else {
                        Err(TrieError::InvalidProof(
                            "leaf path differs from the remaining key",
                        ))
                    };
                }
                Node::Branch(mut branch) => {
                    if path.is_empty() {
                        return match branch.value {
                            Some(value) => Ok(value.as_ref() == expected),
                            None => Err(TrieError::InvalidProof(
                                "no value where the key path ends",
                            )),
                        };
                    }
                    let idx = path.at(0);
                    path = path.slice(1..);
                    match branch.children.take(idx) {
                        Some(child) => follow(*child, proof)?,
                        None => {
                            return Err(TrieError::InvalidProof(
                                "empty branch slot on the key path",
                            ))
                        }
                    }
                }
                Node::Extension(ext) => {
                    if !path.starts_with(&ext.path) {
                        return Err(TrieError::InvalidProof(
                            "extension path differs from the remaining key",
                        ));
                    }
                    path = path.slice(ext.path.len()..);
                    follow(*ext.child, proof)?
                }
                Node::Digest(_) => {
                    return Err(TrieError::InvalidProof("digest placeholder in the walk"))
                }
            };
        }
    }
}

// Follows a child reference: digests load from the proof store, inlined
// nodes continue the walk directly.
fn follow(node: Node, proof: &ProofNodes) -> Result<Node, TrieError> {
    match node {
        Node::Digest(digest) => lookup(digest.digest, proof),
        inline => Ok(inline),
    }
}

fn lookup(digest: B256, proof: &ProofNodes) -> Result<Node, TrieError> {
    let rlp = proof
        .get(&digest)
        .ok_or(TrieError::InvalidProof("referenced node is not in the proof"))?;
    if keccak256(rlp) != digest {
        return Err(TrieError::InvalidProof("node does not hash to its reference"));
    }
    match Node::decode(&mut &rlp[..])? {
        Some(Node::Digest(_)) | None => {
            Err(TrieError::InvalidNode("proof entry is not a full node"))
        }
        Some(node) => Ok(node),
    }
}

impl Node {
    // Deposits every node of the walk, keyed by its digest, into `nodes`.
    fn prove(&mut self, path: Nibbles, nodes: &mut ProofNodes) -> Result<(), TrieError> {
        let encoded = self.encode();
        nodes.insert(keccak256(&encoded), encoded.into());
        match self {
            Node::Leaf(leaf) => {
                if leaf.path == path {
                    Ok(())
                } else {
                    Err(TrieError::KeyNotFound)
                }
            }
            Node::Extension(ext) => {
                if path.starts_with(&ext.path) {
                    ext.child.prove(path.slice(ext.path.len()..), nodes)
                } else {
                    Err(TrieError::KeyNotFound)
                }
            }
            Node::Branch(branch) => {
                if path.is_empty() {
                    return if branch.value.is_some() {
                        Ok(())
                    } else {
                        Err(TrieError::KeyNotFound)
                    };
                }
                let idx = path.at(0);
                match branch.children.get_mut(idx) {
                    Some(child) => child.prove(path.slice(1..), nodes),
                    None => Err(TrieError::KeyNotFound),
                }
            }
            Node::Digest(_) => panic!("trie: unresolved digest node access"),
        }
    }
}
