//! A Merkle-Patricia trie over `(bytes -> bytes)` entries, as committed by
//! the `receiptsRoot` field of an Ethereum-family block header.
//!
//! The trie supports insertion, lookup and removal, and produces inclusion
//! proofs: the RLP-encoded nodes on the walk from the root to one key. A
//! proof can be re-verified against the root hash alone, without access to
//! the rest of the trie.

mod error;
mod trie;

pub use alloy_primitives::{Bytes, B256};
pub use alloy_trie::{Nibbles, EMPTY_ROOT_HASH};

pub use error::TrieError;
pub use trie::{ProofNodes, Trie};

/// RLP encoding of a transaction index, the key format of the receipt and
/// transaction tries of a block.
pub fn index_key(index: u64) -> Bytes {
    alloy_rlp::encode(index).into()
}
