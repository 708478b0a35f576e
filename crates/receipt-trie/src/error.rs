use thiserror::Error;

/// Failures surfaced by proof generation and verification.
///
/// Lookups and insertions do not fail; an absent key reads as `None`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrieError {
    /// A proof was requested for a key the trie does not contain. Only
    /// inclusion proofs are supported.
    #[error("key is not part of the trie")]
    KeyNotFound,

    /// The proof store and the key describe no consistent walk from the
    /// root: a referenced node is missing, a slot on the path is empty, or
    /// a node path diverges from the key.
    #[error("invalid proof: {0}")]
    InvalidProof(&'static str),

    /// A node payload was not well-formed RLP.
    #[error("malformed rlp: {0}")]
    Rlp(alloy_rlp::Error),

    /// RLP-valid bytes that do not encode any of the canonical node shapes.
    #[error("invalid node encoding: {0}")]
    InvalidNode(&'static str),
}

impl From<alloy_rlp::Error> for TrieError {
    fn from(err: alloy_rlp::Error) -> Self {
        Self::Rlp(err)
    }
}
