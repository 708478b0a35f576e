//! The receipt shape handed over by JSON-RPC collaborators.
//!
//! Hex strings exist only at this boundary: fields parse into fixed-size
//! byte types, so later comparisons are case-insensitive by construction.
use alloy_primitives::{Address, Bytes, B256, U64};
use serde::{Deserialize, Serialize};

/// One log emission inside a transaction receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    pub address: Address,
    pub topics: Vec<B256>,
    pub data: Bytes,
    /// Set when the emission was undone by a chain reorganisation.
    #[serde(default)]
    pub removed: bool,
}

/// The receipt fields the proof protocol consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// Post-execution status as a hex quantity; zero means the transaction
    /// reverted.
    pub status: U64,
    #[serde(default)]
    pub logs: Vec<Log>,
}

impl TransactionReceipt {
    /// Whether the transaction executed successfully.
    pub fn is_success(&self) -> bool {
        !self.status.is_zero()
    }
}
