//! Event fingerprints: signature hashing, topic layout, and matching
//! against receipt logs.
use alloy_primitives::{keccak256, Address, Bytes, B256};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::abi::{encode_sequence, encode_word, AbiValue, ParamType};
use crate::error::EventError;
use crate::receipt::{Log, TransactionReceipt};

/// A value supplied for one event parameter, tagged with whether that
/// parameter is indexed (a topic) or carried in the data blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventParam {
    value: AbiValue,
    indexed: bool,
}

impl EventParam {
    pub fn indexed(value: AbiValue) -> Self {
        Self {
            value,
            indexed: true,
        }
    }

    pub fn unindexed(value: AbiValue) -> Self {
        Self {
            value,
            indexed: false,
        }
    }
}

/// The log fingerprint an event emission leaves in a transaction receipt.
///
/// `topics[0]` is always the Keccak-256 digest of the canonical signature;
/// the remaining topics are the indexed parameters in declaration order.
/// Serialisation renders every field as `0x`-prefixed hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedEvent {
    pub address: Address,
    pub topics: Vec<B256>,
    pub data: Bytes,
}

/// Builds the `(address, topics, data)` triple for an emission of the event
/// described by `signature`, e.g. `"Transfer(address,address,uint256)"`.
/// Whitespace in the signature is ignored.
pub fn encode_event(
    address: Address,
    signature: &str,
    params: &[EventParam],
) -> Result<EncodedEvent, EventError> {
    let canonical: String = signature.chars().filter(|c| !c.is_whitespace()).collect();
    let topic0 = keccak256(canonical.as_bytes());

    let types = parse_signature_types(&canonical)?;
    if types.len() != params.len() {
        return Err(EventError::ParamCountMismatch {
            expected: types.len(),
            got: params.len(),
        });
    }

    let mut topics = vec![topic0];
    let mut unindexed = Vec::new();
    for (ty, param) in types.iter().zip(params) {
        if param.indexed {
            if ty.is_dynamic() {
                return Err(EventError::DynamicTopic(*ty));
            }
            topics.push(encode_word(*ty, &param.value)?);
        } else {
            unindexed.push((*ty, &param.value));
        }
    }
    let data = encode_sequence(&unindexed)?;

    trace!(signature = %canonical, topics = topics.len(), "encoded event fingerprint");
    Ok(EncodedEvent {
        address,
        topics,
        data,
    })
}

// The comma-separated type list between the outer parentheses.
fn parse_signature_types(signature: &str) -> Result<Vec<ParamType>, EventError> {
    let malformed = || EventError::MalformedSignature(signature.to_owned());
    let open = signature.find('(').ok_or_else(malformed)?;
    if !signature.ends_with(')') || open + 1 >= signature.len() || open == 0 {
        return Err(malformed());
    }
    let inner = &signature[open + 1..signature.len() - 1];
    if inner.is_empty() {
        return Ok(Vec::new());
    }
    inner.split(',').map(ParamType::parse).collect()
}

impl EncodedEvent {
    // Structural equality with one emission.
    fn matches(&self, log: &Log) -> bool {
        self.address == log.address && self.topics == log.topics && self.data == log.data
    }

    /// The unique non-removed log of a successful receipt equal to this
    /// fingerprint.
    ///
    /// Zero matches and duplicate matches both yield `None`: the upstream
    /// protocol embeds a one-shot identifier in every emission, so a
    /// duplicate indicates a receipt that cannot be trusted.
    pub fn find_in<'r>(&self, receipt: &'r TransactionReceipt) -> Option<&'r Log> {
        if !receipt.is_success() {
            return None;
        }
        let mut matches = receipt
            .logs
            .iter()
            .filter(|log| !log.removed && self.matches(log));
        match (matches.next(), matches.next()) {
            (Some(log), None) => Some(log),
            _ => None,
        }
    }

    /// Whether exactly one non-removed log of `receipt` carries this event.
    pub fn is_found_in(&self, receipt: &TransactionReceipt) -> bool {
        self.find_in(receipt).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256, hex, U256};

    fn transfer_event() -> EncodedEvent {
        encode_event(
            address!("5FbDB2315678afecb367f032d93F642f64180aa3"),
            "Transfer(address,address,uint256)",
            &[
                EventParam::indexed(AbiValue::Address(address!(
                    "70997970C51812dc3A010C7d01b50e0d17dc79C8"
                ))),
                EventParam::indexed(AbiValue::Address(address!(
                    "3C44CdDdB6a900fa2b585dd299e03d12FA4293BC"
                ))),
                EventParam::unindexed(AbiValue::Uint(U256::from(1u64))),
            ],
        )
        .unwrap()
    }

    #[test]
    fn transfer_fingerprint() {
        let event = transfer_event();
        assert_eq!(
            event.topics,
            vec![
                // keccak256("Transfer(address,address,uint256)")
                b256!("ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"),
                b256!("00000000000000000000000070997970c51812dc3a010c7d01b50e0d17dc79c8"),
                b256!("0000000000000000000000003c44cdddb6a900fa2b585dd299e03d12fa4293bc"),
            ]
        );
        assert_eq!(
            event.data,
            Bytes::from(
                hex!("0000000000000000000000000000000000000000000000000000000000000001").to_vec()
            )
        );
    }

    #[test]
    fn whitespace_in_the_signature_is_ignored() {
        let spaced = encode_event(
            transfer_event().address,
            "Transfer( address, address , uint256 )",
            &[
                EventParam::indexed(AbiValue::Address(address!(
                    "70997970C51812dc3A010C7d01b50e0d17dc79C8"
                ))),
                EventParam::indexed(AbiValue::Address(address!(
                    "3C44CdDdB6a900fa2b585dd299e03d12FA4293BC"
                ))),
                EventParam::unindexed(AbiValue::Uint(U256::from(1u64))),
            ],
        )
        .unwrap();
        assert_eq!(spaced, transfer_event());
    }

    #[test]
    fn rejects_unknown_types() {
        let err = encode_event(
            Address::ZERO,
            "Minted(uint128)",
            &[EventParam::unindexed(AbiValue::Uint(U256::from(1u64)))],
        )
        .unwrap_err();
        assert_eq!(err, EventError::UnsupportedType("uint128".to_owned()));
    }

    #[test]
    fn rejects_arity_mismatch() {
        let err = encode_event(Address::ZERO, "Ping(uint256,bool)", &[]).unwrap_err();
        assert_eq!(
            err,
            EventError::ParamCountMismatch {
                expected: 2,
                got: 0,
            }
        );
    }

    #[test]
    fn rejects_indexed_dynamic_values() {
        let err = encode_event(
            Address::ZERO,
            "Named(string)",
            &[EventParam::indexed(AbiValue::String("alice".to_owned()))],
        )
        .unwrap_err();
        assert_eq!(err, EventError::DynamicTopic(ParamType::String));
    }

    #[test]
    fn rejects_signatures_without_parentheses() {
        let err = encode_event(Address::ZERO, "Transfer", &[]).unwrap_err();
        assert!(matches!(err, EventError::MalformedSignature(_)));
    }

    #[test]
    fn events_without_parameters_have_a_bare_topic0() {
        let event = encode_event(Address::ZERO, "Paused()", &[]).unwrap();
        assert_eq!(event.topics, vec![keccak256(b"Paused()")]);
        assert!(event.data.is_empty());
    }

    fn receipt_with(logs_json: &str) -> TransactionReceipt {
        serde_json::from_str(&format!(r#"{{"status":"0x1","logs":{logs_json}}}"#)).unwrap()
    }

    // The transfer fingerprint as its log would come back from an endpoint
    // that upper-cases hex digits.
    const TRANSFER_LOG_UPPERCASE: &str = r#"{
        "address": "0x5FBDB2315678AFECB367F032D93F642F64180AA3",
        "topics": [
            "0xDDF252AD1BE2C89B69C2B068FC378DAA952BA7F163C4A11628F55A4DF523B3EF",
            "0x00000000000000000000000070997970C51812DC3A010C7D01B50E0D17DC79C8",
            "0x0000000000000000000000003C44CDDDB6A900FA2B585DD299E03D12FA4293BC"
        ],
        "data": "0x0000000000000000000000000000000000000000000000000000000000000001"
    }"#;

    #[test]
    fn finds_the_unique_matching_log() {
        let receipt = receipt_with(&format!("[{TRANSFER_LOG_UPPERCASE}]"));
        let event = transfer_event();
        assert!(event.is_found_in(&receipt));
        assert_eq!(event.find_in(&receipt), Some(&receipt.logs[0]));
    }

    #[test]
    fn duplicate_matches_are_rejected() {
        let receipt = receipt_with(&format!("[{TRANSFER_LOG_UPPERCASE},{TRANSFER_LOG_UPPERCASE}]"));
        let event = transfer_event();
        assert!(!event.is_found_in(&receipt));
        assert_eq!(event.find_in(&receipt), None);
    }

    #[test]
    fn removed_logs_are_ignored() {
        let removed = TRANSFER_LOG_UPPERCASE.replacen('{', r#"{"removed":true,"#, 1);
        let receipt = receipt_with(&format!("[{removed}]"));
        assert!(!transfer_event().is_found_in(&receipt));

        // One removed copy next to one live copy still counts as unique.
        let receipt = receipt_with(&format!("[{removed},{TRANSFER_LOG_UPPERCASE}]"));
        assert!(transfer_event().is_found_in(&receipt));
    }

    #[test]
    fn reverted_receipts_never_match() {
        let logs = format!("[{TRANSFER_LOG_UPPERCASE}]");
        let receipt: TransactionReceipt =
            serde_json::from_str(&format!(r#"{{"status":"0x0","logs":{logs}}}"#)).unwrap();
        assert!(!transfer_event().is_found_in(&receipt));
    }

    #[test]
    fn differing_topics_do_not_match() {
        let other = TRANSFER_LOG_UPPERCASE.replace("79C8", "79C9");
        let receipt = receipt_with(&format!("[{other}]"));
        assert!(!transfer_event().is_found_in(&receipt));
    }

    #[test]
    fn serialises_as_prefixed_hex() {
        let json = serde_json::to_value(transfer_event()).unwrap();
        assert_eq!(
            json["address"],
            "0x5fbdb2315678afecb367f032d93f642f64180aa3"
        );
        assert!(json["topics"][0]
            .as_str()
            .unwrap()
            .starts_with("0xddf252ad"));
        assert!(json["data"].as_str().unwrap().starts_with("0x"));
    }
}
