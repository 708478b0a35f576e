//! The event-parameter subset of the Ethereum contract ABI.
//!
//! Static types occupy one big-endian 32-byte word. Dynamic types encode as
//! a word-sized offset into a tail holding their length and right-padded
//! payload.
use core::fmt;

use alloy_primitives::{Address, Bytes, B256, I256, U256};

use crate::error::EventError;

/// The ABI types accepted in event signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Uint256,
    Uint8,
    Int256,
    Address,
    Bool,
    Bytes,
}

impl ParamType {
    /// Parses one type declaration from an event signature.
    pub fn parse(name: &str) -> Result<Self, EventError> {
        match name {
            "string" => Ok(Self::String),
            "uint256" => Ok(Self::Uint256),
            "uint8" => Ok(Self::Uint8),
            "int256" => Ok(Self::Int256),
            "address" => Ok(Self::Address),
            "bool" => Ok(Self::Bool),
            "bytes" => Ok(Self::Bytes),
            other => Err(EventError::UnsupportedType(other.to_owned())),
        }
    }

    /// Dynamic types live in the tail of the encoded blob and cannot be
    /// indexed.
    pub fn is_dynamic(self) -> bool {
        matches!(self, Self::String | Self::Bytes)
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::String => "string",
            Self::Uint256 => "uint256",
            Self::Uint8 => "uint8",
            Self::Int256 => "int256",
            Self::Address => "address",
            Self::Bool => "bool",
            Self::Bytes => "bytes",
        })
    }
}

/// A parameter value, before it is checked against a declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbiValue {
    String(String),
    Uint(U256),
    Int(I256),
    Address(Address),
    Bool(bool),
    Bytes(Bytes),
}

impl AbiValue {
    fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Uint(_) => "uint",
            Self::Int(_) => "int",
            Self::Address(_) => "address",
            Self::Bool(_) => "bool",
            Self::Bytes(_) => "bytes",
        }
    }

    fn mismatch(&self, expected: ParamType) -> EventError {
        EventError::TypeMismatch {
            expected,
            got: self.kind(),
        }
    }
}

/// Encodes one static value into its 32-byte word. Numerics are left-padded
/// big-endian, addresses occupy the low 20 bytes, booleans the last byte.
pub fn encode_word(ty: ParamType, value: &AbiValue) -> Result<B256, EventError> {
    match (ty, value) {
        (ParamType::Uint256, AbiValue::Uint(n)) => Ok(B256::from(n.to_be_bytes::<32>())),
        (ParamType::Uint8, AbiValue::Uint(n)) => {
            if *n > U256::from(u8::MAX) {
                return Err(value.mismatch(ty));
            }
            Ok(B256::from(n.to_be_bytes::<32>()))
        }
        (ParamType::Int256, AbiValue::Int(n)) => Ok(B256::from(n.to_be_bytes::<32>())),
        (ParamType::Address, AbiValue::Address(address)) => Ok(address.into_word()),
        (ParamType::Bool, AbiValue::Bool(flag)) => Ok(B256::with_last_byte(*flag as u8)),
        _ => Err(value.mismatch(ty)),
    }
}

// The raw payload of a dynamic value, before length prefix and padding.
fn dynamic_payload(ty: ParamType, value: &AbiValue) -> Result<Vec<u8>, EventError> {
    match (ty, value) {
        (ParamType::String, AbiValue::String(s)) => Ok(s.as_bytes().to_vec()),
        (ParamType::Bytes, AbiValue::Bytes(b)) => Ok(b.to_vec()),
        _ => Err(value.mismatch(ty)),
    }
}

/// ABI-encodes a parameter sequence into one contiguous blob: a head of
/// static words and tail offsets, then the dynamic tails.
pub fn encode_sequence(params: &[(ParamType, &AbiValue)]) -> Result<Bytes, EventError> {
    let head_len = params.len() * 32;
    let mut head = Vec::with_capacity(head_len);
    let mut tail: Vec<u8> = Vec::new();

    for (ty, value) in params {
        if ty.is_dynamic() {
            let offset = U256::from(head_len + tail.len());
            head.extend_from_slice(&offset.to_be_bytes::<32>());

            let payload = dynamic_payload(*ty, value)?;
            tail.extend_from_slice(&U256::from(payload.len()).to_be_bytes::<32>());
            tail.extend_from_slice(&payload);
            let padding = payload.len().div_ceil(32) * 32 - payload.len();
            tail.resize(tail.len() + padding, 0);
        } else {
            head.extend_from_slice(encode_word(*ty, value)?.as_slice());
        }
    }

    head.extend_from_slice(&tail);
    Ok(head.into())
}
