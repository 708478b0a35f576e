//! Canonical encoding of EVM log events and matching against transaction
//! receipts.
//!
//! An event description (contract address, signature, parameter values) is
//! encoded into the exact `(address, topics, data)` triple the EVM writes
//! into a receipt log, so the emission can be located inside a decoded
//! receipt by structural equality.

mod abi;
mod error;
mod event;
mod receipt;

pub use abi::{encode_sequence, encode_word, AbiValue, ParamType};
pub use error::EventError;
pub use event::{encode_event, EncodedEvent, EventParam};
pub use receipt::{Log, TransactionReceipt};
