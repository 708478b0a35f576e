use thiserror::Error;

use crate::abi::ParamType;

/// Failures produced while encoding an event fingerprint.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventError {
    /// The signature names a type outside the supported set.
    #[error("unsupported abi type: {0}")]
    UnsupportedType(String),

    /// A supplied value does not have the shape its declared type requires.
    #[error("value of kind {got} does not match declared type {expected}")]
    TypeMismatch {
        expected: ParamType,
        got: &'static str,
    },

    /// The signature and the supplied values disagree on arity.
    #[error("signature declares {expected} parameters, {got} values supplied")]
    ParamCountMismatch { expected: usize, got: usize },

    /// Dynamic types cannot be carried in a topic; only value types may be
    /// indexed.
    #[error("{0} values cannot be used as an indexed topic")]
    DynamicTopic(ParamType),

    /// The signature is not of the form `Name(type,...)`.
    #[error("malformed event signature: {0}")]
    MalformedSignature(String),
}
