use thiserror::Error;

use crate::algorithm::DigestAlgorithm;

/// Errors raised while selecting a digest or packing it into a UUID.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("{algorithm} requires a non-empty secret key")]
    MissingKey { algorithm: DigestAlgorithm },
    #[error("UUID version should be one of 3, 5, 8 (got {0})")]
    InvalidUuidVersion(u8),
    #[error("digest of {0} bytes is shorter than the 16 bytes a UUID needs")]
    DigestTooShort(usize),
    #[error("unsupported hashing algorithm: {0}")]
    UnknownAlgorithm(String),
    #[error("invalid HMAC key length: {0}")]
    InvalidKeyLength(usize),
}
