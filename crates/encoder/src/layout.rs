//! Packing digest bytes into UUIDs.
//!
//! # Layout
//!
//! ```text
//! xxxxxxxx-xxxx-Vxxx-Nxxx-xxxxxxxxxxxx
//! ```
//!
//! - Only the first 16 digest bytes are used; wider digests are truncated
//! - Byte 6: high nibble replaced by the version (`3`, `5` or `8`)
//! - Byte 8: top two bits forced to `10` (RFC 4122 variant)
//! - Every other bit comes straight from the digest
//!
//! Version 8 is the RFC 9562 custom layout, so nothing beyond the version and
//! variant bits is imposed for it either.

use uuid::Uuid;

use crate::algorithm::UuidVersion;
use crate::error::EncodeError;

/// Number of digest bytes a UUID consumes.
pub const UUID_LEN: usize = 16;

/// Builds a [`Uuid`] from the first 16 bytes of `digest`.
///
/// Fails with [`EncodeError::DigestTooShort`] for digests under 16 bytes.
pub fn encode_uuid(digest: &[u8], version: UuidVersion) -> Result<Uuid, EncodeError> {
    let mut bytes: [u8; UUID_LEN] = digest
        .get(..UUID_LEN)
        .and_then(|head| head.try_into().ok())
        .ok_or(EncodeError::DigestTooShort(digest.len()))?;

    bytes[6] = (bytes[6] & 0x0F) | (version.as_u8() << 4);
    bytes[8] = (bytes[8] & 0x3F) | 0x80;

    Ok(Uuid::from_bytes(bytes))
}

/// Formats `digest` as a lowercase, hyphenated 36-character UUID string.
///
/// ```rust
/// use encoder::{encode, UuidVersion};
///
/// let digest = [0u8; 16];
/// let id = encode(&digest, UuidVersion::V5).unwrap();
/// assert_eq!(id, "00000000-0000-5000-8000-000000000000");
/// ```
pub fn encode(digest: &[u8], version: UuidVersion) -> Result<String, EncodeError> {
    Ok(encode_uuid(digest, version)?.hyphenated().to_string())
}
