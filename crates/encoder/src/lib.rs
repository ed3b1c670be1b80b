//! Digest selection and digest-to-UUID packing.
//!
//! This crate is the hashing half of identifier generation: pick a digest
//! ([`select`]), run it over the normalized bytes, and pack the result into a
//! UUID string with the right version and variant bits ([`encode`]).
//!
//! ## Supported digests
//!
//! | Algorithm | Width | Key | Implied UUID version |
//! |-----------|-------|-----|----------------------|
//! | MD5 | 16 bytes | no | 3 |
//! | SHA-1 | 20 bytes | no | 5 |
//! | SHA-256 | 32 bytes | no | 3 |
//! | HMAC-SHA256 | 32 bytes | required | 8 |
//!
//! The digest primitives come from the RustCrypto crates; nothing here
//! implements a hash function.
//!
//! ## Example
//!
//! ```
//! use encoder::{digest, encode, DigestAlgorithm};
//!
//! let algo = DigestAlgorithm::Sha1;
//! let bytes = digest(algo, None, b"example").unwrap();
//! let id = encode(&bytes, algo.implied_uuid_version()).unwrap();
//! assert_eq!(&id[14..15], "5");
//! ```

mod algorithm;
mod digest;
mod error;
mod layout;

pub use crate::algorithm::{DigestAlgorithm, UuidVersion};
pub use crate::digest::{digest, select, DigestFunction};
pub use crate::error::EncodeError;
pub use crate::layout::{encode, encode_uuid, UUID_LEN};
