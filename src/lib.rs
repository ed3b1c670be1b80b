//! Deterministic, normalization-aware UUIDs derived from arbitrary strings.
//!
//! `hashid` ties the workspace together:
//!
//! 1. **Normalize** (`canonical`): NFC, character-map substitution, strip
//!    structural punctuation, collapse whitespace, lowercase.
//! 2. **Digest** (`encoder`): MD5, SHA-1, SHA-256 or HMAC-SHA256 over the
//!    normalized UTF-8 bytes.
//! 3. **Encode** (`encoder`): pack the first 16 digest bytes into a UUID with
//!    the requested version nibble and the RFC 4122 variant.
//!
//! The default character map lives in a [`CharMapRegistry`]; the free
//! functions use the process-wide one from [`charmap::global`], while
//! [`Generator`] can be pointed at an isolated registry.
//!
//! ```rust
//! use hashid::{generate_with, DigestAlgorithm, GenerateOption};
//!
//! let a = generate_with("Hello  World!", []).unwrap();
//! let b = generate_with("hello world", []).unwrap();
//! assert_eq!(a, b);
//!
//! let keyed = generate_with("hello world", [GenerateOption::hmac_key("secret")]).unwrap();
//! assert_eq!(&keyed[14..15], "8");
//!
//! let sha1 = generate_with(
//!     "hello world",
//!     [GenerateOption::Algorithm(DigestAlgorithm::Sha1)],
//! )
//! .unwrap();
//! assert_eq!(&sha1[14..15], "5");
//! ```

mod error;
mod generator;
mod options;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod settings;

pub use canonical::{normalize, normalize_default, normalize_with, Normalizer, NormalizerConfig};
pub use charmap::{CharMap, CharMapError, CharMapRegistry};
pub use encoder::{DigestAlgorithm, EncodeError, UuidVersion};

pub use crate::error::{BoxError, HashIdError};
pub use crate::generator::{generate, generate_with, Generator};
pub use crate::options::{GenerateOption, GenerationConfig, NormalizeFn, AUTO_UUID_VERSION};
