//! Digest selection.
//!
//! [`select`] maps a [`DigestAlgorithm`] (plus an optional secret) to a ready
//! digest engine. Keyed algorithms are checked here as well as at generation
//! config validation, so a missing key is reported before any hashing.

use std::fmt;

use hmac::{Hmac, Mac};
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::algorithm::DigestAlgorithm;
use crate::error::EncodeError;

type HmacSha256 = Hmac<Sha256>;

/// A digest engine in progress.
#[derive(Clone)]
pub enum DigestFunction {
    Md5(Md5),
    Sha1(Sha1),
    Sha256(Sha256),
    HmacSha256(HmacSha256),
}

impl DigestFunction {
    pub fn algorithm(&self) -> DigestAlgorithm {
        match self {
            DigestFunction::Md5(_) => DigestAlgorithm::Md5,
            DigestFunction::Sha1(_) => DigestAlgorithm::Sha1,
            DigestFunction::Sha256(_) => DigestAlgorithm::Sha256,
            DigestFunction::HmacSha256(_) => DigestAlgorithm::HmacSha256,
        }
    }

    /// Feeds more input into the digest.
    pub fn update(&mut self, data: &[u8]) {
        match self {
            DigestFunction::Md5(h) => Digest::update(h, data),
            DigestFunction::Sha1(h) => Digest::update(h, data),
            DigestFunction::Sha256(h) => Digest::update(h, data),
            DigestFunction::HmacSha256(m) => Mac::update(m, data),
        }
    }

    /// Consumes the engine and returns the raw digest bytes.
    pub fn finalize(self) -> Vec<u8> {
        match self {
            DigestFunction::Md5(h) => Digest::finalize(h).to_vec(),
            DigestFunction::Sha1(h) => Digest::finalize(h).to_vec(),
            DigestFunction::Sha256(h) => Digest::finalize(h).to_vec(),
            DigestFunction::HmacSha256(m) => Mac::finalize(m).into_bytes().to_vec(),
        }
    }
}

// The keyed variant holds the secret; never print engine state.
impl fmt::Debug for DigestFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DigestFunction")
            .field(&self.algorithm())
            .finish()
    }
}

/// Returns a fresh digest engine for `algorithm`.
///
/// `key` is ignored by unkeyed algorithms. HMAC-SHA256 fails with
/// [`EncodeError::MissingKey`] when the key is absent or empty.
pub fn select(
    algorithm: DigestAlgorithm,
    key: Option<&[u8]>,
) -> Result<DigestFunction, EncodeError> {
    match algorithm {
        DigestAlgorithm::Md5 => Ok(DigestFunction::Md5(Md5::new())),
        DigestAlgorithm::Sha1 => Ok(DigestFunction::Sha1(Sha1::new())),
        DigestAlgorithm::Sha256 => Ok(DigestFunction::Sha256(Sha256::new())),
        DigestAlgorithm::HmacSha256 => {
            let key = match key {
                Some(key) if !key.is_empty() => key,
                _ => return Err(EncodeError::MissingKey { algorithm }),
            };
            let mac = <HmacSha256 as Mac>::new_from_slice(key)
                .map_err(|_| EncodeError::InvalidKeyLength(key.len()))?;
            Ok(DigestFunction::HmacSha256(mac))
        }
    }
}

/// One-shot digest of `data`.
///
/// ```rust
/// use encoder::{digest, DigestAlgorithm};
///
/// let bytes = digest(DigestAlgorithm::Sha256, None, b"hello").unwrap();
/// assert_eq!(bytes.len(), 32);
/// ```
pub fn digest(
    algorithm: DigestAlgorithm,
    key: Option<&[u8]>,
    data: &[u8],
) -> Result<Vec<u8>, EncodeError> {
    let mut engine = select(algorithm, key)?;
    engine.update(data);
    Ok(engine.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_digest(algorithm: DigestAlgorithm, key: Option<&[u8]>, data: &[u8]) -> String {
        hex::encode(digest(algorithm, key, data).expect("digest"))
    }

    #[test]
    fn known_digests() {
        assert_eq!(
            hex_digest(DigestAlgorithm::Md5, None, b"example"),
            "1a79a4d60de6718e8e5b326e338ae533"
        );
        assert_eq!(
            hex_digest(DigestAlgorithm::Sha1, None, b"abc"),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        assert_eq!(
            hex_digest(DigestAlgorithm::Sha256, None, b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        // RFC 4231 test case 2.
        assert_eq!(
            hex_digest(
                DigestAlgorithm::HmacSha256,
                Some(b"Jefe".as_slice()),
                b"what do ya want for nothing?"
            ),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn output_lengths_match_algorithm() {
        for algo in DigestAlgorithm::ALL {
            let key: Option<&[u8]> = algo.requires_key().then_some(b"secret".as_slice());
            let bytes = digest(algo, key, b"input").expect("digest");
            assert_eq!(bytes.len(), algo.output_len(), "algorithm {algo}");
        }
    }

    #[test]
    fn hmac_requires_key() {
        assert_eq!(
            select(DigestAlgorithm::HmacSha256, None).unwrap_err(),
            EncodeError::MissingKey {
                algorithm: DigestAlgorithm::HmacSha256
            }
        );
        assert!(matches!(
            select(DigestAlgorithm::HmacSha256, Some(b"".as_slice())),
            Err(EncodeError::MissingKey { .. })
        ));
    }

    #[test]
    fn unkeyed_algorithms_ignore_key() {
        let with_key =
            digest(DigestAlgorithm::Md5, Some(b"ignored".as_slice()), b"x").expect("digest");
        let without = digest(DigestAlgorithm::Md5, None, b"x").expect("digest");
        assert_eq!(with_key, without);
    }

    #[test]
    fn incremental_updates_match_one_shot() {
        let key = Some(b"k".as_slice());
        let mut engine = select(DigestAlgorithm::HmacSha256, key).expect("select");
        engine.update(b"hello ");
        engine.update(b"world");
        assert_eq!(
            engine.finalize(),
            digest(DigestAlgorithm::HmacSha256, key, b"hello world").expect("digest")
        );
    }

    #[test]
    fn debug_does_not_leak_key() {
        let engine =
            select(DigestAlgorithm::HmacSha256, Some(b"top-secret".as_slice())).expect("select");
        let rendered = format!("{engine:?}");
        assert!(!rendered.contains("top-secret"));
        assert!(rendered.contains("HmacSha256"));
    }
}
