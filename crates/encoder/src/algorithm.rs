//! Supported digest algorithms and UUID versions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EncodeError;

/// Digest used to derive an identifier.
///
/// Serialized with the names accepted on the command line:
/// `md5`, `sha1`, `sha256`, `hmac`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    #[default]
    Md5,
    Sha1,
    Sha256,
    #[serde(rename = "hmac", alias = "hmac-sha256")]
    HmacSha256,
}

impl DigestAlgorithm {
    pub const ALL: [DigestAlgorithm; 4] = [
        DigestAlgorithm::Md5,
        DigestAlgorithm::Sha1,
        DigestAlgorithm::Sha256,
        DigestAlgorithm::HmacSha256,
    ];

    /// Digest width in bytes.
    pub fn output_len(self) -> usize {
        match self {
            DigestAlgorithm::Md5 => 16,
            DigestAlgorithm::Sha1 => 20,
            DigestAlgorithm::Sha256 | DigestAlgorithm::HmacSha256 => 32,
        }
    }

    /// Whether a secret key must be supplied.
    pub fn requires_key(self) -> bool {
        matches!(self, DigestAlgorithm::HmacSha256)
    }

    /// Version stamped into the UUID when none is requested explicitly.
    pub fn implied_uuid_version(self) -> UuidVersion {
        match self {
            DigestAlgorithm::Sha1 => UuidVersion::V5,
            DigestAlgorithm::HmacSha256 => UuidVersion::V8,
            DigestAlgorithm::Md5 | DigestAlgorithm::Sha256 => UuidVersion::V3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "md5",
            DigestAlgorithm::Sha1 => "sha1",
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::HmacSha256 => "hmac",
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md5" => Ok(DigestAlgorithm::Md5),
            "sha1" => Ok(DigestAlgorithm::Sha1),
            "sha256" => Ok(DigestAlgorithm::Sha256),
            "hmac" | "hmac-sha256" | "hmac_sha256" => Ok(DigestAlgorithm::HmacSha256),
            _ => Err(EncodeError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// UUID version nibble written by the encoder.
///
/// 3 and 5 are the RFC 4122 name-based versions; 8 is the RFC 9562 custom
/// layout used for keyed digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum UuidVersion {
    V3,
    V5,
    V8,
}

impl UuidVersion {
    pub fn as_u8(self) -> u8 {
        match self {
            UuidVersion::V3 => 3,
            UuidVersion::V5 => 5,
            UuidVersion::V8 => 8,
        }
    }
}

impl TryFrom<u8> for UuidVersion {
    type Error = EncodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(UuidVersion::V3),
            5 => Ok(UuidVersion::V5),
            8 => Ok(UuidVersion::V8),
            other => Err(EncodeError::InvalidUuidVersion(other)),
        }
    }
}

impl From<UuidVersion> for u8 {
    fn from(version: UuidVersion) -> Self {
        version.as_u8()
    }
}

impl fmt::Display for UuidVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_algorithm_names() {
        assert_eq!("md5".parse::<DigestAlgorithm>(), Ok(DigestAlgorithm::Md5));
        assert_eq!("SHA1".parse::<DigestAlgorithm>(), Ok(DigestAlgorithm::Sha1));
        assert_eq!(
            " sha256 ".parse::<DigestAlgorithm>(),
            Ok(DigestAlgorithm::Sha256)
        );
        assert_eq!(
            "hmac".parse::<DigestAlgorithm>(),
            Ok(DigestAlgorithm::HmacSha256)
        );
        assert!(matches!(
            "crc32".parse::<DigestAlgorithm>(),
            Err(EncodeError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for algo in DigestAlgorithm::ALL {
            assert_eq!(algo.to_string().parse::<DigestAlgorithm>(), Ok(algo));
        }
    }

    #[test]
    fn implied_versions() {
        assert_eq!(DigestAlgorithm::Md5.implied_uuid_version(), UuidVersion::V3);
        assert_eq!(DigestAlgorithm::Sha1.implied_uuid_version(), UuidVersion::V5);
        assert_eq!(DigestAlgorithm::Sha256.implied_uuid_version(), UuidVersion::V3);
        assert_eq!(
            DigestAlgorithm::HmacSha256.implied_uuid_version(),
            UuidVersion::V8
        );
    }

    #[test]
    fn only_hmac_requires_key() {
        for algo in DigestAlgorithm::ALL {
            assert_eq!(algo.requires_key(), algo == DigestAlgorithm::HmacSha256);
        }
    }

    #[test]
    fn uuid_version_bounds() {
        for v in [3u8, 5, 8] {
            assert_eq!(UuidVersion::try_from(v).map(u8::from), Ok(v));
        }
        for v in [0u8, 1, 2, 4, 6, 7, 9, 10, 255] {
            assert_eq!(UuidVersion::try_from(v), Err(EncodeError::InvalidUuidVersion(v)));
        }
    }

    #[test]
    fn serde_names() {
        let json = serde_json::to_string(&DigestAlgorithm::HmacSha256).expect("serialize");
        assert_eq!(json, "\"hmac\"");
        let algo: DigestAlgorithm = serde_json::from_str("\"sha1\"").expect("deserialize");
        assert_eq!(algo, DigestAlgorithm::Sha1);

        let version: UuidVersion = serde_json::from_str("5").expect("deserialize");
        assert_eq!(version, UuidVersion::V5);
        assert!(serde_json::from_str::<UuidVersion>("10").is_err());
    }
}
