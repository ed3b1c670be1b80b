use std::fmt;
use std::sync::Arc;

use charmap::CharMap;
use encoder::{DigestAlgorithm, UuidVersion};

use crate::error::{BoxError, HashIdError};

/// Caller-supplied normalization step, used in place of the built-in one.
pub type NormalizeFn = Arc<dyn Fn(&str) -> Result<String, BoxError> + Send + Sync>;

/// Version value meaning "derive from the algorithm".
pub const AUTO_UUID_VERSION: u8 = 0;

/// A single field-level override applied to a [`GenerationConfig`].
///
/// Options are applied in order and later ones win for the field they touch.
/// Selecting an algorithm clears any earlier explicit version, so an explicit
/// [`UuidVersion`](GenerateOption::UuidVersion) only takes effect when it is
/// applied after the algorithm.
#[derive(Clone)]
pub enum GenerateOption {
    /// Digest algorithm; resets the version to the algorithm's implied one.
    Algorithm(DigestAlgorithm),
    /// Secret for HMAC-SHA256. Also selects HMAC-SHA256 but leaves the
    /// version field alone.
    HmacKey(Vec<u8>),
    /// Whether to normalize before hashing.
    Normalization(bool),
    /// Custom normalizer function.
    Normalizer(NormalizeFn),
    /// Explicit version nibble; `0` means auto.
    UuidVersion(u8),
    /// Per-call character map, bound to the default separator.
    CharMap(CharMap),
}

impl GenerateOption {
    /// Wraps a plain closure as a [`GenerateOption::Normalizer`].
    pub fn normalizer<F>(f: F) -> Self
    where
        F: Fn(&str) -> Result<String, BoxError> + Send + Sync + 'static,
    {
        GenerateOption::Normalizer(Arc::new(f))
    }

    pub fn hmac_key(key: impl AsRef<[u8]>) -> Self {
        GenerateOption::HmacKey(key.as_ref().to_vec())
    }
}

impl fmt::Debug for GenerateOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateOption::Algorithm(algo) => f.debug_tuple("Algorithm").field(algo).finish(),
            GenerateOption::HmacKey(_) => f.write_str("HmacKey(<redacted>)"),
            GenerateOption::Normalization(on) => f.debug_tuple("Normalization").field(on).finish(),
            GenerateOption::Normalizer(_) => f.write_str("Normalizer(<fn>)"),
            GenerateOption::UuidVersion(v) => f.debug_tuple("UuidVersion").field(v).finish(),
            GenerateOption::CharMap(map) => f
                .debug_tuple("CharMap")
                .field(&format_args!("{} entries", map.len()))
                .finish(),
        }
    }
}

/// Everything that determines how an input becomes an identifier.
///
/// `Default` is MD5, normalization on, built-in normalizer, automatic
/// version, no key, no per-call character map.
#[derive(Clone)]
pub struct GenerationConfig {
    algorithm: DigestAlgorithm,
    normalize: bool,
    normalizer: Option<NormalizeFn>,
    uuid_version: u8,
    hmac_key: Option<Vec<u8>>,
    char_map: Option<CharMap>,
}

impl GenerationConfig {
    /// Default config with `options` applied in order.
    ///
    /// ```rust
    /// use hashid::{DigestAlgorithm, GenerateOption, GenerationConfig};
    ///
    /// let cfg = GenerationConfig::from_options([
    ///     GenerateOption::Algorithm(DigestAlgorithm::Sha1),
    ///     GenerateOption::UuidVersion(8),
    /// ]);
    /// assert_eq!(cfg.resolved_uuid_version(), 8);
    ///
    /// let cfg = GenerationConfig::from_options([
    ///     GenerateOption::UuidVersion(8),
    ///     GenerateOption::Algorithm(DigestAlgorithm::Sha1),
    /// ]);
    /// assert_eq!(cfg.resolved_uuid_version(), 5);
    /// ```
    pub fn from_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = GenerateOption>,
    {
        options
            .into_iter()
            .fold(Self::new(), |cfg, option| cfg.with(option))
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one override and returns the updated config.
    pub fn with(mut self, option: GenerateOption) -> Self {
        match option {
            GenerateOption::Algorithm(algorithm) => {
                self.algorithm = algorithm;
                self.uuid_version = algorithm.implied_uuid_version().as_u8();
            }
            GenerateOption::HmacKey(key) => {
                self.algorithm = DigestAlgorithm::HmacSha256;
                self.hmac_key = Some(key);
            }
            GenerateOption::Normalization(on) => self.normalize = on,
            GenerateOption::Normalizer(f) => self.normalizer = Some(f),
            GenerateOption::UuidVersion(v) => self.uuid_version = v,
            GenerateOption::CharMap(map) => self.char_map = Some(map),
        }
        self
    }

    pub fn with_algorithm(self, algorithm: DigestAlgorithm) -> Self {
        self.with(GenerateOption::Algorithm(algorithm))
    }

    pub fn with_hmac_key(self, key: impl AsRef<[u8]>) -> Self {
        self.with(GenerateOption::hmac_key(key))
    }

    pub fn with_normalization(self, on: bool) -> Self {
        self.with(GenerateOption::Normalization(on))
    }

    pub fn with_normalizer<F>(self, f: F) -> Self
    where
        F: Fn(&str) -> Result<String, BoxError> + Send + Sync + 'static,
    {
        self.with(GenerateOption::normalizer(f))
    }

    pub fn with_uuid_version(self, version: u8) -> Self {
        self.with(GenerateOption::UuidVersion(version))
    }

    pub fn with_char_map(self, map: CharMap) -> Self {
        self.with(GenerateOption::CharMap(map))
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    pub fn normalization_enabled(&self) -> bool {
        self.normalize
    }

    pub fn normalizer(&self) -> Option<&NormalizeFn> {
        self.normalizer.as_ref()
    }

    /// The stored version field; `0` when left on auto.
    pub fn uuid_version(&self) -> u8 {
        self.uuid_version
    }

    pub fn hmac_key(&self) -> Option<&[u8]> {
        self.hmac_key.as_deref()
    }

    pub fn char_map(&self) -> Option<&CharMap> {
        self.char_map.as_ref()
    }

    /// Version that will be stamped into the UUID.
    pub fn resolved_uuid_version(&self) -> u8 {
        match self.uuid_version {
            AUTO_UUID_VERSION => self.algorithm.implied_uuid_version().as_u8(),
            v => v,
        }
    }

    /// Cross-field checks run before any normalization or hashing.
    pub fn validate(&self) -> Result<UuidVersion, HashIdError> {
        if self.algorithm.requires_key() && self.hmac_key().is_none_or(<[u8]>::is_empty) {
            return Err(HashIdError::MissingKey);
        }
        Ok(UuidVersion::try_from(self.resolved_uuid_version())?)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            algorithm: DigestAlgorithm::default(),
            normalize: true,
            normalizer: None,
            uuid_version: AUTO_UUID_VERSION,
            hmac_key: None,
            char_map: None,
        }
    }
}

impl fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("algorithm", &self.algorithm)
            .field("normalize", &self.normalize)
            .field("custom_normalizer", &self.normalizer.is_some())
            .field("uuid_version", &self.uuid_version)
            .field("hmac_key", &self.hmac_key.as_ref().map(|_| "<redacted>"))
            .field("char_map_entries", &self.char_map.as_ref().map(CharMap::len))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = GenerationConfig::new();
        assert_eq!(cfg.algorithm(), DigestAlgorithm::Md5);
        assert!(cfg.normalization_enabled());
        assert!(cfg.normalizer().is_none());
        assert_eq!(cfg.uuid_version(), AUTO_UUID_VERSION);
        assert_eq!(cfg.resolved_uuid_version(), 3);
        assert!(cfg.hmac_key().is_none());
        assert!(cfg.char_map().is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn algorithm_sets_implied_version() {
        let cases = [
            (DigestAlgorithm::Md5, 3),
            (DigestAlgorithm::Sha1, 5),
            (DigestAlgorithm::Sha256, 3),
            (DigestAlgorithm::HmacSha256, 8),
        ];
        for (algo, version) in cases {
            let cfg = GenerationConfig::from_options([GenerateOption::Algorithm(algo)]);
            assert_eq!(cfg.uuid_version(), version, "algorithm {algo}");
            assert_eq!(cfg.resolved_uuid_version(), version, "algorithm {algo}");
        }
    }

    #[test]
    fn later_options_win() {
        let cfg = GenerationConfig::from_options([
            GenerateOption::Algorithm(DigestAlgorithm::Sha1),
            GenerateOption::UuidVersion(3),
        ]);
        assert_eq!(cfg.resolved_uuid_version(), 3);

        let cfg = GenerationConfig::from_options([
            GenerateOption::UuidVersion(3),
            GenerateOption::Algorithm(DigestAlgorithm::Sha1),
        ]);
        assert_eq!(cfg.resolved_uuid_version(), 5);

        let cfg = GenerationConfig::from_options([
            GenerateOption::Normalization(false),
            GenerateOption::Normalization(true),
        ]);
        assert!(cfg.normalization_enabled());
    }

    #[test]
    fn hmac_key_selects_hmac_without_touching_version() {
        let cfg = GenerationConfig::new().with_hmac_key("secret");
        assert_eq!(cfg.algorithm(), DigestAlgorithm::HmacSha256);
        assert_eq!(cfg.uuid_version(), AUTO_UUID_VERSION);
        assert_eq!(cfg.resolved_uuid_version(), 8);

        let cfg = GenerationConfig::new()
            .with_uuid_version(5)
            .with_hmac_key("secret");
        assert_eq!(cfg.resolved_uuid_version(), 5);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn hmac_requires_non_empty_key() {
        let cfg = GenerationConfig::new().with_algorithm(DigestAlgorithm::HmacSha256);
        assert!(matches!(cfg.validate(), Err(HashIdError::MissingKey)));

        let cfg = GenerationConfig::new().with_hmac_key(b"");
        assert!(matches!(cfg.validate(), Err(HashIdError::MissingKey)));
    }

    #[test]
    fn invalid_versions_rejected() {
        for v in [1u8, 2, 4, 6, 7, 9, 42] {
            let cfg = GenerationConfig::new().with_uuid_version(v);
            assert!(
                matches!(cfg.validate(), Err(HashIdError::InvalidUuidVersion(got)) if got == v),
                "version {v}"
            );
        }
        for v in [0u8, 3, 5, 8] {
            assert!(GenerationConfig::new().with_uuid_version(v).validate().is_ok());
        }
    }

    #[test]
    fn debug_redacts_key() {
        let cfg = GenerationConfig::new().with_hmac_key("hunter2");
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));

        let option = GenerateOption::hmac_key("hunter2");
        assert!(!format!("{option:?}").contains("hunter2"));
    }
}
