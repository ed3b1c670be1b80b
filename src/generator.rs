use std::borrow::Cow;
use std::time::Instant;

use charmap::CharMapRegistry;
use tracing::{debug, warn, Level};

use crate::error::HashIdError;
use crate::options::{GenerateOption, GenerationConfig};

/// Generates identifiers against one default-character-map registry.
///
/// The free functions [`generate`] and [`generate_with`] use the process-wide
/// registry; build a `Generator` over your own [`CharMapRegistry`] when the
/// default map must not be shared.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'r> {
    registry: &'r CharMapRegistry,
}

impl<'r> Generator<'r> {
    pub fn new(registry: &'r CharMapRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r CharMapRegistry {
        self.registry
    }

    /// Derives the identifier for `input` under `cfg`.
    pub fn generate(&self, input: &str, cfg: &GenerationConfig) -> Result<String, HashIdError> {
        let start = Instant::now();
        let span = tracing::span!(
            Level::INFO,
            "hashid.generate",
            algorithm = %cfg.algorithm(),
            uuid_version = cfg.resolved_uuid_version()
        );
        let _guard = span.enter();

        match self.generate_inner(input, cfg) {
            Ok(id) => {
                let elapsed_micros = start.elapsed().as_micros();
                debug!(input_len = input.len(), elapsed_micros, "generate_success");
                Ok(id)
            }
            Err(err) => {
                let elapsed_micros = start.elapsed().as_micros();
                warn!(error = %err, elapsed_micros, "generate_failure");
                Err(err)
            }
        }
    }

    fn generate_inner(&self, input: &str, cfg: &GenerationConfig) -> Result<String, HashIdError> {
        let version = cfg.validate()?;

        let prepared = if cfg.normalization_enabled() {
            Cow::Owned(self.normalize(input, cfg)?)
        } else {
            Cow::Borrowed(input)
        };

        let mut engine = encoder::select(cfg.algorithm(), cfg.hmac_key())?;
        engine.update(prepared.as_bytes());
        Ok(encoder::encode(&engine.finalize(), version)?)
    }

    // A per-call map wins over a custom function, which wins over the
    // registry's default map.
    fn normalize(&self, input: &str, cfg: &GenerationConfig) -> Result<String, HashIdError> {
        if let Some(map) = cfg.char_map() {
            return Ok(canonical::normalize_with(input, Some(map), None)?);
        }
        if let Some(normalizer) = cfg.normalizer() {
            return (**normalizer)(input).map_err(HashIdError::Normalization);
        }
        let map = self.registry.get()?;
        Ok(canonical::normalize_with(input, Some(&map), None)?)
    }
}

impl Default for Generator<'static> {
    fn default() -> Self {
        Self::new(charmap::global())
    }
}

/// Derives the identifier for `input` using the process-wide default map.
///
/// ```rust
/// use hashid::{generate, GenerationConfig};
///
/// let cfg = GenerationConfig::default();
/// let a = generate("A81758FFFE04E4F5", &cfg).unwrap();
/// let b = generate("a81758fffe04e4f5", &cfg).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a, "ddea575a-d5e2-3114-9267-dbead79c4ab8");
/// ```
pub fn generate(input: &str, cfg: &GenerationConfig) -> Result<String, HashIdError> {
    Generator::default().generate(input, cfg)
}

/// Builds a config from `options` (last write wins) and generates.
///
/// ```rust
/// use hashid::{generate_with, DigestAlgorithm, GenerateOption};
///
/// let id = generate_with(
///     "EXAMPLE",
///     [GenerateOption::Algorithm(DigestAlgorithm::Sha1)],
/// )
/// .unwrap();
/// assert_eq!(id, "c3499c27-2973-5a7f-807e-fb8676a92dcb");
/// ```
pub fn generate_with<I>(input: &str, options: I) -> Result<String, HashIdError>
where
    I: IntoIterator<Item = GenerateOption>,
{
    generate(input, &GenerationConfig::from_options(options))
}
