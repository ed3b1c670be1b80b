//! Configuration types for the normalizer.
//!
//! This module defines [`NormalizerConfig`], the pair of inputs that fully
//! determines normalization output: the character map and the separator.
//!
//! # Stability
//!
//! For a given map and separator, output is stable across:
//! - Different machines and architectures
//! - Different operating systems
//! - Different locales
//!
//! Changing either field changes identifiers derived from normalized text, so
//! treat a deployed configuration as frozen.
//!
//! # Examples
//!
//! ## Default Configuration
//!
//! ```rust
//! use canonical::NormalizerConfig;
//!
//! let config = NormalizerConfig::default();
//! assert_eq!(config.separator, "-");
//! assert_eq!(config.char_map.get("$"), Some("dollar"));
//! ```
//!
//! ## Custom Map and Separator
//!
//! ```rust
//! use canonical::{CharMap, NormalizerConfig};
//!
//! let map: CharMap = [("@", "at"), ("#", "hash")].into_iter().collect();
//! let config = NormalizerConfig::new(map).with_separator("_");
//! assert_eq!(config.effective_separator(), "_");
//! ```

use charmap::{CharMap, CharMapError};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Separator used when none (or an empty one) is configured.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Configuration for a single normalization.
///
/// # Fields
///
/// - `char_map`: symbol → replacement table consulted per code point
/// - `separator`: text placed between words after whitespace collapsing
///
/// # Empty Separator
///
/// An empty `separator` is accepted but behaves exactly like
/// [`DEFAULT_SEPARATOR`]; words are never glued together.
///
/// # Serialization
///
/// ```json
/// {
///   "char_map": { "$": "dollar", "©": "(c)" },
///   "separator": "-"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Replacement table. Characters without an entry are kept unchanged.
    pub char_map: CharMap,

    /// Word separator in the normalized output.
    ///
    /// A character-map replacement equal to the separator is turned into
    /// whitespace before stripping, so it survives as a word boundary.
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl NormalizerConfig {
    /// Config with `char_map` and the default separator.
    pub fn new(char_map: CharMap) -> Self {
        Self {
            char_map,
            separator: default_separator(),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// The separator actually used: an empty one falls back to `"-"`.
    pub fn effective_separator(&self) -> &str {
        if self.separator.is_empty() {
            DEFAULT_SEPARATOR
        } else {
            &self.separator
        }
    }
}

impl Default for NormalizerConfig {
    /// Bundled character map and `"-"` separator.
    ///
    /// The bundled table is compiled into the `charmap` crate and covered by
    /// its tests; should it ever fail to parse, a warning is logged and the
    /// default falls back to an empty map. Use [`crate::normalize_default`]
    /// to surface that error.
    fn default() -> Self {
        Self::new(bundled_or_empty(CharMap::bundled()))
    }
}

fn bundled_or_empty(loaded: Result<CharMap, CharMapError>) -> CharMap {
    loaded.unwrap_or_else(|err| {
        warn!(error = %err, "bundled_charmap_unavailable");
        CharMap::new()
    })
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}
