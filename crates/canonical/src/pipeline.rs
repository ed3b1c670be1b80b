use charmap::CharMap;
use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizerConfig;
use crate::error::CanonicalError;
use crate::strip::is_disallowed;
use crate::whitespace::collapse_whitespace;

/// A normalizer bound to one character map and separator.
///
/// Build it once and reuse it; [`normalize`](Normalizer::normalize) takes
/// `&self` and is safe to call from many threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    char_map: CharMap,
    separator: String,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        let separator = config.effective_separator().to_string();
        Self {
            char_map: config.char_map,
            separator,
        }
    }

    /// Normalizer over `char_map` with the default `"-"` separator.
    pub fn with_char_map(char_map: CharMap) -> Self {
        Self::new(NormalizerConfig::new(char_map))
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn char_map(&self) -> &CharMap {
        &self.char_map
    }

    /// Canonicalizes `input`.
    ///
    /// In order: NFC composition, per-code-point substitution, separator
    /// results turned into a space, disallowed characters stripped, trim,
    /// whitespace runs collapsed to the separator, lowercase.
    pub fn normalize(&self, input: &str) -> String {
        normalize_inner(input, &self.char_map, &self.separator)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormalizerConfig::default())
    }
}

/// Main entry point. Normalizes `input` under an explicit configuration.
///
/// ```rust
/// use canonical::{normalize, NormalizerConfig};
///
/// let cfg = NormalizerConfig::default();
/// assert_eq!(normalize("   UPPER   case   ", &cfg), "upper-case");
/// assert_eq!(normalize("A81758F#   FFE04©E4F5", &cfg), "a81758f-ffe04ce4f5");
/// ```
pub fn normalize(input: &str, cfg: &NormalizerConfig) -> String {
    normalize_inner(input, &cfg.char_map, cfg.effective_separator())
}

/// Normalizes with the process-wide default map and `"-"` separator.
pub fn normalize_default(input: &str) -> Result<String, CanonicalError> {
    normalize_with(input, None, None)
}

/// Normalizes with a caller-supplied map and/or separator.
///
/// A missing map falls back to the process-wide default; a missing or empty
/// separator falls back to `"-"`.
///
/// ```rust
/// use canonical::{normalize_with, CharMap};
///
/// let map: CharMap = [("@", "at"), ("#", "hash")].into_iter().collect();
/// let out = normalize_with("test@example.com", Some(&map), None).unwrap();
/// assert_eq!(out, "testatexamplecom");
///
/// let out = normalize_with("Custom Separator", None, Some("_")).unwrap();
/// assert_eq!(out, "custom_separator");
/// ```
pub fn normalize_with(
    input: &str,
    char_map: Option<&CharMap>,
    separator: Option<&str>,
) -> Result<String, CanonicalError> {
    let separator = match separator {
        Some(sep) if !sep.is_empty() => sep,
        _ => crate::config::DEFAULT_SEPARATOR,
    };

    match char_map {
        Some(char_map) => Ok(normalize_inner(input, char_map, separator)),
        None => {
            let char_map = charmap::global().get()?;
            Ok(normalize_inner(input, &char_map, separator))
        }
    }
}

fn normalize_inner(input: &str, char_map: &CharMap, separator: &str) -> String {
    // Composition first, so "e" + U+0301 is looked up as "é".
    let composed: String = input.nfc().collect();

    let mut substituted = String::with_capacity(composed.len());
    let mut buf = [0u8; 4];
    for ch in composed.chars() {
        let fragment: &str = match char_map.lookup(ch) {
            Some(replacement) => replacement,
            None => ch.encode_utf8(&mut buf),
        };

        // A separator result must become a word boundary before the strip
        // below removes it (the default "-" is itself disallowed).
        if fragment == separator {
            substituted.push(' ');
            continue;
        }

        substituted.extend(fragment.chars().filter(|c| !is_disallowed(*c)));
    }

    // Per code point, so a word-final capital sigma still lowers to 'σ'.
    collapse_whitespace(&substituted, separator)
        .chars()
        .flat_map(char::to_lowercase)
        .collect()
}
