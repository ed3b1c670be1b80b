use charmap::CharMapError;
use thiserror::Error;

/// Errors that can occur while preparing a normalizer.
///
/// Normalization itself is total; only resolving the default character map
/// can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("default character map unavailable: {0}")]
    CharMap(#[from] CharMapError),
}
