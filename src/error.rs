use std::error::Error;
use std::fmt;

use canonical::CanonicalError;
use charmap::CharMapError;
use encoder::EncodeError;

/// Boxed error returned by caller-supplied normalizer functions.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Errors that can occur while generating an identifier.
#[derive(Debug)]
pub enum HashIdError {
    /// HMAC-SHA256 selected without a non-empty key.
    MissingKey,
    /// Resolved UUID version outside {3, 5, 8}.
    InvalidUuidVersion(u8),
    /// The default or a custom character map could not be read or parsed.
    CharMapLoad(CharMapError),
    /// A caller-supplied normalizer failed.
    Normalization(BoxError),
    /// Any other digest or packing failure.
    Encode(EncodeError),
}

impl HashIdError {
    /// True for errors caused by the generation config itself rather than
    /// by the input or its environment.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            HashIdError::MissingKey | HashIdError::InvalidUuidVersion(_)
        )
    }
}

impl fmt::Display for HashIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashIdError::MissingKey => {
                write!(f, "HMAC key is required when using HMAC-SHA256")
            }
            HashIdError::InvalidUuidVersion(v) => {
                write!(f, "UUID version should be one of 3, 5, 8 (got {v})")
            }
            HashIdError::CharMapLoad(err) => write!(f, "charmap load failure: {err}"),
            HashIdError::Normalization(err) => write!(f, "normalization error: {err}"),
            HashIdError::Encode(err) => write!(f, "encoding failure: {err}"),
        }
    }
}

impl Error for HashIdError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HashIdError::CharMapLoad(err) => Some(err),
            HashIdError::Normalization(err) => Some(err.as_ref()),
            HashIdError::Encode(err) => Some(err),
            HashIdError::MissingKey | HashIdError::InvalidUuidVersion(_) => None,
        }
    }
}

impl From<EncodeError> for HashIdError {
    fn from(value: EncodeError) -> Self {
        match value {
            EncodeError::MissingKey { .. } => HashIdError::MissingKey,
            EncodeError::InvalidUuidVersion(v) => HashIdError::InvalidUuidVersion(v),
            other => HashIdError::Encode(other),
        }
    }
}

impl From<CharMapError> for HashIdError {
    fn from(value: CharMapError) -> Self {
        HashIdError::CharMapLoad(value)
    }
}

impl From<CanonicalError> for HashIdError {
    fn from(value: CanonicalError) -> Self {
        match value {
            CanonicalError::CharMap(err) => HashIdError::CharMapLoad(err),
        }
    }
}
