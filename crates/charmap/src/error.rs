use thiserror::Error;

/// Errors raised while reading or parsing a character map.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CharMapError {
    #[error("failed to read charmap file {path}: {message}")]
    Read { path: String, message: String },
    #[error("failed to parse charmap: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for CharMapError {
    fn from(err: serde_json::Error) -> Self {
        CharMapError::Parse(err.to_string())
    }
}
