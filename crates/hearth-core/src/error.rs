//! Error types for Hearth

use thiserror::Error;

/// The main error type for Hearth operations
#[derive(Debug, Error)]
pub enum HearthError {
    #[error("Unknown animation clip: {0}")]
    UnknownClip(String),

    #[error("Missing required animation clip: {0}")]
    MissingRequiredClip(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Runtime error: {0}")]
    RuntimeError(String),
}

/// Result type alias for Hearth operations
pub type Result<T> = std::result::Result<T, HearthError>;

impl From<toml::de::Error> for HearthError {
    fn from(err: toml::de::Error) -> Self {
        HearthError::TomlParseError(err.to_string())
    }
}
