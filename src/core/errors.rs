//! Shared error types for the application

use thiserror::Error;

/// Main error type for classcheck operations
#[derive(Debug, Error)]
pub enum Error {
    /// A required-member specification string could not be parsed.
    /// Fatal to check setup: no traversal runs with a partial spec set.
    #[error("malformed specification `{spec}`: {reason}")]
    Specification { spec: String, reason: String },

    /// Configuration errors outside any single spec string
    #[error("configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a specification error for one raw spec string
    pub fn specification(spec: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Specification {
            spec: spec.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
