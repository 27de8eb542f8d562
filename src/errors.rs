//! Error types for the FAQ assistant backend
//!
//! One crate-wide error enum; retrieval and generation failures are
//! surfaced to the HTTP boundary without being caught or retried.

use thiserror::Error;

/// Main error type for the assistant service
#[derive(Error, Debug)]
pub enum AssistantError {
    /// Retrieval failures: record store unreadable, vector index
    /// missing, or query embedding failed
    #[error("Retrieval failed: {0}")]
    Retrieval(String),

    /// Generation failures: model backend unreachable or returned
    /// malformed output
    #[error("Answer generation failed: {0}")]
    Generation(String),

    /// A record lookup missed in the document store
    #[error("Record '{id}' not found in collection '{collection}'")]
    RecordNotFound { collection: String, id: String },

    /// Embedding dimensionality does not match the index build-time value
    #[error("Embedding dimension mismatch: configured {configured}, index reports {index}")]
    DimensionMismatch { configured: usize, index: usize },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic errors with context
    #[error("Assistant error: {0}")]
    Generic(String),
}

/// Result type alias for assistant operations
pub type Result<T> = std::result::Result<T, AssistantError>;

/// Convert anyhow errors to AssistantError
impl From<anyhow::Error> for AssistantError {
    fn from(err: anyhow::Error) -> Self {
        AssistantError::Generic(format!("{:#}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_error_display() {
        let err = AssistantError::DimensionMismatch {
            configured: 768,
            index: 384,
        };
        assert!(err.to_string().contains("768"));
        assert!(err.to_string().contains("384"));
    }

    #[test]
    fn test_record_not_found_error() {
        let err = AssistantError::RecordNotFound {
            collection: "users".to_string(),
            id: "abc123".to_string(),
        };
        assert!(err.to_string().contains("users"));
        assert!(err.to_string().contains("abc123"));
    }

    #[test]
    fn test_anyhow_conversion_keeps_context() {
        let inner: anyhow::Result<()> = Err(anyhow::anyhow!("inner"));
        let err: AssistantError = inner.context("outer").unwrap_err().into();
        let text = err.to_string();
        assert!(text.contains("outer"));
        assert!(text.contains("inner"));
    }
}
