//! Error types for policypilot
//!
//! Typed errors for the core pipeline; anyhow is used only at the CLI and
//! configuration boundary.

use thiserror::Error;

/// Main error type for the grounded-response pipeline
#[derive(Error, Debug)]
pub enum PolicyError {
    /// Query missing, empty, or otherwise unusable
    #[error("Invalid input: {0}")]
    InputError(String),

    /// Banned-term snapshot could not be obtained (fail-closed)
    #[error("Term store unavailable: {0}")]
    TermStoreError(String),

    /// Generation backend failure (network, auth, quota, malformed payload)
    #[error("Backend error: {0}")]
    BackendError(String),

    /// Request state machine violation
    #[error("Invalid state transition from {from:?} to {to:?}: {reason}")]
    InvalidTransition {
        from: String,
        to: String,
        reason: String,
    },

    /// Backend call exceeded the configured deadline
    #[error("Operation timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

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
    #[error("Pipeline error: {0}")]
    Generic(String),
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PolicyError>;

/// Convert anyhow errors to PolicyError
impl From<anyhow::Error> for PolicyError {
    fn from(err: anyhow::Error) -> Self {
        PolicyError::Generic(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PolicyError::Timeout { duration_ms: 30000 };
        assert!(err.to_string().contains("30000"));
    }

    #[test]
    fn test_invalid_transition_error() {
        let err = PolicyError::InvalidTransition {
            from: "Dispatched".to_string(),
            to: "Moderated".to_string(),
            reason: "Cannot go backwards".to_string(),
        };
        assert!(err.to_string().contains("Dispatched"));
        assert!(err.to_string().contains("Moderated"));
    }

    #[test]
    fn test_backend_error_preserves_detail() {
        let err = PolicyError::BackendError("HTTP 429: quota exceeded".to_string());
        assert!(err.to_string().contains("429"));
    }
}
