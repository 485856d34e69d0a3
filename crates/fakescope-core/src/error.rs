//! Error types for FakeScope

use std::path::PathBuf;

/// Result type alias using FakeScope's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for FakeScope operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A model artifact is missing, corrupt or incompatible. Fatal at startup.
    #[error("model load error ({}): {message}", path.display())]
    ModelLoad { path: PathBuf, message: String },

    /// The requested domain is not present in the registry
    #[error("unknown domain: {0}")]
    UnknownDomain(String),

    /// Vectorization or classification failed for one domain
    #[error("inference error for {domain}: {message}")]
    Inference { domain: String, message: String },

    /// Input rejected before any model ran
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new model load error
    pub fn model_load(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::ModelLoad {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create a new unknown domain error
    pub fn unknown_domain(name: impl Into<String>) -> Self {
        Self::UnknownDomain(name.into())
    }

    /// Create a new inference error
    pub fn inference(domain: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Inference {
            domain: domain.into(),
            message: msg.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the error must stop the process before any request is served
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::ModelLoad { .. } | Self::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::model_load("models/liar_model.json", "file not found");
        assert_eq!(
            err.to_string(),
            "model load error (models/liar_model.json): file not found"
        );

        let err = Error::inference("LIAR", "dimension mismatch");
        assert_eq!(err.to_string(), "inference error for LIAR: dimension mismatch");
    }

    #[test]
    fn test_fatal_classification() {
        assert!(Error::model_load("x", "y").is_fatal());
        assert!(Error::config("bad").is_fatal());
        assert!(!Error::inference("LIAR", "boom").is_fatal());
        assert!(!Error::validation("empty").is_fatal());
        assert!(!Error::unknown_domain("Reuters").is_fatal());
    }
}
