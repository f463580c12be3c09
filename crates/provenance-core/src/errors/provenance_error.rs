use super::{EmbeddingError, PersistenceError};

/// Top-level error type for the originality auditor.
#[derive(Debug, thiserror::Error)]
pub enum ProvenanceError {
    #[error("invalid vector: {reason}")]
    InvalidVector { reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("unknown artifact: {id}")]
    UnknownArtifact { id: String },

    #[error("invalid artifact id: {reason}")]
    InvalidArtifactId { reason: String },

    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("persistence error: {0}")]
    PersistenceError(#[from] PersistenceError),

    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ProvenanceError {
    pub(crate) fn invalid_vector(reason: impl Into<String>) -> Self {
        Self::InvalidVector {
            reason: reason.into(),
        }
    }

    /// Whether this error means the caller supplied bad input, as opposed to a
    /// collaborator failure.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidVector { .. }
                | Self::DimensionMismatch { .. }
                | Self::InvalidArtifactId { .. }
                | Self::UnknownArtifact { .. }
        )
    }
}

impl From<toml::de::Error> for ProvenanceError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigError {
            reason: err.to_string(),
        }
    }
}

/// Convenience alias used across the workspace.
pub type ProvenanceResult<T> = Result<T, ProvenanceError>;
