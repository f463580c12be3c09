/// Errors raised by the external embedding collaborator.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("embedding provider '{provider}' failed: {reason}")]
    ProviderFailed { provider: String, reason: String },

    #[error("embedding provider '{provider}' is unavailable")]
    Unavailable { provider: String },

    #[error("provider produced {actual} dimensions, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("media input is empty")]
    EmptyMedia,
}
