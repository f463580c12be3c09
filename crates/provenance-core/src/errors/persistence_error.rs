/// Errors raised by the external persistence collaborator.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("failed to persist embedding for '{artifact_id}': {reason}")]
    WriteFailed { artifact_id: String, reason: String },

    #[error("failed to load persisted embeddings: {reason}")]
    ReadFailed { reason: String },

    #[error("persisted row for '{artifact_id}' is corrupt: {reason}")]
    CorruptRow { artifact_id: String, reason: String },
}
