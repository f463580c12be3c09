use crate::errors::ProvenanceResult;
use crate::models::EmbeddingRow;

/// External persistence layer for indexed embeddings.
///
/// Writes are keyed by `artifact_id` with insert-or-replace semantics.
pub trait IEmbeddingPersistence: Send + Sync {
    /// Insert or replace the row for `row.artifact_id`.
    fn store_embedding(&self, row: &EmbeddingRow) -> ProvenanceResult<()>;

    /// Load every persisted row.
    fn load_all(&self) -> ProvenanceResult<Vec<EmbeddingRow>>;
}
