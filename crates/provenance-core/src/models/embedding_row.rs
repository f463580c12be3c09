//! Flat persistence format for the store's contents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{PersistenceError, ProvenanceResult};
use crate::models::{validate_artifact_id, ArtifactEmbedding};
use crate::vector::Vector;

/// One `(artifact_id, vector, metadata)` row, as handed to and received from
/// an external persistence layer.
///
/// Serialized in camelCase like the other exported records; snake_case keys
/// written by older layers are still accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EmbeddingRow {
    #[serde(alias = "artifact_id")]
    pub artifact_id: String,
    pub vector: Vec<f32>,
    #[serde(default)]
    pub metadata: serde_json::Value,
    #[serde(default = "Utc::now", alias = "indexed_at")]
    pub indexed_at: DateTime<Utc>,
}

impl From<&ArtifactEmbedding> for EmbeddingRow {
    fn from(entry: &ArtifactEmbedding) -> Self {
        Self {
            artifact_id: entry.artifact_id.clone(),
            vector: entry.vector.to_vec(),
            metadata: entry.metadata.clone(),
            indexed_at: entry.indexed_at,
        }
    }
}

impl EmbeddingRow {
    /// Validate a persisted row back into a store entry.
    ///
    /// # Errors
    /// Returns `PersistenceError::CorruptRow` if the id is empty or the vector
    /// fails validation.
    pub fn into_embedding(self) -> ProvenanceResult<ArtifactEmbedding> {
        let corrupt = |reason: String, id: &str| PersistenceError::CorruptRow {
            artifact_id: id.to_string(),
            reason,
        };

        validate_artifact_id(&self.artifact_id)
            .map_err(|e| corrupt(e.to_string(), &self.artifact_id))?;
        let vector =
            Vector::new(self.vector).map_err(|e| corrupt(e.to_string(), &self.artifact_id))?;

        let metadata = match self.metadata {
            serde_json::Value::Null => None,
            other => Some(other),
        };
        let mut entry = ArtifactEmbedding::new(self.artifact_id, vector).with_metadata(metadata);
        entry.indexed_at = self.indexed_at;
        Ok(entry)
    }
}
