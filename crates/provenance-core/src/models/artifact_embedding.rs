use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ProvenanceError, ProvenanceResult};
use crate::vector::Vector;

/// A stored artifact: its identifier, normalized embedding, and opaque metadata.
///
/// Entries are immutable once built; the store replaces whole entries on upsert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactEmbedding {
    pub artifact_id: String,
    pub vector: Vector,
    /// Unconstrained caller metadata. Defaults to an empty object.
    pub metadata: serde_json::Value,
    pub indexed_at: DateTime<Utc>,
}

impl ArtifactEmbedding {
    /// Build an entry with empty metadata, stamped now.
    pub fn new(artifact_id: impl Into<String>, vector: Vector) -> Self {
        Self {
            artifact_id: artifact_id.into(),
            vector,
            metadata: empty_metadata(),
            indexed_at: Utc::now(),
        }
    }

    /// Replace the metadata. `None` resets it to an empty object.
    pub fn with_metadata(mut self, metadata: Option<serde_json::Value>) -> Self {
        self.metadata = metadata.unwrap_or_else(empty_metadata);
        self
    }

    pub fn dimensions(&self) -> usize {
        self.vector.dimensions()
    }
}

fn empty_metadata() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

/// Artifact ids must be non-empty and not only whitespace.
pub fn validate_artifact_id(artifact_id: &str) -> ProvenanceResult<()> {
    if artifact_id.trim().is_empty() {
        return Err(ProvenanceError::InvalidArtifactId {
            reason: "artifact id must not be empty".to_string(),
        });
    }
    Ok(())
}
