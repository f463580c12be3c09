use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One ranked comparison between a query and a stored artifact.
/// Computed per audit, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SimilarityMatch {
    pub artifact_id: String,
    /// Cosine similarity in [-1.0, 1.0].
    pub similarity: f64,
}

impl SimilarityMatch {
    pub fn new(artifact_id: impl Into<String>, similarity: f64) -> Self {
        Self {
            artifact_id: artifact_id.into(),
            similarity,
        }
    }
}
