use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::SimilarityMatch;

/// Outcome of an originality audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AuditResult {
    /// 1.0 = no resemblance to anything indexed, 0.0 = near-duplicate.
    pub originality_score: f64,
    /// Closest artifacts, descending by similarity, at most five by default.
    pub matches: Vec<SimilarityMatch>,
}

impl AuditResult {
    /// Result for an audit with nothing to compare against.
    pub fn fully_original() -> Self {
        Self {
            originality_score: crate::constants::MAX_ORIGINALITY,
            matches: Vec::new(),
        }
    }

    /// The closest match, if any.
    pub fn top_match(&self) -> Option<&SimilarityMatch> {
        self.matches.first()
    }
}
