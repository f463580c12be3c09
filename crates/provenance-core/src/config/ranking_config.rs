use serde::{Deserialize, Serialize};

use super::defaults;

/// Similarity ranking and scoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Maximum matches reported per audit. Default: 5.
    pub max_matches: usize,
    /// Corpus size from which ranking runs on the rayon pool. Default: 2048.
    pub parallel_threshold: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            max_matches: defaults::DEFAULT_MAX_MATCHES,
            parallel_threshold: defaults::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}
