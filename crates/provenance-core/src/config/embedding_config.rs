use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Maximum entries in the in-memory embedding cache. 0 disables caching.
    pub l1_cache_size: u64,
    /// Idle time before a cached embedding is evicted (seconds).
    pub cache_ttl_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            l1_cache_size: defaults::DEFAULT_L1_CACHE_SIZE,
            cache_ttl_secs: defaults::DEFAULT_CACHE_TTL_SECS,
        }
    }
}
