//! L1 in-memory cache using moka.
//!
//! TinyLFU admission policy, per-entry idle TTL.
//! Keys are blake3 digests of media bytes; values are normalized vectors.

use std::time::Duration;

use moka::sync::Cache;

use provenance_core::Vector;

/// L1 in-memory embedding cache.
pub struct L1MemoryCache {
    cache: Cache<String, Vector>,
}

impl L1MemoryCache {
    /// Create a cache holding at most `max_entries`, evicting entries idle for `ttl`.
    pub fn new(max_entries: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(ttl)
            .build();

        Self { cache }
    }

    /// Get a vector by media digest.
    pub fn get(&self, digest: &str) -> Option<Vector> {
        self.cache.get(digest)
    }

    /// Insert a vector keyed by media digest.
    pub fn insert(&self, digest: String, vector: Vector) {
        self.cache.insert(digest, vector);
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}
