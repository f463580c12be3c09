//! EmbeddingEngine: the single path from raw media bytes to a stored-ready vector.
//!
//! Checks the embedder's availability and output shape, normalizes, and
//! writes through to the L1 cache.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use provenance_core::config::EmbeddingConfig;
use provenance_core::errors::{EmbeddingError, ProvenanceError, ProvenanceResult};
use provenance_core::traits::IMediaEmbedder;
use provenance_core::Vector;

use crate::cache::L1MemoryCache;

/// Output of embedding one media artifact.
#[derive(Debug, Clone)]
pub struct EmbeddedMedia {
    /// Normalized embedding.
    pub vector: Vector,
    /// blake3 hex digest of the media bytes.
    pub digest: String,
    /// Whether the vector came from the cache.
    pub cached: bool,
}

/// blake3 hex digest of media bytes. Used as cache key and default artifact id.
pub fn media_digest(media: &[u8]) -> String {
    blake3::hash(media).to_hex().to_string()
}

/// Wraps an external [`IMediaEmbedder`] with validation and caching.
pub struct EmbeddingEngine {
    embedder: Arc<dyn IMediaEmbedder>,
    cache: Option<L1MemoryCache>,
}

impl EmbeddingEngine {
    /// Create an engine. `l1_cache_size = 0` disables caching.
    pub fn new(embedder: Arc<dyn IMediaEmbedder>, config: &EmbeddingConfig) -> Self {
        let cache = (config.l1_cache_size > 0).then(|| {
            L1MemoryCache::new(
                config.l1_cache_size,
                Duration::from_secs(config.cache_ttl_secs),
            )
        });

        info!(
            embedder = embedder.name(),
            dims = embedder.dimensions(),
            cache_size = config.l1_cache_size,
            "EmbeddingEngine initialized"
        );

        Self { embedder, cache }
    }

    /// Embed media bytes into a normalized vector.
    ///
    /// # Errors
    /// - `EmbeddingError::EmptyMedia` for zero-length input.
    /// - `EmbeddingError::Unavailable` if the embedder reports unavailable.
    /// - `EmbeddingError::DimensionMismatch` if the embedder's output length
    ///   disagrees with its declared dimensionality.
    /// - `EmbeddingError::ProviderFailed` if the output cannot be normalized.
    /// - Any error the embedder itself returns.
    pub fn embed_media(&self, media: &[u8]) -> ProvenanceResult<EmbeddedMedia> {
        if media.is_empty() {
            return Err(EmbeddingError::EmptyMedia.into());
        }

        let digest = media_digest(media);
        if let Some(vector) = self.cache.as_ref().and_then(|c| c.get(&digest)) {
            debug!(digest = %digest, "cache hit for media embedding");
            return Ok(EmbeddedMedia {
                vector,
                digest,
                cached: true,
            });
        }

        if !self.embedder.is_available() {
            return Err(EmbeddingError::Unavailable {
                provider: self.embedder.name().to_string(),
            }
            .into());
        }

        let raw = self.embedder.embed(media).inspect_err(|e| {
            warn!(embedder = self.embedder.name(), error = %e, "embedder failed");
        })?;

        let expected = self.embedder.dimensions();
        if raw.len() != expected {
            return Err(EmbeddingError::DimensionMismatch {
                expected,
                actual: raw.len(),
            }
            .into());
        }

        let vector = Vector::new(raw).map_err(|e| match e {
            ProvenanceError::InvalidVector { reason } => {
                ProvenanceError::from(EmbeddingError::ProviderFailed {
                    provider: self.embedder.name().to_string(),
                    reason,
                })
            }
            other => other,
        })?;

        if let Some(cache) = &self.cache {
            cache.insert(digest.clone(), vector.clone());
        }
        debug!(digest = %digest, dims = expected, "embedded media");

        Ok(EmbeddedMedia {
            vector,
            digest,
            cached: false,
        })
    }

    /// Name of the wrapped embedder.
    pub fn embedder_name(&self) -> &str {
        self.embedder.name()
    }

    /// Dimensionality the wrapped embedder produces.
    pub fn dimensions(&self) -> usize {
        self.embedder.dimensions()
    }

    pub fn is_available(&self) -> bool {
        self.embedder.is_available()
    }

    /// Drop every cached vector.
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }
}
