//! AuditEngine: the main entry point for originality audits.
//!
//! Coordinates the embedding store, similarity ranking, scoring, the optional
//! media embedder, and the optional persistence layer.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info, warn};

use provenance_core::config::ProvenanceConfig;
use provenance_core::errors::{EmbeddingError, ProvenanceError, ProvenanceResult};
use provenance_core::models::validate_artifact_id;
use provenance_core::traits::{IEmbeddingPersistence, IMediaEmbedder};
use provenance_core::{ArtifactEmbedding, AuditResult, EmbeddingRow, IntoVector, Vector};
use provenance_embeddings::{EmbeddedMedia, EmbeddingEngine};
use provenance_observability::health::HealthInputs;
use provenance_observability::{audit_span, embedding_span, index_span};
use provenance_observability::{AuditMetrics, HealthReport, MetricsSnapshot};
use provenance_retrieval::RetrievalEngine;
use provenance_storage::{EmbeddingStore, Snapshot};

/// Stateless across calls apart from the store's corpus and counters.
/// Share it behind an `Arc`; every method takes `&self`.
pub struct AuditEngine {
    store: Arc<EmbeddingStore>,
    retrieval: RetrievalEngine,
    embeddings: Option<EmbeddingEngine>,
    persistence: Option<Arc<dyn IEmbeddingPersistence>>,
    metrics: AuditMetrics,
    /// Serializes check, persist and upsert, and covers `hydrate`, so
    /// persistence never holds a row the store then rejects or overwrites.
    index_lock: Mutex<()>,
    config: ProvenanceConfig,
}

impl AuditEngine {
    /// Create an engine over a fresh store, in vector-only mode.
    pub fn new(config: ProvenanceConfig) -> Self {
        let store = Arc::new(EmbeddingStore::new(config.store.dimensions));
        Self::with_store(config, store)
    }

    /// Create an engine over an existing store.
    pub fn with_store(config: ProvenanceConfig, store: Arc<EmbeddingStore>) -> Self {
        info!(
            dims = ?store.dimensions(),
            corpus = store.len(),
            max_matches = config.ranking.max_matches,
            "AuditEngine initialized"
        );
        Self {
            store,
            retrieval: RetrievalEngine::new(config.ranking.clone()),
            embeddings: None,
            persistence: None,
            metrics: AuditMetrics::new(),
            index_lock: Mutex::new(()),
            config,
        }
    }

    /// Attach the external feature-extraction model, enabling media operations.
    pub fn with_embedder(mut self, embedder: Arc<dyn IMediaEmbedder>) -> Self {
        self.embeddings = Some(EmbeddingEngine::new(embedder, &self.config.embedding));
        self
    }

    /// Attach a persistence layer; every index call writes through to it.
    pub fn with_persistence(mut self, persistence: Arc<dyn IEmbeddingPersistence>) -> Self {
        self.persistence = Some(persistence);
        self
    }

    /// Load every persisted row into the store. Returns the number of rows loaded.
    ///
    /// Without a persistence layer this is a no-op. Runs under the index
    /// lock, so an `index` call cannot land between the load and the upsert.
    pub fn hydrate(&self) -> ProvenanceResult<usize> {
        let Some(persistence) = &self.persistence else {
            return Ok(0);
        };
        let _guard = self.index_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let rows = persistence.load_all()?;
        let loaded = self.store.load_rows(rows)?;
        info!(loaded, corpus = self.store.len(), "store hydrated from persistence");
        Ok(loaded)
    }

    /// Make an artifact searchable: insert or replace its embedding.
    ///
    /// With persistence attached, the row is written there first; if that
    /// fails the store is left unchanged.
    ///
    /// # Errors
    /// `InvalidArtifactId`, `InvalidVector`, `DimensionMismatch`, or a
    /// persistence error.
    pub fn index(
        &self,
        artifact_id: &str,
        vector: impl IntoVector,
        metadata: Option<serde_json::Value>,
    ) -> ProvenanceResult<()> {
        let _span = index_span!(artifact_id).entered();
        self.index_inner(artifact_id, vector, metadata)
            .inspect(|_| self.metrics.record_index())
            .inspect_err(|e| {
                self.metrics.record_index_failure();
                warn!(artifact_id, error = %e, "index failed");
            })
    }

    fn index_inner(
        &self,
        artifact_id: &str,
        vector: impl IntoVector,
        metadata: Option<serde_json::Value>,
    ) -> ProvenanceResult<()> {
        validate_artifact_id(artifact_id)?;
        let vector = vector.into_vector()?;

        let _guard = self.index_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.store.check_dimensions(vector.dimensions())?;
        let entry = ArtifactEmbedding::new(artifact_id, vector).with_metadata(metadata);
        if let Some(persistence) = &self.persistence {
            persistence.store_embedding(&EmbeddingRow::from(&entry))?;
        }
        self.store.upsert_entry(entry)?;
        debug!(artifact_id, corpus = self.store.len(), "artifact indexed");
        Ok(())
    }

    /// Score a query vector's originality against everything indexed.
    ///
    /// An empty corpus is fully original. Upserts racing with this call may
    /// or may not be included; the ranking always sees one consistent snapshot.
    ///
    /// # Errors
    /// `InvalidVector` for a bad query, `DimensionMismatch` if it disagrees
    /// with the corpus.
    pub fn audit(&self, query: impl IntoVector) -> ProvenanceResult<AuditResult> {
        let snapshot = self.store.snapshot();
        let _span = audit_span!(snapshot.len()).entered();
        self.audit_snapshot(query, &snapshot)
            .inspect(|result| {
                self.metrics
                    .record_audit(result.originality_score, snapshot.is_empty());
            })
            .inspect_err(|e| {
                self.metrics.record_audit_failure();
                warn!(error = %e, "audit failed");
            })
    }

    fn audit_snapshot(
        &self,
        query: impl IntoVector,
        snapshot: &Snapshot,
    ) -> ProvenanceResult<AuditResult> {
        let query = query.into_vector()?;
        if let Some(expected) = snapshot.dimensions() {
            if expected != query.dimensions() {
                return Err(ProvenanceError::DimensionMismatch {
                    expected,
                    actual: query.dimensions(),
                });
            }
        }
        let result = self.retrieval.evaluate(&query, snapshot.entries())?;
        debug!(
            corpus = snapshot.len(),
            originality = result.originality_score,
            top = ?result.top_match().map(|m| m.artifact_id.as_str()),
            "audit complete"
        );
        Ok(result)
    }

    /// Embed media bytes and, when `artifact_id` is given, index the result.
    /// Returns the normalized vector.
    pub fn embed_media(
        &self,
        media: &[u8],
        artifact_id: Option<&str>,
        metadata: Option<serde_json::Value>,
    ) -> ProvenanceResult<Vector> {
        let embedded = self.embed(media)?;
        if let Some(id) = artifact_id {
            self.index(id, &embedded.vector, metadata)?;
        }
        Ok(embedded.vector)
    }

    /// Embed and index media bytes. Without an explicit id, the artifact is
    /// keyed by the blake3 digest of its bytes. Returns the id used.
    pub fn index_media(
        &self,
        media: &[u8],
        artifact_id: Option<&str>,
        metadata: Option<serde_json::Value>,
    ) -> ProvenanceResult<String> {
        let embedded = self.embed(media)?;
        let id = artifact_id
            .map(str::to_string)
            .unwrap_or_else(|| embedded.digest.clone());
        self.index(&id, embedded.vector, metadata)?;
        Ok(id)
    }

    /// Embed media bytes and audit them.
    pub fn audit_media(&self, media: &[u8]) -> ProvenanceResult<AuditResult> {
        let embedded = self.embed(media)?;
        self.audit(embedded.vector)
    }

    fn embed(&self, media: &[u8]) -> ProvenanceResult<EmbeddedMedia> {
        let Some(embeddings) = &self.embeddings else {
            return Err(EmbeddingError::Unavailable {
                provider: "none".to_string(),
            }
            .into());
        };
        let _span = embedding_span!(embeddings.embedder_name(), media.len()).entered();
        let embedded = embeddings.embed_media(media)?;
        self.metrics.record_embedding(embedded.cached);
        Ok(embedded)
    }

    /// Look up an indexed artifact.
    ///
    /// # Errors
    /// `UnknownArtifact` if nothing is indexed under `artifact_id`.
    pub fn artifact(&self, artifact_id: &str) -> ProvenanceResult<ArtifactEmbedding> {
        self.store
            .fetch(artifact_id)
            .map(|entry| ArtifactEmbedding::clone(&entry))
    }

    /// Point-in-time view of the corpus.
    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    pub fn store(&self) -> &Arc<EmbeddingStore> {
        &self.store
    }

    pub fn config(&self) -> &ProvenanceConfig {
        &self.config
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    pub fn health(&self) -> HealthReport {
        let snapshot = self.store.snapshot();
        HealthReport::build(HealthInputs {
            corpus_size: snapshot.len(),
            dimensions: snapshot.dimensions(),
            embedder: self
                .embeddings
                .as_ref()
                .map(|e| (e.embedder_name().to_string(), e.is_available())),
            metrics: self.metrics.snapshot(),
        })
    }
}
