//! EmbeddingStore: owns the corpus and hands out snapshots.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::debug;

use provenance_core::errors::{ProvenanceError, ProvenanceResult};
use provenance_core::models::validate_artifact_id;
use provenance_core::{ArtifactEmbedding, IntoVector};

use crate::corpus::{Corpus, Snapshot};

/// Thread-safe, in-memory mapping from artifact id to embedding and metadata.
///
/// Upserts run one at a time behind `writer`, build the next corpus off to the
/// side, and publish it with a single pointer swap. The `RwLock` is only ever
/// held long enough to clone or replace an `Arc`, so readers never wait on a
/// writer's copy.
#[derive(Debug)]
pub struct EmbeddingStore {
    current: RwLock<Arc<Corpus>>,
    writer: Mutex<()>,
}

impl EmbeddingStore {
    /// Create an empty store. `dimensions` pre-fixes the corpus dimensionality;
    /// otherwise the first successful upsert fixes it.
    pub fn new(dimensions: Option<usize>) -> Self {
        Self {
            current: RwLock::new(Arc::new(Corpus::with_dimensions(dimensions))),
            writer: Mutex::new(()),
        }
    }

    /// Insert or replace the entry for `artifact_id`.
    ///
    /// Either fully succeeds or leaves the store untouched.
    ///
    /// # Errors
    /// - `InvalidArtifactId` if the id is blank.
    /// - `InvalidVector` if the vector is empty, non-finite, or zero.
    /// - `DimensionMismatch` if it disagrees with the corpus dimensionality.
    pub fn upsert(
        &self,
        artifact_id: &str,
        vector: impl IntoVector,
        metadata: Option<serde_json::Value>,
    ) -> ProvenanceResult<()> {
        validate_artifact_id(artifact_id)?;
        let vector = vector.into_vector()?;
        self.upsert_entry(ArtifactEmbedding::new(artifact_id, vector).with_metadata(metadata))
    }

    /// Insert or replace a fully built entry, keeping its timestamp.
    pub fn upsert_entry(&self, entry: ArtifactEmbedding) -> ProvenanceResult<()> {
        validate_artifact_id(&entry.artifact_id)?;

        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let current = self.load();
        check_dimensions(current.dimensions(), entry.dimensions())?;

        let artifact_id = entry.artifact_id.clone();
        let dims = entry.dimensions();
        let mut next = Corpus::clone(&current);
        let replaced = next.insert(entry);
        self.publish(next);

        debug!(artifact_id = %artifact_id, dims, replaced, "embedding upserted");
        Ok(())
    }

    /// Insert or replace a batch under one writer turn, publishing once.
    ///
    /// All entries are checked before anything is published; on error the
    /// store is unchanged.
    pub fn upsert_all(&self, entries: Vec<ArtifactEmbedding>) -> ProvenanceResult<usize> {
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let current = self.load();

        let mut next = Corpus::clone(&current);
        let count = entries.len();
        for entry in entries {
            validate_artifact_id(&entry.artifact_id)?;
            check_dimensions(next.dimensions(), entry.dimensions())?;
            next.insert(entry);
        }
        self.publish(next);

        debug!(count, "embedding batch upserted");
        Ok(count)
    }

    /// Point-in-time view of every entry, in insertion order.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.load())
    }

    /// Look up an entry. Absence means "unknown artifact", not an error.
    pub fn get(&self, artifact_id: &str) -> Option<Arc<ArtifactEmbedding>> {
        self.load().get(artifact_id).cloned()
    }

    /// Look up an entry, failing if it is unknown.
    ///
    /// # Errors
    /// Returns `UnknownArtifact` if nothing is stored under `artifact_id`.
    pub fn fetch(&self, artifact_id: &str) -> ProvenanceResult<Arc<ArtifactEmbedding>> {
        self.get(artifact_id)
            .ok_or_else(|| ProvenanceError::UnknownArtifact {
                id: artifact_id.to_string(),
            })
    }

    pub fn contains(&self, artifact_id: &str) -> bool {
        self.load().get(artifact_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fixed dimensionality, once configured or established.
    pub fn dimensions(&self) -> Option<usize> {
        self.load().dimensions()
    }

    /// Check a vector's dimensionality against the corpus without storing it.
    pub fn check_dimensions(&self, dims: usize) -> ProvenanceResult<()> {
        check_dimensions(self.dimensions(), dims)
    }

    fn load(&self) -> Arc<Corpus> {
        // The corpus is replaced whole, so a poisoned lock still guards a
        // consistent generation.
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn publish(&self, next: Corpus) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(next);
    }
}

impl Default for EmbeddingStore {
    fn default() -> Self {
        Self::new(None)
    }
}

fn check_dimensions(fixed: Option<usize>, actual: usize) -> ProvenanceResult<()> {
    match fixed {
        Some(expected) if expected != actual => {
            Err(ProvenanceError::DimensionMismatch { expected, actual })
        }
        _ => Ok(()),
    }
}
