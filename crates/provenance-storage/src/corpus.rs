//! Immutable corpus published by the store, and the snapshot handle readers hold.

use std::collections::HashMap;
use std::sync::Arc;

use provenance_core::ArtifactEmbedding;

/// One published generation of the store's contents.
#[derive(Debug, Clone, Default)]
pub(crate) struct Corpus {
    /// Entries in first-insertion order. Replacements keep their slot.
    entries: Vec<Arc<ArtifactEmbedding>>,
    /// Shared keys, so cloning a generation never copies id strings.
    positions: HashMap<Arc<str>, usize>,
    dimensions: Option<usize>,
}

impl Corpus {
    pub(crate) fn with_dimensions(dimensions: Option<usize>) -> Self {
        Self {
            dimensions,
            ..Self::default()
        }
    }

    pub(crate) fn dimensions(&self) -> Option<usize> {
        self.dimensions
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn get(&self, artifact_id: &str) -> Option<&Arc<ArtifactEmbedding>> {
        self.positions.get(artifact_id).map(|&idx| &self.entries[idx])
    }

    /// Insert or replace. Returns true when an existing entry was replaced.
    ///
    /// Dimensionality must already have been checked by the caller.
    pub(crate) fn insert(&mut self, entry: ArtifactEmbedding) -> bool {
        self.dimensions.get_or_insert(entry.dimensions());
        let entry = Arc::new(entry);
        match self.positions.get(entry.artifact_id.as_str()) {
            Some(&idx) => {
                self.entries[idx] = entry;
                true
            }
            None => {
                self.positions
                    .insert(Arc::from(entry.artifact_id.as_str()), self.entries.len());
                self.entries.push(entry);
                false
            }
        }
    }

    pub(crate) fn entries(&self) -> &[Arc<ArtifactEmbedding>] {
        &self.entries
    }
}

/// A point-in-time, immutable view of the store.
///
/// Holding a snapshot never blocks writers; later upserts publish a new corpus
/// and leave this one untouched.
#[derive(Debug, Clone)]
pub struct Snapshot {
    corpus: Arc<Corpus>,
}

impl Snapshot {
    pub(crate) fn new(corpus: Arc<Corpus>) -> Self {
        Self { corpus }
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Arc<ArtifactEmbedding>] {
        self.corpus.entries()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArtifactEmbedding> {
        self.corpus.entries().iter().map(|e| e.as_ref())
    }

    pub fn get(&self, artifact_id: &str) -> Option<&ArtifactEmbedding> {
        self.corpus.get(artifact_id).map(|e| e.as_ref())
    }

    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dimensionality fixed for this corpus, if any.
    pub fn dimensions(&self) -> Option<usize> {
        self.corpus.dimensions()
    }
}
