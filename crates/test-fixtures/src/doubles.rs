//! In-process stand-ins for the external embedder and persistence layer.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use provenance_core::errors::{EmbeddingError, PersistenceError, ProvenanceResult};
use provenance_core::traits::{IEmbeddingPersistence, IMediaEmbedder};
use provenance_core::EmbeddingRow;

/// Embedder that returns pre-registered vectors for known media bytes.
pub struct LookupEmbedder {
    dims: usize,
    table: HashMap<Vec<u8>, Vec<f32>>,
    calls: AtomicUsize,
    available: AtomicBool,
}

impl LookupEmbedder {
    pub fn new(dims: usize) -> Self {
        Self {
            dims,
            table: HashMap::new(),
            calls: AtomicUsize::new(0),
            available: AtomicBool::new(true),
        }
    }

    /// Register the vector returned for `media`.
    pub fn with(mut self, media: &[u8], vector: Vec<f32>) -> Self {
        self.table.insert(media.to_vec(), vector);
        self
    }

    /// Number of times `embed` reached the model.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }
}

impl IMediaEmbedder for LookupEmbedder {
    fn embed(&self, media: &[u8]) -> ProvenanceResult<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.table.get(media).cloned().ok_or_else(|| {
            EmbeddingError::ProviderFailed {
                provider: self.name().to_string(),
                reason: "unrecognized media".to_string(),
            }
            .into()
        })
    }

    fn dimensions(&self) -> usize {
        self.dims
    }

    fn name(&self) -> &str {
        "lookup"
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }
}

/// Deterministic embedder deriving components from the blake3 XOF of the media.
/// Distinct inputs give (almost surely) distinct directions.
pub struct DigestEmbedder {
    dims: usize,
}

impl DigestEmbedder {
    pub fn new(dims: usize) -> Self {
        Self { dims }
    }
}

impl IMediaEmbedder for DigestEmbedder {
    fn embed(&self, media: &[u8]) -> ProvenanceResult<Vec<f32>> {
        let mut bytes = vec![0u8; self.dims * 4];
        blake3::Hasher::new()
            .update(media)
            .finalize_xof()
            .fill(&mut bytes);
        Ok(bytes
            .chunks_exact(4)
            .map(|c| {
                let n = u32::from_le_bytes([c[0], c[1], c[2], c[3]]);
                (n as f64 / u32::MAX as f64 * 2.0 - 1.0) as f32
            })
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.dims
    }

    fn name(&self) -> &str {
        "digest"
    }
}

/// Persistence layer backed by a vector of rows, insert-or-replace by id.
#[derive(Default)]
pub struct MemoryPersistence {
    rows: Mutex<Vec<EmbeddingRow>>,
    fail_writes: AtomicBool,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with pre-existing rows, as if written by an earlier process.
    pub fn with_rows(rows: Vec<EmbeddingRow>) -> Self {
        Self {
            rows: Mutex::new(rows),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make subsequent writes fail.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn rows(&self) -> Vec<EmbeddingRow> {
        self.rows.lock().unwrap().clone()
    }
}

impl IEmbeddingPersistence for MemoryPersistence {
    fn store_embedding(&self, row: &EmbeddingRow) -> ProvenanceResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PersistenceError::WriteFailed {
                artifact_id: row.artifact_id.clone(),
                reason: "injected failure".to_string(),
            }
            .into());
        }
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|r| r.artifact_id == row.artifact_id) {
            Some(existing) => *existing = row.clone(),
            None => rows.push(row.clone()),
        }
        Ok(())
    }

    fn load_all(&self) -> ProvenanceResult<Vec<EmbeddingRow>> {
        Ok(self.rows())
    }
}
