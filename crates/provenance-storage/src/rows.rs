//! Conversion between the store and the flat row format external
//! persistence layers serialize.

use tracing::info;

use provenance_core::errors::ProvenanceResult;
use provenance_core::EmbeddingRow;

use crate::store::EmbeddingStore;

impl EmbeddingStore {
    /// Export every entry as a row, in insertion order.
    pub fn to_rows(&self) -> Vec<EmbeddingRow> {
        self.snapshot().iter().map(EmbeddingRow::from).collect()
    }

    /// Build a store from persisted rows.
    ///
    /// # Errors
    /// Fails on the first corrupt row or dimensionality conflict.
    pub fn from_rows(rows: Vec<EmbeddingRow>, dimensions: Option<usize>) -> ProvenanceResult<Self> {
        let store = Self::new(dimensions);
        store.load_rows(rows)?;
        Ok(store)
    }

    /// Validate and upsert a batch of persisted rows. All-or-nothing.
    ///
    /// Later rows with a repeated id replace earlier ones.
    pub fn load_rows(&self, rows: Vec<EmbeddingRow>) -> ProvenanceResult<usize> {
        let entries = rows
            .into_iter()
            .map(EmbeddingRow::into_embedding)
            .collect::<ProvenanceResult<Vec<_>>>()?;
        let count = self.upsert_all(entries)?;
        info!(rows = count, corpus = self.len(), "loaded persisted embeddings");
        Ok(count)
    }
}
