//! Span definitions per operation: audit, index, embedding.

/// Create an audit span.
#[macro_export]
macro_rules! audit_span {
    ($corpus_size:expr) => {
        tracing::info_span!("provenance.audit", corpus_size = $corpus_size)
    };
}

/// Create an index span.
#[macro_export]
macro_rules! index_span {
    ($artifact_id:expr) => {
        tracing::info_span!("provenance.index", artifact_id = %$artifact_id)
    };
}

/// Create an embedding span.
#[macro_export]
macro_rules! embedding_span {
    ($embedder:expr, $bytes:expr) => {
        tracing::info_span!("provenance.embedding", embedder = %$embedder, bytes = $bytes)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const AUDIT: &str = "provenance.audit";
    pub const INDEX: &str = "provenance.index";
    pub const EMBEDDING: &str = "provenance.embedding";
}
