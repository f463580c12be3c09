mod embedding_error;
mod persistence_error;
mod provenance_error;

pub use embedding_error::EmbeddingError;
pub use persistence_error::PersistenceError;
pub use provenance_error::{ProvenanceError, ProvenanceResult};
