mod artifact_embedding;
mod audit_result;
mod embedding_row;
mod similarity_match;

pub use artifact_embedding::{validate_artifact_id, ArtifactEmbedding};
pub use audit_result::AuditResult;
pub use embedding_row::EmbeddingRow;
pub use similarity_match::SimilarityMatch;
