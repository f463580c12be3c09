//! # provenance-core
//!
//! Foundation crate for the clip-provenance originality auditor.
//! Defines the vector and record types, traits for external collaborators,
//! errors, config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod vector;

// Re-export the most commonly used types at the crate root.
pub use config::ProvenanceConfig;
pub use errors::{ProvenanceError, ProvenanceResult};
pub use models::{ArtifactEmbedding, AuditResult, EmbeddingRow, SimilarityMatch};
pub use vector::{IntoVector, Vector};
