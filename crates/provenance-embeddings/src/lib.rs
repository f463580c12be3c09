//! # provenance-embeddings
//!
//! Wraps the external feature-extraction model behind [`EmbeddingEngine`]:
//! checks its output dimensionality, L2-normalizes, and caches vectors by
//! blake3 digest of the media bytes.

pub mod cache;
pub mod engine;

pub use engine::{media_digest, EmbeddedMedia, EmbeddingEngine};
