//! # provenance-storage
//!
//! The embedding store: sole owner of the indexed corpus.
//! Writers are serialized and publish a fresh corpus on every upsert;
//! readers take a [`Snapshot`] (an `Arc` clone) and never observe a partial write.

mod corpus;
mod rows;
mod store;

pub use corpus::Snapshot;
pub use store::EmbeddingStore;
