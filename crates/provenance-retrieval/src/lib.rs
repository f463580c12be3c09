//! # provenance-retrieval
//!
//! Similarity ranking and originality scoring over an immutable corpus.
//! Nothing here touches the store; callers hand in a snapshot.

pub mod engine;
pub mod ranking;

pub use engine::RetrievalEngine;
pub use ranking::scorer::{originality_from_similarity, score, score_with_limit};
pub use ranking::similarity::{rank, rank_with_threshold};
