//! RetrievalEngine: rank then score, with configured limits.

use std::borrow::Borrow;

use provenance_core::config::RankingConfig;
use provenance_core::errors::ProvenanceResult;
use provenance_core::{ArtifactEmbedding, AuditResult, SimilarityMatch, Vector};

use crate::ranking::{scorer, similarity};

/// Holds ranking configuration; stateless across calls.
#[derive(Debug, Clone, Default)]
pub struct RetrievalEngine {
    config: RankingConfig,
}

impl RetrievalEngine {
    pub fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Full ranking of `corpus` against `query`.
    pub fn rank<E>(&self, query: &Vector, corpus: &[E]) -> ProvenanceResult<Vec<SimilarityMatch>>
    where
        E: Borrow<ArtifactEmbedding> + Sync,
    {
        similarity::rank_with_threshold(query, corpus, self.config.parallel_threshold)
    }

    /// Score an already-sorted ranking.
    pub fn score(&self, ranked: Vec<SimilarityMatch>) -> AuditResult {
        scorer::score_with_limit(ranked, self.config.max_matches)
    }

    /// Rank and score in one pass.
    pub fn evaluate<E>(&self, query: &Vector, corpus: &[E]) -> ProvenanceResult<AuditResult>
    where
        E: Borrow<ArtifactEmbedding> + Sync,
    {
        let ranked = self.rank(query, corpus)?;
        Ok(self.score(ranked))
    }
}
