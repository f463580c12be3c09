//! Exact cosine ranking: a linear scan over every corpus entry.
//!
//! Vectors are unit-normalized on construction, so cosine similarity is the
//! dot product. There is no pruning; every entry is compared.

use std::borrow::Borrow;
use std::cmp::Ordering;

use rayon::prelude::*;
use tracing::trace;

use provenance_core::constants::DEFAULT_PARALLEL_THRESHOLD;
use provenance_core::errors::{ProvenanceError, ProvenanceResult};
use provenance_core::{ArtifactEmbedding, SimilarityMatch, Vector};

/// Rank `corpus` against `query`, most similar first.
///
/// Ties keep corpus order. An empty corpus yields an empty ranking.
///
/// # Errors
/// Returns `DimensionMismatch` as soon as any entry disagrees with the query's
/// dimensionality; no partial ranking is returned.
pub fn rank<E>(query: &Vector, corpus: &[E]) -> ProvenanceResult<Vec<SimilarityMatch>>
where
    E: Borrow<ArtifactEmbedding> + Sync,
{
    rank_with_threshold(query, corpus, DEFAULT_PARALLEL_THRESHOLD)
}

/// [`rank`], splitting the scan across the rayon pool once the corpus holds at
/// least `parallel_threshold` entries. The output is identical either way.
pub fn rank_with_threshold<E>(
    query: &Vector,
    corpus: &[E],
    parallel_threshold: usize,
) -> ProvenanceResult<Vec<SimilarityMatch>>
where
    E: Borrow<ArtifactEmbedding> + Sync,
{
    if corpus.is_empty() {
        return Ok(Vec::new());
    }

    let compare = |entry: &E| -> ProvenanceResult<SimilarityMatch> {
        let entry = entry.borrow();
        if entry.dimensions() != query.dimensions() {
            return Err(ProvenanceError::DimensionMismatch {
                expected: entry.dimensions(),
                actual: query.dimensions(),
            });
        }
        let similarity = query.cosine(&entry.vector)?;
        Ok(SimilarityMatch::new(entry.artifact_id.clone(), similarity))
    };

    let parallel = corpus.len() >= parallel_threshold;
    let mut ranked = if parallel {
        corpus
            .par_iter()
            .map(compare)
            .collect::<ProvenanceResult<Vec<_>>>()?
    } else {
        corpus
            .iter()
            .map(compare)
            .collect::<ProvenanceResult<Vec<_>>>()?
    };

    // Stable sort: equal similarities stay in corpus order.
    ranked.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });

    trace!(corpus = corpus.len(), parallel, "ranked corpus");
    Ok(ranked)
}
