//! Originality scorer: top similarity in, bounded score and capped match list out.

use provenance_core::constants::MAX_AUDIT_MATCHES;
use provenance_core::{AuditResult, SimilarityMatch};

/// Map the best similarity to an originality score in [0.0, 1.0].
///
/// `1 - min(1, top)`, clamped. Similarity drifting above 1.0 scores 0.0;
/// negative similarity (anti-correlated) scores 1.0.
pub fn originality_from_similarity(top: f64) -> f64 {
    (1.0 - top.min(1.0)).clamp(0.0, 1.0)
}

/// Score an already-sorted ranking, keeping the first five matches.
pub fn score(ranked: Vec<SimilarityMatch>) -> AuditResult {
    score_with_limit(ranked, MAX_AUDIT_MATCHES)
}

/// Score an already-sorted ranking, keeping the first `max_matches` entries.
///
/// Truncates, never re-sorts. An empty ranking is maximally original.
pub fn score_with_limit(mut ranked: Vec<SimilarityMatch>, max_matches: usize) -> AuditResult {
    let Some(top) = ranked.first().map(|m| m.similarity) else {
        return AuditResult::fully_original();
    };
    ranked.truncate(max_matches);
    AuditResult {
        originality_score: originality_from_similarity(top),
        matches: ranked,
    }
}
