//! Property tests: ranking order, stability, and score monotonicity.

use proptest::prelude::*;

use provenance_core::{ArtifactEmbedding, SimilarityMatch, Vector};
use provenance_retrieval::{originality_from_similarity, rank, score};

fn raw_vector(dims: usize) -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-5.0f32..5.0, dims)
        .prop_filter("non-zero norm", |v| v.iter().any(|x| x.abs() > 1e-2))
}

proptest! {
    #[test]
    fn prop_self_similarity_is_one(raw in raw_vector(16)) {
        let v = Vector::new(raw).unwrap();
        let corpus = vec![ArtifactEmbedding::new("a", v.clone())];
        let ranked = rank(&v, &corpus).unwrap();
        prop_assert_eq!(ranked.len(), 1);
        prop_assert!((ranked[0].similarity - 1.0).abs() < 1e-5);
    }

    #[test]
    fn prop_ranking_sorted_and_complete(
        query in raw_vector(6),
        corpus in prop::collection::vec(raw_vector(6), 0..40)
    ) {
        let query = Vector::new(query).unwrap();
        let corpus: Vec<_> = corpus
            .into_iter()
            .enumerate()
            .map(|(i, raw)| ArtifactEmbedding::new(format!("e{i}"), Vector::new(raw).unwrap()))
            .collect();

        let ranked = rank(&query, &corpus).unwrap();
        prop_assert_eq!(ranked.len(), corpus.len());
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].similarity >= pair[1].similarity);
            if pair[0].similarity == pair[1].similarity {
                let a: usize = pair[0].artifact_id[1..].parse().unwrap();
                let b: usize = pair[1].artifact_id[1..].parse().unwrap();
                prop_assert!(a < b, "ties must keep corpus order");
            }
        }
    }

    #[test]
    fn prop_score_bounded_and_monotone(a in -1.5f64..1.5, b in -1.5f64..1.5) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let s_lo = originality_from_similarity(lo);
        let s_hi = originality_from_similarity(hi);
        prop_assert!((0.0..=1.0).contains(&s_lo));
        prop_assert!((0.0..=1.0).contains(&s_hi));
        prop_assert!(s_hi <= s_lo);
    }

    #[test]
    fn prop_score_keeps_prefix(sims in prop::collection::vec(-1.0f64..1.0, 0..20)) {
        let mut sorted = sims;
        sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
        let ranked: Vec<_> = sorted
            .iter()
            .enumerate()
            .map(|(i, s)| SimilarityMatch::new(format!("m{i}"), *s))
            .collect();

        let result = score(ranked.clone());
        prop_assert_eq!(result.matches.len(), ranked.len().min(5));
        prop_assert_eq!(&result.matches[..], &ranked[..result.matches.len()]);
    }
}
