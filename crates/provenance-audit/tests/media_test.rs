//! Media operations through an attached embedder, and write-through persistence.

use std::sync::Arc;

use provenance_audit::AuditEngine;
use provenance_core::config::ProvenanceConfig;
use provenance_core::errors::{EmbeddingError, PersistenceError};
use provenance_core::{EmbeddingRow, ProvenanceError};
use provenance_embeddings::media_digest;
use provenance_observability::HealthStatus;
use test_fixtures::{axis, DigestEmbedder, LookupEmbedder, MemoryPersistence};

fn lookup() -> Arc<LookupEmbedder> {
    Arc::new(
        LookupEmbedder::new(3)
            .with(b"sunset.png", vec![1.0, 0.0, 0.0])
            .with(b"sunset-crop.png", vec![0.9, 0.1, 0.0])
            .with(b"forest.png", vec![0.0, 0.0, 5.0]),
    )
}

#[test]
fn media_operations_require_an_embedder() {
    let engine = AuditEngine::new(ProvenanceConfig::default());
    let err = engine.audit_media(b"sunset.png").unwrap_err();
    assert!(matches!(
        err,
        ProvenanceError::EmbeddingError(EmbeddingError::Unavailable { .. })
    ));
    assert_eq!(engine.health().status, HealthStatus::Degraded);
}

#[test]
fn index_then_audit_media() {
    let engine = AuditEngine::new(ProvenanceConfig::default()).with_embedder(lookup());
    engine
        .index_media(b"sunset.png", Some("sunset"), None)
        .unwrap();
    engine
        .index_media(b"forest.png", Some("forest"), None)
        .unwrap();

    let result = engine.audit_media(b"sunset-crop.png").unwrap();
    assert_eq!(result.top_match().unwrap().artifact_id, "sunset");
    assert!(result.originality_score > 0.0 && result.originality_score < 0.05);
    assert_eq!(result.matches[1].artifact_id, "forest");
}

#[test]
fn index_media_defaults_id_to_digest() {
    let engine = AuditEngine::new(ProvenanceConfig::default()).with_embedder(lookup());
    let id = engine.index_media(b"forest.png", None, None).unwrap();
    assert_eq!(id, media_digest(b"forest.png"));
    assert!(engine.store().contains(&id));
}

#[test]
fn embed_media_returns_normalized_vector_and_optionally_indexes() {
    let engine = AuditEngine::new(ProvenanceConfig::default()).with_embedder(lookup());

    let v = engine.embed_media(b"forest.png", None, None).unwrap();
    assert_eq!(v.as_slice(), axis(3, 2).as_slice());
    assert!(engine.snapshot().is_empty());

    engine
        .embed_media(b"forest.png", Some("forest"), Some(serde_json::json!({"scene": "woods"})))
        .unwrap();
    assert_eq!(engine.artifact("forest").unwrap().metadata["scene"], "woods");
}

#[test]
fn repeated_media_is_served_from_cache() {
    let embedder = lookup();
    let engine = AuditEngine::new(ProvenanceConfig::default()).with_embedder(embedder.clone());
    engine.audit_media(b"sunset.png").unwrap();
    engine.audit_media(b"sunset.png").unwrap();

    assert_eq!(embedder.calls(), 1);
    let m = engine.metrics();
    assert_eq!(m.cache_hits, 1);
    assert_eq!(m.cache_misses, 1);
}

#[test]
fn unavailable_embedder_reports_unhealthy() {
    let embedder = lookup();
    let engine = AuditEngine::new(ProvenanceConfig::default()).with_embedder(embedder.clone());
    assert_eq!(engine.health().status, HealthStatus::Healthy);

    embedder.set_available(false);
    assert_eq!(engine.health().status, HealthStatus::Unhealthy);
    assert!(engine.audit_media(b"sunset.png").is_err());
}

#[test]
fn digest_embedder_separates_distinct_media() {
    let engine =
        AuditEngine::new(ProvenanceConfig::default()).with_embedder(Arc::new(DigestEmbedder::new(64)));
    engine.index_media(b"clip-a", Some("a"), None).unwrap();

    let same = engine.audit_media(b"clip-a").unwrap();
    assert!(same.originality_score < 1e-5);

    let other = engine.audit_media(b"clip-b").unwrap();
    assert!(other.originality_score > 0.5);
}

#[test]
fn index_writes_through_to_persistence() {
    let persistence = Arc::new(MemoryPersistence::new());
    let engine = AuditEngine::new(ProvenanceConfig::default()).with_persistence(persistence.clone());

    engine.index("a", vec![1.0, 0.0], None).unwrap();
    engine
        .index("a", vec![0.0, 2.0], Some(serde_json::json!({"rev": 2})))
        .unwrap();

    let rows = persistence.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].vector, vec![0.0, 1.0]);
    assert_eq!(rows[0].metadata["rev"], 2);
}

#[test]
fn persistence_failure_leaves_store_unchanged() {
    let persistence = Arc::new(MemoryPersistence::new());
    let engine = AuditEngine::new(ProvenanceConfig::default()).with_persistence(persistence.clone());
    engine.index("a", vec![1.0, 0.0], None).unwrap();

    persistence.fail_writes(true);
    let err = engine.index("a", vec![0.0, 1.0], None).unwrap_err();
    assert!(matches!(
        err,
        ProvenanceError::PersistenceError(PersistenceError::WriteFailed { .. })
    ));
    assert_eq!(engine.artifact("a").unwrap().vector.as_slice(), &[1.0, 0.0]);
}

#[test]
fn invalid_vector_never_reaches_persistence() {
    let persistence = Arc::new(MemoryPersistence::new());
    let engine = AuditEngine::new(ProvenanceConfig::default()).with_persistence(persistence.clone());
    engine.index("a", vec![1.0, 0.0], None).unwrap();

    assert!(engine.index("b", vec![1.0, 0.0, 0.0], None).is_err());
    assert!(engine.index("c", Vec::<f32>::new(), None).is_err());
    assert_eq!(persistence.rows().len(), 1);
}

#[test]
fn hydrate_restores_persisted_corpus() {
    let rows = vec![
        EmbeddingRow {
            artifact_id: "x".into(),
            vector: vec![1.0, 0.0],
            metadata: serde_json::json!({"wallet": "0xabc"}),
            indexed_at: chrono_now(),
        },
        EmbeddingRow {
            artifact_id: "y".into(),
            vector: vec![0.0, 1.0],
            metadata: serde_json::Value::Null,
            indexed_at: chrono_now(),
        },
    ];
    let persistence = Arc::new(MemoryPersistence::with_rows(rows));
    let engine = AuditEngine::new(ProvenanceConfig::default()).with_persistence(persistence);

    assert_eq!(engine.hydrate().unwrap(), 2);
    let result = engine.audit(vec![0.0, 1.0]).unwrap();
    assert_eq!(result.top_match().unwrap().artifact_id, "y");
    assert_eq!(engine.artifact("x").unwrap().metadata["wallet"], "0xabc");
}

#[test]
fn hydrate_without_persistence_is_noop() {
    assert_eq!(AuditEngine::new(ProvenanceConfig::default()).hydrate().unwrap(), 0);
}

fn chrono_now() -> chrono::DateTime<chrono::Utc> {
    chrono::Utc::now()
}
