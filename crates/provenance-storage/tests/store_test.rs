//! Upsert, snapshot, and lookup contract of the embedding store.

use provenance_core::{ProvenanceError, Vector};
use provenance_storage::EmbeddingStore;

fn count_of(store: &EmbeddingStore, id: &str) -> usize {
    store
        .snapshot()
        .iter()
        .filter(|e| e.artifact_id == id)
        .count()
}

#[test]
fn identical_upsert_twice_leaves_one_entry() {
    let store = EmbeddingStore::default();
    store.upsert("a", vec![0.6, 0.8], None).unwrap();
    store.upsert("a", vec![0.6, 0.8], None).unwrap();

    assert_eq!(count_of(&store, "a"), 1);
    assert_eq!(store.len(), 1);
}

#[test]
fn upsert_with_new_vector_replaces_content() {
    let store = EmbeddingStore::default();
    store
        .upsert("a", vec![1.0, 0.0], Some(serde_json::json!({"rev": 1})))
        .unwrap();
    store
        .upsert("a", vec![0.0, 1.0], Some(serde_json::json!({"rev": 2})))
        .unwrap();

    assert_eq!(count_of(&store, "a"), 1);
    let entry = store.get("a").unwrap();
    assert_eq!(entry.vector.as_slice(), &[0.0, 1.0]);
    assert_eq!(entry.metadata["rev"], 2);
}

#[test]
fn replacement_refreshes_timestamp() {
    let store = EmbeddingStore::default();
    store.upsert("a", vec![1.0, 0.0], None).unwrap();
    let first = store.get("a").unwrap().indexed_at;
    store.upsert("a", vec![0.0, 1.0], None).unwrap();
    assert!(store.get("a").unwrap().indexed_at >= first);
}

#[test]
fn empty_vector_fails_and_leaves_snapshot_unchanged() {
    let store = EmbeddingStore::default();
    store.upsert("x", vec![1.0, 0.0], None).unwrap();
    let before = store.to_rows();

    let err = store.upsert("z", Vec::<f32>::new(), None).unwrap_err();
    assert!(matches!(err, ProvenanceError::InvalidVector { .. }));
    assert_eq!(store.to_rows(), before);
    assert!(store.get("z").is_none());
}

#[test]
fn invalid_replacement_keeps_existing_entry() {
    let store = EmbeddingStore::default();
    store.upsert("a", vec![1.0, 0.0], None).unwrap();

    assert!(store.upsert("a", vec![f32::NAN, 0.0], None).is_err());
    assert!(store.upsert("a", vec![1.0, 0.0, 0.0], None).is_err());

    let entry = store.get("a").unwrap();
    assert_eq!(entry.vector.as_slice(), &[1.0, 0.0]);
}

#[test]
fn first_upsert_fixes_dimensionality() {
    let store = EmbeddingStore::default();
    store.upsert("a", vec![1.0, 0.0], None).unwrap();

    let err = store.upsert("b", vec![1.0, 0.0, 0.0], None).unwrap_err();
    assert!(matches!(
        err,
        ProvenanceError::DimensionMismatch {
            expected: 2,
            actual: 3
        }
    ));
    assert_eq!(store.len(), 1);
}

#[test]
fn snapshot_preserves_insertion_order() {
    let store = EmbeddingStore::default();
    for id in ["c", "a", "b"] {
        store.upsert(id, vec![1.0, 1.0], None).unwrap();
    }
    store.upsert("a", vec![1.0, 0.0], None).unwrap();

    let ids: Vec<_> = store
        .snapshot()
        .iter()
        .map(|e| e.artifact_id.clone())
        .collect();
    assert_eq!(ids, ["c", "a", "b"]);
}

#[test]
fn snapshot_is_point_in_time() {
    let store = EmbeddingStore::default();
    store.upsert("a", vec![1.0, 0.0], None).unwrap();
    let snapshot = store.snapshot();

    store.upsert("b", vec![0.0, 1.0], None).unwrap();
    store.upsert("a", vec![0.0, 1.0], None).unwrap();

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.get("a").unwrap().vector.as_slice(), &[1.0, 0.0]);
    assert_eq!(store.snapshot().len(), 2);
}

#[test]
fn accepts_prebuilt_vectors() {
    let store = EmbeddingStore::default();
    let v = Vector::new(vec![2.0, 0.0]).unwrap();
    store.upsert("a", &v, None).unwrap();
    store.upsert("b", v, None).unwrap();
    store.upsert("c", [0.0f32, 3.0], None).unwrap();
    assert_eq!(store.len(), 3);
    assert!(store.contains("c"));
}

#[test]
fn unknown_lookup_is_none_and_fetch_errors() {
    let store = EmbeddingStore::default();
    assert!(store.get("ghost").is_none());
    assert!(matches!(
        store.fetch("ghost"),
        Err(ProvenanceError::UnknownArtifact { .. })
    ));
}
