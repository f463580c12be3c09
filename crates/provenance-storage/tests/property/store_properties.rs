//! Property tests: upsert is keyed, idempotent, and order-preserving.

use proptest::prelude::*;

use provenance_storage::EmbeddingStore;

fn unit_ish() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(0.1f32..10.0, 4)
}

proptest! {
    #[test]
    fn prop_one_entry_per_id(
        writes in prop::collection::vec(("[a-e]", unit_ish()), 1..40)
    ) {
        let store = EmbeddingStore::default();
        for (id, v) in &writes {
            store.upsert(id, v.clone(), None).unwrap();
        }

        let mut distinct: Vec<&String> = writes.iter().map(|(id, _)| id).collect();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(store.len(), distinct.len());

        // The stored vector for each id is the last one written.
        for id in distinct {
            let last = writes.iter().rev().find(|(w, _)| w == id).map(|(_, v)| v).unwrap();
            let expected = provenance_core::Vector::new(last.clone()).unwrap();
            prop_assert_eq!(&store.get(id).unwrap().vector, &expected);
        }
    }

    #[test]
    fn prop_snapshot_order_is_first_insertion_order(
        ids in prop::collection::vec("[a-h]", 1..30)
    ) {
        let store = EmbeddingStore::default();
        for id in &ids {
            store.upsert(id, vec![1.0, 2.0], None).unwrap();
        }
        let mut expected: Vec<String> = Vec::new();
        for id in &ids {
            if !expected.contains(id) {
                expected.push(id.clone());
            }
        }
        let actual: Vec<String> = store.snapshot().iter().map(|e| e.artifact_id.clone()).collect();
        prop_assert_eq!(actual, expected);
    }
}
