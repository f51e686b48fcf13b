use std::collections::{HashMap, HashSet};

use crosscase_core::models::{MatchIndex, MatchedValue, ValueInstance};
use proptest::prelude::*;

/// (case idx, data source idx, value key)
fn entries() -> impl Strategy<Value = Vec<(u8, u8, String)>> {
    prop::collection::vec((0u8..4, 0u8..3, "[a-f][0-9a-f]{2}"), 0..24)
}

fn build(entries: &[(u8, u8, String)]) -> MatchIndex {
    let mut index = MatchIndex::new();
    for (case, ds, key) in entries {
        index.push_value(
            format!("case{case}"),
            format!("ds{ds}"),
            MatchedValue::new(key.clone(), vec![ValueInstance::without_file()]),
        );
    }
    index
}

fn bucket_keys(index: &MatchIndex) -> HashMap<(String, String), Vec<String>> {
    let mut buckets: HashMap<(String, String), Vec<String>> = HashMap::new();
    for (case, ds, value) in index.values() {
        buckets
            .entry((case.to_string(), ds.to_string()))
            .or_default()
            .push(value.value().to_string());
    }
    buckets
}

proptest! {
    #[test]
    fn rebuild_drops_exactly_the_removed_keys(
        entries in entries(),
        removed in prop::collection::hash_set("[a-f][0-9a-f]{2}", 0..8),
    ) {
        let index = build(&entries);
        let rebuilt = index.rebuild_without(&removed);

        for (_, _, value) in rebuilt.values() {
            prop_assert!(!removed.contains(value.value()));
        }
        let expected = entries.iter().filter(|(_, _, key)| !removed.contains(key)).count();
        prop_assert_eq!(rebuilt.value_count(), expected);
    }

    #[test]
    fn rebuild_preserves_within_bucket_order(
        entries in entries(),
        removed in prop::collection::hash_set("[a-f][0-9a-f]{2}", 0..8),
    ) {
        let index = build(&entries);
        let rebuilt = index.rebuild_without(&removed);

        let before = bucket_keys(&index);
        for (bucket, after_keys) in bucket_keys(&rebuilt) {
            // Each rebuilt bucket is the original with some keys deleted,
            // order intact.
            let original = &before[&bucket];
            let mut cursor = original.iter();
            for key in &after_keys {
                prop_assert!(
                    cursor.any(|orig| orig == key),
                    "key {} out of order in bucket {:?}", key, bucket
                );
            }
        }
    }

    #[test]
    fn rebuild_with_nothing_removed_is_identity(entries in entries()) {
        let index = build(&entries);
        let rebuilt = index.rebuild_without(&HashSet::new());
        prop_assert_eq!(rebuilt, index);
    }
}
