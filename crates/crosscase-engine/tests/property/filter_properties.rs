use std::collections::{HashMap, HashSet};

use crosscase_core::config::FilterConfig;
use crosscase_core::errors::StoreError;
use crosscase_core::models::{AttributeType, MatchIndex, MatchedValue, ValueInstance};
use crosscase_core::traits::ICorrelationStore;
use crosscase_engine::CorrelationEngine;
use proptest::prelude::*;

struct CountingStore {
    total: f64,
    counts: HashMap<String, f64>,
}

impl ICorrelationStore for CountingStore {
    fn count_unique_tuples(&self) -> Result<f64, StoreError> {
        Ok(self.total)
    }

    fn count_unique_tuples_for_value(
        &self,
        _attribute: &AttributeType,
        value: &str,
    ) -> Result<f64, StoreError> {
        Ok(self.counts.get(value).copied().unwrap_or(0.0))
    }
}

/// (case idx, data source idx, value key, per-value tuple count)
fn entries() -> impl Strategy<Value = Vec<(u8, u8, String, u8)>> {
    prop::collection::vec(
        (0u8..4, 0u8..3, "[a-f][0-9a-f]{3}", 0u8..=100),
        0..24,
    )
}

fn build(entries: &[(u8, u8, String, u8)]) -> (MatchIndex, CountingStore) {
    let mut index = MatchIndex::new();
    let mut counts = HashMap::new();
    for (case, ds, key, count) in entries {
        index.push_value(
            format!("case{case}"),
            format!("ds{ds}"),
            MatchedValue::new(key.clone(), vec![ValueInstance::without_file()]),
        );
        counts.insert(key.clone(), f64::from(*count));
    }
    (index, CountingStore { total: 100.0, counts })
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
    fn output_values_are_a_subset_of_input(entries in entries(), threshold in 0u32..=100) {
        let (index, store) = build(&entries);
        let mut engine = CorrelationEngine::new(&store, &index);
        let view = engine
            .filtered_view(&FilterConfig::new(threshold, HashSet::new()))
            .unwrap();

        let input_keys: HashSet<&str> = index.values().map(|(_, _, v)| v.value()).collect();
        for (_, _, value) in view.values() {
            prop_assert!(input_keys.contains(value.value()));
        }
        prop_assert!(view.value_count() <= index.value_count());
    }

    #[test]
    fn surviving_values_keep_their_relative_order(entries in entries(), threshold in 1u32..=100) {
        let (index, store) = build(&entries);
        let mut engine = CorrelationEngine::new(&store, &index);
        let view = engine
            .filtered_view(&FilterConfig::new(threshold, HashSet::new()))
            .unwrap();

        let before = bucket_keys(&index);
        for (bucket, after_keys) in bucket_keys(view) {
            // Filtered bucket must be the original with some keys deleted,
            // order intact.
            let original = &before[&bucket];
            let mut cursor = original.iter();
            for key in &after_keys {
                prop_assert!(
                    cursor.any(|orig| orig == key),
                    "key {key} out of order in bucket {bucket:?}"
                );
            }
        }
    }

    #[test]
    fn filtering_twice_equals_filtering_once(entries in entries(), threshold in 0u32..=100) {
        let (index, store) = build(&entries);
        let mut engine = CorrelationEngine::new(&store, &index);
        let config = FilterConfig::new(threshold, HashSet::new());
        let once = engine.filtered_view(&config).unwrap().clone();
        let twice = engine.filtered_view(&config).unwrap();
        prop_assert_eq!(&once, twice);
    }
}
