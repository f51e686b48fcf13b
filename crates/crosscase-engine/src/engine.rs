//! CorrelationEngine: orchestrates a filtering pass over a MatchIndex.
//!
//! One pass: resolve attribute type → fetch the global tuple count once →
//! walk every value (category filter first, then frequency) → rebuild the
//! index without the removed values.

use std::collections::HashSet;

use crosscase_core::config::FilterConfig;
use crosscase_core::constants;
use crosscase_core::errors::{CorrelationError, CorrelationResult};
use crosscase_core::models::{AttributeType, MatchIndex};
use crosscase_core::traits::ICorrelationStore;
use tracing::{debug, info};

use crate::filters::{CategoryFilter, FrequencyFilter, FrequencyOutcome};

/// The result assembler. Owns the current snapshot of matched values and
/// replaces it wholesale on each successful filtering pass. A failed pass
/// leaves the previous snapshot untouched, so callers retrying after a
/// datastore error still see the last known-good view.
///
/// Not reentrant: concurrent passes on one engine must be serialized by
/// the caller. The upstream search stage creates one engine per session.
pub struct CorrelationEngine<'a> {
    store: &'a dyn ICorrelationStore,
    catalog: Vec<AttributeType>,
    result_type_id: u32,
    index: MatchIndex,
}

impl<'a> CorrelationEngine<'a> {
    /// Wrap a search result. The index is cloned on entry so the engine
    /// never mutates caller state. The result type defaults to file
    /// hashes, the most common correlation dimension.
    pub fn new(store: &'a dyn ICorrelationStore, index: &MatchIndex) -> Self {
        Self {
            store,
            catalog: AttributeType::supported_types(),
            result_type_id: constants::FILES_TYPE_ID,
            index: index.clone(),
        }
    }

    /// Set the attribute type the search was run against.
    pub fn with_result_type(mut self, result_type_id: u32) -> Self {
        self.result_type_id = result_type_id;
        self
    }

    /// Replace the built-in attribute-type catalog.
    pub fn with_catalog(mut self, catalog: Vec<AttributeType>) -> Self {
        self.catalog = catalog;
        self
    }

    /// The current snapshot. Consumers must treat it as read-only.
    pub fn snapshot(&self) -> &MatchIndex {
        &self.index
    }

    /// Run one filtering pass and return the resulting view.
    ///
    /// With both filters disabled this returns the current snapshot
    /// without touching the datastore. Otherwise the pass either fully
    /// applies both filters or fails without changing the snapshot.
    pub fn filtered_view(&mut self, config: &FilterConfig) -> CorrelationResult<&MatchIndex> {
        if config.is_passthrough() {
            debug!("both filters disabled; returning snapshot unmodified");
            return Ok(&self.index);
        }

        let attribute = AttributeType::resolve(&self.catalog, self.result_type_id)
            .ok_or(CorrelationError::UnknownAttributeType {
                id: self.result_type_id,
            })?
            .clone();

        // One global count per pass bounds datastore load to one round
        // trip plus one per value, regardless of result-set size.
        let total_tuples = self.store.count_unique_tuples()?;
        debug!(
            total_tuples,
            attribute = %attribute.display_name,
            threshold = config.percentage_threshold,
            categories = config.allowed_categories.len(),
            "starting filtering pass"
        );

        let removal_set = self.collect_removals(config, &attribute, total_tuples)?;
        if removal_set.is_empty() {
            debug!("no values removed");
            return Ok(&self.index);
        }

        let rebuilt = self.index.rebuild_without(&removal_set);
        info!(
            removed = removal_set.len(),
            remaining = rebuilt.value_count(),
            "filtering pass complete"
        );
        self.index = rebuilt;
        Ok(&self.index)
    }

    /// Walk every value and collect the identity keys to remove. Values
    /// already flagged are skipped; a value is removed wholesale, so its
    /// remaining occurrences need no further evaluation.
    fn collect_removals(
        &self,
        config: &FilterConfig,
        attribute: &AttributeType,
        total_tuples: f64,
    ) -> CorrelationResult<HashSet<String>> {
        let category = CategoryFilter::new(config.allowed_categories.clone());
        let frequency = FrequencyFilter::new(
            self.store,
            attribute,
            total_tuples,
            config.percentage_threshold,
        );

        let mut removal_set = HashSet::new();
        for (_, _, value) in self.index.values() {
            if removal_set.contains(value.value()) {
                continue;
            }
            if category.excludes(value) {
                removal_set.insert(value.value().to_string());
                continue;
            }
            match frequency.evaluate(value.value())? {
                FrequencyOutcome::Exclude => {
                    removal_set.insert(value.value().to_string());
                }
                FrequencyOutcome::Keep | FrequencyOutcome::KeepUnchecked { .. } => {}
            }
        }
        Ok(removal_set)
    }
}
