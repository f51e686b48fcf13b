use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::matched_value::MatchedValue;

/// Insertion-ordered list of matched values for one (case, data source)
/// bucket. Order is significant and preserved across rebuilds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueList {
    values: Vec<MatchedValue>,
}

impl ValueList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: MatchedValue) {
        self.values.push(value);
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchedValue> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<MatchedValue> for ValueList {
    fn from_iter<I: IntoIterator<Item = MatchedValue>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// The nested grouping of common-attribute search results:
/// case name → data source key → ordered value list.
///
/// Bucket iteration order carries no meaning; only within-bucket value
/// order does.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchIndex {
    cases: HashMap<String, HashMap<String, ValueList>>,
}

impl MatchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value to a (case, data source) bucket, creating the case
    /// and data-source buckets on first use.
    pub fn push_value(
        &mut self,
        case_name: impl Into<String>,
        data_source: impl Into<String>,
        value: MatchedValue,
    ) {
        self.cases
            .entry(case_name.into())
            .or_default()
            .entry(data_source.into())
            .or_default()
            .push(value);
    }

    /// Data-source buckets for one case, if the case is present.
    pub fn case(&self, case_name: &str) -> Option<&HashMap<String, ValueList>> {
        self.cases.get(case_name)
    }

    pub fn cases(&self) -> impl Iterator<Item = (&String, &HashMap<String, ValueList>)> {
        self.cases.iter()
    }

    /// Total matched values across every bucket.
    pub fn value_count(&self) -> usize {
        self.cases
            .values()
            .flat_map(|sources| sources.values())
            .map(ValueList::len)
            .sum()
    }

    /// Every value in the index, with its case and data-source keys.
    pub fn values(&self) -> impl Iterator<Item = (&str, &str, &MatchedValue)> {
        self.cases.iter().flat_map(|(case_name, sources)| {
            sources.iter().flat_map(move |(data_source, list)| {
                list.iter()
                    .map(move |value| (case_name.as_str(), data_source.as_str(), value))
            })
        })
    }

    /// Rebuild a new index excluding every value whose identity key is in
    /// `removed`. Buckets are created lazily, so a bucket whose every value
    /// was removed is absent from the result rather than present and empty.
    /// Within-bucket order is preserved.
    pub fn rebuild_without(&self, removed: &HashSet<String>) -> MatchIndex {
        let mut rebuilt = MatchIndex::new();
        for (case_name, sources) in &self.cases {
            for (data_source, list) in sources {
                for value in list.iter() {
                    if !removed.contains(value.value()) {
                        rebuilt.push_value(case_name.clone(), data_source.clone(), value.clone());
                    }
                }
            }
        }
        rebuilt
    }
}
