use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Per-pass filtering configuration. Immutable once handed to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Occurrence-frequency ceiling as a percentage of all (case, data
    /// source) tuples. 0 disables frequency filtering; otherwise 1–100.
    pub percentage_threshold: u32,
    /// MIME types to keep. Empty disables category filtering; unknown
    /// types always pass.
    pub allowed_categories: HashSet<String>,
}

impl FilterConfig {
    pub fn new(percentage_threshold: u32, allowed_categories: HashSet<String>) -> Self {
        Self {
            percentage_threshold,
            allowed_categories,
        }
    }

    /// Load from a TOML document, e.g. a saved search profile. Missing
    /// fields take their defaults.
    pub fn from_toml_str(doc: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(doc)
    }

    /// True when both filters are disabled and a pass can return the
    /// current index without touching the datastore.
    pub fn is_passthrough(&self) -> bool {
        self.percentage_threshold == 0 && self.allowed_categories.is_empty()
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            percentage_threshold: defaults::DEFAULT_PERCENTAGE_THRESHOLD,
            allowed_categories: HashSet::new(),
        }
    }
}
