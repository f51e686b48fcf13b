//! Content-category allow-list filter.

use std::collections::HashSet;

use crosscase_core::models::MatchedValue;

/// Excludes values whose file instances fall outside an allow-list of
/// MIME types. An empty allow-list disables the filter.
///
/// This is an allow-list rather than a deny-list on purpose: consumers
/// pre-narrow the categories they care about, and unknown or undetected
/// MIME types pass through instead of being excluded, so incomplete type
/// detection never hides results.
#[derive(Debug, Clone)]
pub struct CategoryFilter {
    allowed: HashSet<String>,
}

impl CategoryFilter {
    pub fn new(allowed: HashSet<String>) -> Self {
        Self { allowed }
    }

    /// True if the value should be removed: some instance has a present
    /// file reference with a known MIME type outside the allow-list.
    /// Stops at the first disqualifying instance; all instances of a
    /// value share one fate.
    pub fn excludes(&self, value: &MatchedValue) -> bool {
        if self.allowed.is_empty() {
            return false;
        }
        value.instances().iter().any(|instance| {
            instance
                .file
                .as_ref()
                .and_then(|file| file.mime_type.as_deref())
                .is_some_and(|mime| !self.allowed.contains(mime))
        })
    }
}
