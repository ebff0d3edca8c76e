//! Registry directory lookup table and identifier resolution.
//!
//! The registry directory is the full list of entities known to the
//! disclosure system, on the order of 10^5 entries. It is decoded once per
//! TTL window (see the provider crates) and shared across all lookups, so
//! the table is built for O(1) average lookup by exact canonical name and by
//! normalized-name projection.

use std::collections::HashMap;

use crate::normalize::normalize;
use crate::types::{CorpCode, DirectoryEntry};

/// In-memory registry directory, indexed for identifier resolution.
#[derive(Debug, Default, Clone)]
pub struct CorpDirectory {
    by_name: HashMap<String, CorpCode>,
    by_normalized: HashMap<String, CorpCode>,
}

impl CorpDirectory {
    /// Builds a directory from decoded registry entries.
    ///
    /// The registry occasionally lists several entities under names that
    /// collapse to the same normalized key; the first entry wins, matching
    /// the resolution policy of returning the first match.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = DirectoryEntry>) -> Self {
        let mut by_name = HashMap::new();
        let mut by_normalized = HashMap::new();

        for entry in entries {
            by_normalized
                .entry(normalize(&entry.corp_name))
                .or_insert_with(|| entry.corp_code.clone());
            by_name.entry(entry.corp_name).or_insert(entry.corp_code);
        }

        Self {
            by_name,
            by_normalized,
        }
    }

    /// Number of distinct canonical names in the directory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns true if the directory holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Resolves a raw company name to its registry identifier.
    ///
    /// Matching policy, in order: exact match on the canonical name, then
    /// match on the normalized-name projection of both sides. `None` is a
    /// per-company terminal condition, not a batch failure.
    #[must_use]
    pub fn resolve(&self, raw_name: &str) -> Option<&CorpCode> {
        self.by_name
            .get(raw_name)
            .or_else(|| self.by_normalized.get(&normalize(raw_name)))
    }
}
