//! Per-session memoisation keyed by seed key.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tally_core::SeedKey;

/// Unbounded key → value cache. Values are pure functions of their key, so entries never go
/// stale and there is no eviction.
#[derive(Debug, Clone)]
pub struct MemoCache<V> {
    entries: HashMap<SeedKey, V>,
}

impl<V> Default for MemoCache<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<V> MemoCache<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &SeedKey) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &SeedKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get_or_insert_with(&mut self, key: SeedKey, build: impl FnOnce(&SeedKey) -> V) -> &V {
        match self.entries.entry(key) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => {
                tracing::debug!(key = %e.key(), "Cache miss");
                let value = build(e.key());
                e.insert(value)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
