//! # Collection Cache
//!
//! Client-side staleness tracking for remote collections.
//!
//! The cache never holds data and never performs I/O; it is a stale-set
//! keyed by collection. Mutating flows call [`invalidate`] after a write
//! settles, pages observe [`is_stale`] from an effect, refetch, and call
//! [`mark_fresh`] once the refetch is underway.
//!
//! Invalidation is idempotent: marking a collection that is already
//! stale does not touch the signal, so repeated calls cannot retrigger
//! observers or queue duplicate refetches.

use std::collections::HashSet;

use dioxus::prelude::*;

// ============================================================================
// Keys
// ============================================================================

/// Identifies one cached remote collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    /// The equipment listing
    Equipments,
}

// ============================================================================
// Cache
// ============================================================================

/// The stale-set behind the global cache signal
#[derive(Debug, Clone)]
pub struct QueryCache {
    stale: HashSet<CollectionKey>,
}

impl QueryCache {
    /// Create a cache with every collection stale
    ///
    /// Nothing has been fetched yet, so the first observer of each
    /// collection triggers the initial load through the same path as any
    /// later refetch.
    pub fn new() -> Self {
        Self {
            stale: [CollectionKey::Equipments].into(),
        }
    }

    /// Whether a collection needs refetching
    pub fn is_stale(&self, key: CollectionKey) -> bool {
        self.stale.contains(&key)
    }

    /// Mark a collection stale; returns false if it already was
    pub fn invalidate(&mut self, key: CollectionKey) -> bool {
        self.stale.insert(key)
    }

    /// Mark a collection fresh; returns false if it already was
    pub fn mark_fresh(&mut self, key: CollectionKey) -> bool {
        self.stale.remove(&key)
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Global cache state, shared by pages and dialogs
pub static QUERY_CACHE: GlobalSignal<QueryCache> = Signal::global(QueryCache::new);

// ============================================================================
// Signal Accessors
// ============================================================================

/// Mark a collection stale so its observers refetch
///
/// Fire-and-forget and safe to call from anywhere, including tasks that
/// outlive the component that spawned them. A collection that is already
/// stale is left untouched so the signal does not fire again.
pub fn invalidate(key: CollectionKey) {
    if !QUERY_CACHE.read().is_stale(key) {
        QUERY_CACHE.write().invalidate(key);
    }
}

/// Whether a collection is currently marked stale
///
/// Reading this from an effect subscribes the effect to cache changes.
pub fn is_stale(key: CollectionKey) -> bool {
    QUERY_CACHE.read().is_stale(key)
}

/// Clear the stale mark after a refetch has been triggered
pub fn mark_fresh(key: CollectionKey) {
    if QUERY_CACHE.read().is_stale(key) {
        QUERY_CACHE.write().mark_fresh(key);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cache_starts_stale() {
        let cache = QueryCache::new();
        assert!(cache.is_stale(CollectionKey::Equipments));
    }

    #[test]
    fn test_mark_fresh_clears_staleness() {
        let mut cache = QueryCache::new();
        assert!(cache.mark_fresh(CollectionKey::Equipments));
        assert!(!cache.is_stale(CollectionKey::Equipments));

        // Clearing again is a no-op
        assert!(!cache.mark_fresh(CollectionKey::Equipments));
    }

    #[test]
    fn test_invalidate_is_idempotent() {
        let mut cache = QueryCache::new();
        cache.mark_fresh(CollectionKey::Equipments);

        // First call flips the state, repeats change nothing
        assert!(cache.invalidate(CollectionKey::Equipments));
        assert!(!cache.invalidate(CollectionKey::Equipments));
        assert!(!cache.invalidate(CollectionKey::Equipments));
        assert!(cache.is_stale(CollectionKey::Equipments));
    }

    #[test]
    fn test_invalidate_then_fresh_round_trip() {
        let mut cache = QueryCache::new();
        cache.mark_fresh(CollectionKey::Equipments);

        cache.invalidate(CollectionKey::Equipments);
        assert!(cache.is_stale(CollectionKey::Equipments));

        cache.mark_fresh(CollectionKey::Equipments);
        assert!(!cache.is_stale(CollectionKey::Equipments));
    }
}
