//! Bounded FIFO memo for rendered data URIs.
//!
//! Rendering a URI is cheap, but the preset commands hit the same
//! handful of pairs over and over, so [`UriCache`] memoizes
//! [`crate::svg::data_uri`] results keyed by the exact pair. The memo is
//! purely an optimization: a hit returns the stored string unchanged, so
//! callers cannot distinguish it from a fresh render.
//!
//! ## Eviction
//!
//! Strict insertion-order FIFO. The key list is an explicit `VecDeque`
//! (front = oldest) next to the value map — the bound never depends on
//! any container's incidental iteration order, and a lookup hit does not
//! refresh an entry's age. When an insert would exceed capacity, exactly
//! the oldest-inserted entry is dropped first.

use crate::dimensions::DimensionPair;
use crate::svg;
use std::collections::{HashMap, VecDeque};

/// Stock capacity: enough for every preset plus a few ad-hoc sizes.
pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Debug, Clone)]
pub struct UriCache {
    capacity: usize,
    /// Keys in insertion order; front is the oldest entry.
    order: VecDeque<DimensionPair>,
    entries: HashMap<DimensionPair, String>,
}

impl Default for UriCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl UriCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            order: VecDeque::with_capacity(capacity),
            entries: HashMap::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, pair: DimensionPair) -> bool {
        self.entries.contains_key(&pair)
    }

    /// Cached keys, oldest first.
    pub fn keys(&self) -> impl Iterator<Item = DimensionPair> + '_ {
        self.order.iter().copied()
    }

    /// Return the URI for `pair`, rendering and caching it on a miss.
    ///
    /// Capacity zero degrades to a pass-through render.
    pub fn get_or_render(&mut self, pair: DimensionPair) -> String {
        if let Some(uri) = self.entries.get(&pair) {
            return uri.clone();
        }
        let uri = svg::data_uri(pair);
        if self.capacity == 0 {
            return uri;
        }
        if self.order.len() >= self.capacity
            && let Some(oldest) = self.order.pop_front()
        {
            self.entries.remove(&oldest);
        }
        self.order.push_back(pair);
        self.entries.insert(pair, uri.clone());
        uri
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(width: u32, height: u32) -> DimensionPair {
        DimensionPair { width, height }
    }

    // =========================================================================
    // Transparency
    // =========================================================================

    #[test]
    fn miss_matches_fresh_render() {
        let mut cache = UriCache::default();
        assert_eq!(cache.get_or_render(pair(400, 300)), svg::data_uri(pair(400, 300)));
    }

    #[test]
    fn hit_returns_identical_bytes() {
        let mut cache = UriCache::default();
        let first = cache.get_or_render(pair(1440, 720));
        let second = cache.get_or_render(pair(1440, 720));
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn distinct_pairs_get_distinct_entries() {
        let mut cache = UriCache::default();
        cache.get_or_render(pair(400, 300));
        cache.get_or_render(pair(300, 400));
        assert_eq!(cache.len(), 2);
        assert!(cache.contains(pair(400, 300)));
        assert!(cache.contains(pair(300, 400)));
    }

    // =========================================================================
    // Bound and eviction order
    // =========================================================================

    #[test]
    fn never_exceeds_capacity() {
        let mut cache = UriCache::new(10);
        for w in 1..=50 {
            cache.get_or_render(pair(w, 100));
            assert!(cache.len() <= 10);
        }
        assert_eq!(cache.len(), 10);
    }

    #[test]
    fn eleventh_key_evicts_exactly_the_first() {
        let mut cache = UriCache::new(10);
        for w in 1..=10 {
            cache.get_or_render(pair(w, 100));
        }
        cache.get_or_render(pair(11, 100));

        assert_eq!(cache.len(), 10);
        assert!(!cache.contains(pair(1, 100)));
        for w in 2..=11 {
            assert!(cache.contains(pair(w, 100)));
        }
    }

    #[test]
    fn eviction_is_fifo_not_lru() {
        let mut cache = UriCache::new(3);
        cache.get_or_render(pair(1, 1));
        cache.get_or_render(pair(2, 2));
        cache.get_or_render(pair(3, 3));

        // Re-reading the oldest entry must not refresh its age.
        cache.get_or_render(pair(1, 1));
        cache.get_or_render(pair(4, 4));

        assert!(!cache.contains(pair(1, 1)));
        assert!(cache.contains(pair(2, 2)));
        assert!(cache.contains(pair(3, 3)));
        assert!(cache.contains(pair(4, 4)));
    }

    #[test]
    fn keys_iterate_oldest_first() {
        let mut cache = UriCache::new(3);
        cache.get_or_render(pair(5, 5));
        cache.get_or_render(pair(6, 6));
        cache.get_or_render(pair(7, 7));
        let keys: Vec<_> = cache.keys().collect();
        assert_eq!(keys, vec![pair(5, 5), pair(6, 6), pair(7, 7)]);

        cache.get_or_render(pair(8, 8));
        let keys: Vec<_> = cache.keys().collect();
        assert_eq!(keys, vec![pair(6, 6), pair(7, 7), pair(8, 8)]);
    }

    #[test]
    fn order_and_entries_stay_in_sync() {
        let mut cache = UriCache::new(4);
        for w in 1..=20 {
            cache.get_or_render(pair(w, w));
            assert_eq!(cache.len(), cache.keys().count());
            for key in cache.keys().collect::<Vec<_>>() {
                assert!(cache.contains(key));
            }
        }
    }

    // =========================================================================
    // Degenerate capacity
    // =========================================================================

    #[test]
    fn zero_capacity_is_pass_through() {
        let mut cache = UriCache::new(0);
        let uri = cache.get_or_render(pair(400, 300));
        assert_eq!(uri, svg::data_uri(pair(400, 300)));
        assert!(cache.is_empty());
        assert!(!cache.contains(pair(400, 300)));
    }

    #[test]
    fn capacity_one_holds_only_the_newest() {
        let mut cache = UriCache::new(1);
        cache.get_or_render(pair(1, 1));
        cache.get_or_render(pair(2, 2));
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(pair(2, 2)));
    }
}
