//! Route resolution caching.
//!
//! [`RouteCache`] remembers which route a fragment resolved to, so revisiting
//! a page skips the pattern scan. It is gated behind the `cache` feature and
//! uses the [`lru`] crate.
//!
//! Entries store the registration index of the route plus its captured
//! parameters. The router clears the cache whenever a route is registered,
//! since a new route can change which one matches first.
//!
//! [`CacheStats`] tracks hits, misses, and invalidations.
//!
//! # Examples
//!
//! ```
//! use page_navigator::cache::RouteCache;
//! use page_navigator::RouteParams;
//!
//! let mut cache = RouteCache::with_capacity(8);
//! cache.insert("views.html".to_string(), 2, RouteParams::new());
//!
//! assert_eq!(cache.get("views.html").map(|hit| hit.index), Some(2));
//! assert_eq!(cache.stats().hits, 1);
//! ```

use crate::{debug_log, trace_log, RouteParams};
use lru::LruCache;
use std::num::NonZeroUsize;

/// A cached resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedRoute {
    /// Registration index of the route in the router's table.
    pub index: usize,
    /// Parameters captured when the fragment was first resolved.
    pub params: RouteParams,
}

/// Counters tracking cache effectiveness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of lookups answered from the cache.
    pub hits: usize,
    /// Number of lookups that fell through to the route table.
    pub misses: usize,
    /// Number of full invalidations (via [`RouteCache::clear`]).
    pub invalidations: usize,
}

impl CacheStats {
    /// Hit rate as a value in `0.0..=1.0`; `0.0` before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache from fragment to resolved route.
#[derive(Debug)]
pub struct RouteCache {
    entries: LruCache<String, CachedRoute>,
    stats: CacheStats,
}

impl RouteCache {
    /// Capacity used by [`RouteCache::new`].
    pub const DEFAULT_CAPACITY: usize = 64;

    /// Create a cache with [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY).
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a cache holding at most `capacity` fragments. A capacity of
    /// zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(cap),
            stats: CacheStats::default(),
        }
    }

    /// Drop every entry and count an invalidation.
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        self.stats.invalidations += 1;
        debug_log!(
            "Route cache cleared: {} entries removed ({} invalidations, hit rate {:.1}%)",
            removed,
            self.stats.invalidations,
            self.stats.hit_rate() * 100.0
        );
    }

    /// Look up a fragment, updating hit/miss stats.
    pub fn get(&mut self, fragment: &str) -> Option<CachedRoute> {
        if let Some(entry) = self.entries.get(fragment) {
            self.stats.hits += 1;
            trace_log!("Route cache hit for '{}'", fragment);
            Some(entry.clone())
        } else {
            self.stats.misses += 1;
            trace_log!("Route cache miss for '{}'", fragment);
            None
        }
    }

    /// Remember that `fragment` resolved to the route at `index`.
    pub fn insert(&mut self, fragment: String, index: usize, params: RouteParams) {
        trace_log!("Caching route #{} for '{}'", index, fragment);
        self.entries.push(fragment, CachedRoute { index, params });
    }

    /// Current statistics.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Reset all counters to zero.
    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }

    /// Number of cached fragments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of cached fragments.
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }
}

impl Default for RouteCache {
    fn default() -> Self {
        Self::new()
    }
}
