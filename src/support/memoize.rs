//! Single-argument memoization
//!
//! [`MemoCache`] stores results per distinct key and counts hits and misses.
//! [`Memoized`] binds a cache to one function so callers only pass keys.
//! Both need `&mut self`; wrap them in a `Mutex` to share across threads.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

/// Performance metrics for cache effectiveness
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of lookups answered from the cache
    pub hits: usize,
    /// Number of lookups that had to compute a value
    pub misses: usize,
}

/// Key-to-result store filled on demand
#[derive(Debug, Clone)]
pub struct MemoCache<K, V> {
    entries: HashMap<K, V>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

impl<K, V> Default for MemoCache<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::default(),
        }
    }
}

impl<K: Eq + Hash, V> MemoCache<K, V> {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve the cached result for `key` or compute and store a new one
    ///
    /// `compute` runs only when `key` has not been seen before.
    pub fn get_or_compute<F>(&mut self, key: K, compute: F) -> &V
    where
        F: FnOnce(&K) -> V,
    {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                let value = compute(entry.key());
                entry.insert(value)
            }
        }
    }

    /// Cached result for `key`, without computing anything
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Number of cached results
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached result and reset the statistics
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }
}

/// A function of one argument whose results are cached per argument
pub struct Memoized<K, V, F> {
    function: F,
    cache: MemoCache<K, V>,
}

impl<K, V, F> Memoized<K, V, F>
where
    K: Eq + Hash,
    F: FnMut(&K) -> V,
{
    /// Wrap `function` with an empty cache
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: MemoCache::new(),
        }
    }

    /// Result of the wrapped function for `key`, computed at most once
    pub fn get(&mut self, key: K) -> &V {
        let function = &mut self.function;
        self.cache.get_or_compute(key, |key| function(key))
    }

    /// Owned copy of the result for `key`
    pub fn call(&mut self, key: K) -> V
    where
        V: Clone,
    {
        self.get(key).clone()
    }

    /// Hit and miss counts so far
    pub const fn stats(&self) -> CacheStats {
        self.cache.stats
    }

    /// The underlying cache
    pub const fn cache(&self) -> &MemoCache<K, V> {
        &self.cache
    }
}

/// Wrap a pure function of one argument with a per-argument cache
pub fn memoize<K, V, F>(function: F) -> Memoized<K, V, F>
where
    K: Eq + Hash,
    F: FnMut(&K) -> V,
{
    Memoized::new(function)
}
