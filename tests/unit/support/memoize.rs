//! Tests for single-argument memoization

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use lazygrid::support::memoize::{CacheStats, MemoCache};
    use lazygrid::support::{Memoized, memoize};

    // The wrapped function runs once per distinct argument
    // Verified by recomputing on every call
    #[test]
    fn test_computes_once_per_key() {
        let calls = Cell::new(0);
        let mut square = memoize(|n: &u64| {
            calls.set(calls.get() + 1);
            n * n
        });

        assert_eq!(square.call(12), 144);
        assert_eq!(square.call(12), 144);
        assert_eq!(square.call(3), 9);
        assert_eq!(calls.get(), 2);
        assert_eq!(square.stats(), CacheStats { hits: 1, misses: 2 });
    }

    // Borrowed results point into the cache
    // Verified by cloning the value on every lookup
    #[test]
    fn test_get_borrows_cached_value() {
        let mut words: Memoized<usize, String, _> = Memoized::new(|n: &usize| "ab".repeat(*n));

        assert_eq!(words.get(2), "abab");
        assert_eq!(words.cache().len(), 1);
        assert_eq!(words.cache().peek(&2).map(String::as_str), Some("abab"));
        assert_eq!(words.cache().peek(&3), None);
    }

    // A bare cache accepts a different computation per lookup but keeps the first result
    // Verified by storing the latest computation for a key
    #[test]
    fn test_cache_keeps_first_result() {
        let mut cache = MemoCache::new();

        assert_eq!(*cache.get_or_compute("key", |_| 1), 1);
        assert_eq!(*cache.get_or_compute("key", |_| 2), 1);
        assert_eq!(cache.stats, CacheStats { hits: 1, misses: 1 });
    }

    // Clearing drops results and statistics
    // Verified by keeping the statistics across a clear
    #[test]
    fn test_clear() {
        let mut cache = MemoCache::new();
        cache.get_or_compute(5, |n| n + 1);
        assert!(!cache.is_empty());

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats, CacheStats::default());
    }

    // Recursive definitions can be memoized by threading the cache through
    // Verified by computing Fibonacci numbers without the cache
    #[test]
    fn test_recursive_use() {
        fn fibonacci(n: u64, cache: &mut MemoCache<u64, u64>) -> u64 {
            if n < 2 {
                return n;
            }
            if let Some(&known) = cache.peek(&n) {
                return known;
            }
            let value = fibonacci(n - 1, cache) + fibonacci(n - 2, cache);
            *cache.get_or_compute(n, |_| value)
        }

        let mut cache = MemoCache::new();
        assert_eq!(fibonacci(90, &mut cache), 2_880_067_194_370_816_120);
        assert_eq!(cache.len(), 89);
    }
}
