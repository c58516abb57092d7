//! Lightweight per-sequence cache metrics.
//!
//! Plain counters, not atomics: a `PagedSequence` is single-threaded by
//! contract (all access goes through `&mut self`), so snapshots are exact.

/// Point-in-time view of one sequence's page-cache activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Accesses answered from an already-fetched page.
    pub hits: u64,
    /// Accesses that required a `fetch_page` call.
    pub misses: u64,
    /// Distinct pages currently held in the cache.
    pub pages_cached: u64,
}

impl CacheStats {
    /// Fraction of accesses served from cache; 0.0 when nothing was accessed.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_ratio_handles_zero_accesses() {
        assert_eq!(CacheStats::default().hit_ratio(), 0.0);
        let stats = CacheStats {
            hits: 3,
            misses: 1,
            pages_cached: 1,
        };
        assert_eq!(stats.hit_ratio(), 0.75);
    }
}
