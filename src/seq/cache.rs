//! Page cache: page_no -> fetched items.
//!
//! Design:
//! - HashMap keyed by page number; populated lazily, grows monotonically.
//! - No eviction and no overwrite: the source is assumed immutable for the
//!   sequence's lifetime, so an entry, once stored, stays as-is until the
//!   whole sequence is dropped.
//! - Hit/miss counters live here; `probe` is the counting lookup used on the
//!   read path, `stats` snapshots counters and resident page count.

use std::collections::HashMap;

use crate::metrics::CacheStats;

pub(crate) struct PageCache<T> {
    map: HashMap<u64, Vec<T>>,
    hits: u64,
    misses: u64,
}

impl<T> PageCache<T> {
    pub(crate) fn new() -> Self {
        Self {
            map: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Counting lookup: true on hit. Call once per logical access.
    pub(crate) fn probe(&mut self, page_no: u64) -> bool {
        if self.map.contains_key(&page_no) {
            self.hits += 1;
            true
        } else {
            self.misses += 1;
            false
        }
    }

    /// Store a freshly fetched page. Existing entries are never replaced.
    pub(crate) fn insert(&mut self, page_no: u64, items: Vec<T>) {
        self.map.entry(page_no).or_insert(items);
    }

    /// Item at `slot` within a cached page, if both exist.
    pub(crate) fn item(&self, page_no: u64, slot: usize) -> Option<&T> {
        self.map.get(&page_no).and_then(|page| page.get(slot))
    }

    pub(crate) fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            pages_cached: self.map.len() as u64,
        }
    }
}
