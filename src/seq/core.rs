//! PagedSequence — flat, read-only, randomly-indexable view over a paged
//! source.
//!
//! Offset math: the page holding flat offset `i` is `i / page_size`, the slot
//! inside it `i % page_size` (offsets are validated non-negative before the
//! division, so no negative-modulo handling is needed). Pages are fetched on
//! first touch and kept for the sequence's lifetime; repeated access to a
//! page never re-fetches it.

use std::fmt;

use anyhow::anyhow;
use log::{debug, trace};

use crate::errors::{PagedError, Result};
use crate::metrics::CacheStats;
use crate::seq::cache::PageCache;
use crate::seq::iter::PagedIter;
use crate::source::PageSource;

/// Read-only sequence over a [`PageSource`], with per-page caching.
///
/// All access goes through `&mut self`: fetching a page mutates the cache
/// (and possibly the source, for lazy-total sources), and the borrow rules
/// make cross-thread or interleaved-iterator misuse unrepresentable.
pub struct PagedSequence<S: PageSource> {
    source: S,
    cache: PageCache<S::Item>,
}

impl<S: PageSource> PagedSequence<S> {
    /// Wrap a source; the cache starts empty and nothing is fetched.
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: PageCache::new(),
        }
    }

    /// Total number of items, read live from the source on every call (some
    /// sources only learn it after their first fetch).
    pub fn len(&self) -> u64 {
        self.source.total_size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Page size as reported by the source.
    pub fn page_size(&self) -> Result<usize> {
        self.source.page_size()
    }

    /// True iff `offset` converts to an integer in `0..len()`. A pure
    /// predicate: never fetches a page, never errors.
    pub fn contains<I>(&self, offset: I) -> bool
    where
        I: TryInto<i64>,
    {
        match offset.try_into() {
            Ok(off) => off >= 0 && (off as u64) < self.len(),
            Err(_) => false,
        }
    }

    /// Snapshot of cache hit/miss counters and resident page count.
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Borrow the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Give the source back, dropping the cache.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: PageSource> PagedSequence<S>
where
    S::Item: Clone,
{
    /// Item at flat offset `offset`.
    ///
    /// The index is validated in two steps, in order: a value that cannot be
    /// represented as a signed integer offset fails with
    /// [`PagedError::InvalidArgument`]; an integer outside `0..len()` fails
    /// with [`PagedError::OutOfBounds`]. A valid offset is served from the
    /// cache, fetching the enclosing page first if this is its first touch.
    /// A fetch failure propagates unchanged and caches nothing, so a later
    /// access to the same page retries the fetch.
    pub fn get<I>(&mut self, offset: I) -> Result<S::Item>
    where
        I: TryInto<i64> + fmt::Display + Copy,
    {
        let off: i64 = offset
            .try_into()
            .map_err(|_| PagedError::InvalidArgument(offset.to_string()))?;
        if off < 0 || (off as u64) >= self.len() {
            return Err(PagedError::OutOfBounds(off));
        }
        self.item_at(off as u64)
    }

    /// Cached read of a pre-validated offset. Shared by `get` and iteration
    /// so both go through the exact same cache path.
    pub(crate) fn item_at(&mut self, offset: u64) -> Result<S::Item> {
        let page_size = self.source.page_size()?;
        if page_size == 0 {
            return Err(PagedError::Source(anyhow!(
                "page source reported a zero page size"
            )));
        }
        let page_no = offset / page_size as u64;
        let slot = (offset % page_size as u64) as usize;

        if self.cache.probe(page_no) {
            trace!("page cache hit: page={}", page_no);
        } else {
            debug!("page cache miss: fetching page {}", page_no);
            let items = self.source.fetch_page(page_no)?;
            self.cache.insert(page_no, items);
        }

        self.cache.item(page_no, slot).cloned().ok_or_else(|| {
            PagedError::Source(anyhow!(
                "page {} is shorter than expected: no item at slot {} (offset {})",
                page_no,
                slot,
                offset
            ))
        })
    }

    /// Always fails: the sequence is read-only.
    pub fn set<I>(&mut self, _offset: I, _value: S::Item) -> Result<()> {
        Err(PagedError::Unsupported("setting values"))
    }

    /// Always fails: the sequence is read-only.
    pub fn delete<I>(&mut self, _offset: I) -> Result<()> {
        Err(PagedError::Unsupported("deleting values"))
    }

    /// Start a new iteration pass from offset 0.
    ///
    /// Each pass owns its cursor; the page cache is shared across passes, so
    /// re-iterating an exhausted sequence replays the same items without
    /// re-fetching already-cached pages.
    pub fn iter(&mut self) -> PagedIter<'_, S> {
        PagedIter::new(self)
    }
}

impl<'a, S: PageSource> IntoIterator for &'a mut PagedSequence<S>
where
    S::Item: Clone,
{
    type Item = Result<S::Item>;
    type IntoIter = PagedIter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
