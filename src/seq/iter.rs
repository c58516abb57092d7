//! Restartable forward iteration over a paged sequence.
//!
//! Each call to `PagedSequence::iter` produces a fresh pass with its own
//! cursor; the sequence's page cache is shared, so a second full traversal
//! performs zero fetches for pages the first one already pulled in. The
//! cursor is compared against the live total on every step, which keeps
//! lazy-total sources honest: a total that grows after the first fetch
//! extends the current pass.
//!
//! End of data is `None` (normal termination); a failed page fetch surfaces
//! as `Some(Err(...))` and does not advance past the failed offset's page —
//! the next call retries the same fetch.

use crate::errors::Result;
use crate::seq::core::PagedSequence;
use crate::source::PageSource;

/// One iteration pass over a [`PagedSequence`]. Created by
/// [`PagedSequence::iter`] or by a `for` loop over `&mut` sequence.
pub struct PagedIter<'a, S: PageSource> {
    seq: &'a mut PagedSequence<S>,
    cursor: u64,
}

impl<'a, S: PageSource> PagedIter<'a, S> {
    pub(crate) fn new(seq: &'a mut PagedSequence<S>) -> Self {
        Self { seq, cursor: 0 }
    }
}

impl<'a, S: PageSource> Iterator for PagedIter<'a, S>
where
    S::Item: Clone,
{
    type Item = Result<S::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.seq.len() {
            return None;
        }
        let item = self.seq.item_at(self.cursor);
        if item.is_ok() {
            self.cursor += 1;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.seq.len().saturating_sub(self.cursor) as usize;
        // Lower bound 0: the live total may shrink, and a fetch may fail.
        (0, Some(remaining))
    }
}
