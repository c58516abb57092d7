//! PageSource — the capability contract between a paged sequence and the
//! thing that actually delivers pages (an HTTP API, a file, a database, a
//! test stub).
//!
//! Contract:
//! - `page_size` must return the same positive value for the lifetime of one
//!   sequence; every page holds exactly that many items except possibly the
//!   last one.
//! - `total_size` is read live on every bounds check, never cached by the
//!   core. Sources that only learn the total from a fetch response may return
//!   a provisional value (commonly 0) until the first `fetch_page` completes;
//!   that is why `fetch_page` takes `&mut self`.
//! - `fetch_page` returns the ordered items of one page. The core calls it at
//!   most once per distinct page number (the cache absorbs repeats), and a
//!   returned error is handed to the caller unchanged with nothing cached.
//!
//! Defaults let minimal stand-ins exist without implementing every method:
//! an un-overridden `page_size`/`fetch_page` fails fast with `NotImplemented`,
//! while an un-overridden `total_size` yields 0 — an empty sequence on which
//! every index is out of bounds and no fetch is ever attempted.

use crate::errors::{PagedError, Result};

/// Supplier of fixed-size pages backing a [`PagedSequence`].
///
/// [`PagedSequence`]: crate::PagedSequence
///
/// # Example
///
/// ```
/// use pagedseq::{PageSource, PagedSequence, Result};
///
/// struct Squares;
///
/// impl PageSource for Squares {
///     type Item = u64;
///
///     fn page_size(&self) -> Result<usize> {
///         Ok(4)
///     }
///
///     fn total_size(&self) -> u64 {
///         10
///     }
///
///     fn fetch_page(&mut self, page_no: u64) -> Result<Vec<u64>> {
///         let start = page_no * 4;
///         let end = (start + 4).min(10);
///         Ok((start..end).map(|n| n * n).collect())
///     }
/// }
///
/// let mut seq = PagedSequence::new(Squares);
/// assert_eq!(seq.len(), 10);
/// assert_eq!(seq.get(5)?, 25);
/// # Ok::<(), pagedseq::PagedError>(())
/// ```
pub trait PageSource {
    /// The element type delivered inside pages.
    type Item;

    /// Number of items per page. Must be positive and constant across calls.
    fn page_size(&self) -> Result<usize> {
        Err(PagedError::NotImplemented("page_size"))
    }

    /// Total number of items across all pages. May change after a fetch for
    /// sources with lazy total discovery; defaults to 0 (empty sequence).
    fn total_size(&self) -> u64 {
        0
    }

    /// Fetch the ordered items of page `page_no` (zero-based).
    fn fetch_page(&mut self, page_no: u64) -> Result<Vec<Self::Item>> {
        let _ = page_no;
        Err(PagedError::NotImplemented("fetch_page"))
    }
}
