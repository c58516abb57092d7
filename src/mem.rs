//! In-memory page source over a `Vec`.
//!
//! The smallest useful [`PageSource`]: items live in memory, pages are fixed
//! slices of the backing vector, the last page may be short. Handy as a test
//! stand-in and as a reference implementation of the source contract.

use anyhow::anyhow;

use crate::errors::{PagedError, Result};
use crate::source::PageSource;

/// A [`PageSource`] serving fixed-size pages out of an owned `Vec<T>`.
///
/// # Example
///
/// ```
/// use pagedseq::{PagedSequence, VecSource};
///
/// let source = VecSource::new(vec![1, 2, 3, 4, 5, 6, 7, 8], 3);
/// let mut seq = PagedSequence::new(source);
/// assert_eq!(seq.get(4).unwrap(), 5);
///
/// let all: Vec<i32> = seq.iter().collect::<Result<_, _>>().unwrap();
/// assert_eq!(all, vec![1, 2, 3, 4, 5, 6, 7, 8]);
/// ```
pub struct VecSource<T> {
    items: Vec<T>,
    page_size: usize,
}

impl<T> VecSource<T> {
    /// Build a source over `items` chunked into pages of `page_size`.
    /// `page_size` must be positive; zero is reported on first use.
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self { items, page_size }
    }
}

impl<T: Clone> PageSource for VecSource<T> {
    type Item = T;

    fn page_size(&self) -> Result<usize> {
        if self.page_size == 0 {
            return Err(PagedError::Source(anyhow!("page size must be positive")));
        }
        Ok(self.page_size)
    }

    fn total_size(&self) -> u64 {
        self.items.len() as u64
    }

    fn fetch_page(&mut self, page_no: u64) -> Result<Vec<T>> {
        let page_size = self.page_size()?;
        let start = (page_no as usize).checked_mul(page_size).ok_or_else(|| {
            PagedError::Source(anyhow!("page number {} overflows", page_no))
        })?;
        if start >= self.items.len() {
            return Err(PagedError::Source(anyhow!(
                "page {} is out of range ({} item(s) total)",
                page_no,
                self.items.len()
            )));
        }
        let end = (start + page_size).min(self.items.len());
        Ok(self.items[start..end].to_vec())
    }
}
