//! Error taxonomy for paged sequences.
//!
//! Design:
//! - Every failure a caller may want to branch on gets its own variant;
//!   matching on `PagedError` is the supported way to distinguish them.
//! - `Source` is deliberately opaque: whatever the page source raised while
//!   fetching is carried through unchanged (no retry, no wrapping policy here).
//! - Normal end of iteration is NOT an error; iterators signal it with `None`.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T, E = PagedError> = std::result::Result<T, E>;

/// Everything that can go wrong when indexing or iterating a paged sequence.
#[derive(Debug, Error)]
pub enum PagedError {
    /// The supplied index could not be represented as an integer offset.
    /// Checked before any bounds validation.
    #[error("Index must be a positive integer: {0}")]
    InvalidArgument(String),

    /// Integer index is negative or past the end of the sequence.
    #[error("Index out of bounds: {0}")]
    OutOfBounds(i64),

    /// Write/delete attempt on a read-only sequence. Permanent, not transient.
    #[error("{0} is not allowed: the sequence is read-only")]
    Unsupported(&'static str),

    /// A required page-source method was not supplied by the implementation.
    /// This is an integration bug, not a runtime data condition.
    #[error("{0}() must be implemented by the page source")]
    NotImplemented(&'static str),

    /// Opaque failure raised by the page source while fetching a page.
    /// Propagated unchanged; no cache entry is stored for the failed page.
    #[error(transparent)]
    Source(#[from] anyhow::Error),
}

impl PagedError {
    /// True for the two index-validation failures (`InvalidArgument`,
    /// `OutOfBounds`), as opposed to source/integration failures.
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            PagedError::InvalidArgument(_) | PagedError::OutOfBounds(_)
        )
    }
}
