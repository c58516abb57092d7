//! seq — the paged-sequence core, modular layout.
//!
//! Submodules:
//! - core.rs  — PagedSequence: bounds checks, offset math, fetch-on-miss.
//! - cache.rs — PageCache: page_no -> items map, monotonic, hit/miss counters.
//! - iter.rs  — PagedIter: restartable forward passes sharing the cache.

pub mod core;
pub mod iter;

pub(crate) mod cache;

// Re-exports for external API
pub use self::core::PagedSequence;
pub use self::iter::PagedIter;
