//! pagedseq — treat a page-chunked, expensive-to-fetch collection as one
//! flat, read-only, iterable sequence.
//!
//! A [`PageSource`] delivers fixed-size pages (the last may be short); a
//! [`PagedSequence`] maps flat offsets onto (page, slot) pairs, fetches each
//! page at most once, and exposes random access plus restartable forward
//! iteration over the cached pages.

// Базовые модули
pub mod errors;
pub mod metrics;
pub mod source;

// Модульная раскладка ядра (папка с mod.rs)
pub mod seq; // src/seq/{mod,core,cache,iter}.rs

// In-memory источник для тестов и примеров
pub mod mem;

// Удобные реэкспорты
pub use errors::{PagedError, Result};
pub use mem::VecSource;
pub use metrics::CacheStats;
pub use seq::{PagedIter, PagedSequence};
pub use source::PageSource;
