use pagedseq::{PageSource, PagedError, PagedSequence, Result, VecSource};

// Минимальная заглушка: ни один метод не переопределён.
struct Bare;

impl PageSource for Bare {
    type Item = u32;
}

#[test]
fn default_total_size_yields_an_empty_sequence() {
    let mut seq = PagedSequence::new(Bare);
    assert_eq!(seq.len(), 0);
    assert!(seq.is_empty());
    assert!(!seq.contains(0));

    // Every index is rejected by bounds checking, so the un-overridden
    // fetch_page is never reached.
    assert!(matches!(seq.get(0), Err(PagedError::OutOfBounds(0))));
    assert!(matches!(seq.get(5), Err(PagedError::OutOfBounds(5))));
    assert_eq!(seq.iter().count(), 0, "nothing to iterate");
    assert_eq!(seq.stats().misses, 0, "fetch_page must never be invoked");
}

#[test]
fn default_page_size_fails_fast() {
    let seq = PagedSequence::new(Bare);
    assert!(matches!(
        seq.page_size(),
        Err(PagedError::NotImplemented("page_size"))
    ));
}

// total_size объявлен, fetch_page — нет: доступ внутри границ должен упасть
// с NotImplemented, а не молча.
struct NoFetchImpl;

impl PageSource for NoFetchImpl {
    type Item = u32;

    fn page_size(&self) -> Result<usize> {
        Ok(2)
    }

    fn total_size(&self) -> u64 {
        4
    }
}

#[test]
fn default_fetch_page_fails_fast_on_first_real_access() {
    let mut seq = PagedSequence::new(NoFetchImpl);
    assert!(matches!(
        seq.get(0),
        Err(PagedError::NotImplemented("fetch_page"))
    ));
}

#[test]
fn set_always_fails_with_unsupported() {
    let mut seq = PagedSequence::new(VecSource::new(vec![1u32, 2, 3, 4], 2));
    // Valid and invalid offsets alike.
    assert!(matches!(seq.set(0, 9), Err(PagedError::Unsupported(_))));
    assert!(matches!(seq.set(-1, 9), Err(PagedError::Unsupported(_))));
    assert!(matches!(seq.set(100, 9), Err(PagedError::Unsupported(_))));
    // Nothing was mutated.
    assert_eq!(seq.get(0).unwrap(), 1);
}

#[test]
fn delete_always_fails_with_unsupported() {
    let mut seq = PagedSequence::new(VecSource::new(vec![1u32, 2, 3, 4], 2));
    assert!(matches!(seq.delete(0), Err(PagedError::Unsupported(_))));
    assert!(matches!(seq.delete(100), Err(PagedError::Unsupported(_))));
    assert_eq!(seq.len(), 4);
    assert_eq!(seq.get(3).unwrap(), 4);
}

#[test]
fn unsupported_errors_name_the_operation() {
    let mut seq = PagedSequence::new(VecSource::new(vec![1u32], 1));
    let err = seq.set(0, 0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "setting values is not allowed: the sequence is read-only"
    );
    let err = seq.delete(0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "deleting values is not allowed: the sequence is read-only"
    );
}
