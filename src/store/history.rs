//! Lazy, non-restartable history sequences and their scoped release.

use super::error::StoreError;
use super::store::HistoryEntry;

/// A store-side cursor over one key's history, oldest commit first.
///
/// The sequence is finite and cannot be rewound. `close` must be called
/// exactly once when the caller is done; wrap the iterator in a
/// [`HistoryCursor`] to get that for free.
pub trait HistoryIterator {
    fn has_next(&mut self) -> bool;

    fn next_entry(&mut self) -> Result<HistoryEntry, StoreError>;

    fn close(&mut self) -> Result<(), StoreError>;
}

/// Owns a [`HistoryIterator`] and releases it exactly once: explicitly via
/// [`HistoryCursor::release`], or on drop for every other exit path.
///
/// Iterating yields `Result`s; the cursor fuses after the first error.
pub struct HistoryCursor<I: HistoryIterator> {
    key: String,
    inner: Option<I>,
    failed: bool,
}

impl<I: HistoryIterator> HistoryCursor<I> {
    pub fn new(key: impl Into<String>, inner: I) -> Self {
        HistoryCursor {
            key: key.into(),
            inner: Some(inner),
            failed: false,
        }
    }

    /// Release the underlying iterator now and surface any release error.
    pub fn release(mut self) -> Result<(), StoreError> {
        self.close_inner()
    }

    fn close_inner(&mut self) -> Result<(), StoreError> {
        match self.inner.take() {
            Some(mut inner) => inner.close(),
            None => Ok(()),
        }
    }
}

impl<I: HistoryIterator> Iterator for HistoryCursor<I> {
    type Item = Result<HistoryEntry, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let inner = self.inner.as_mut()?;
        if !inner.has_next() {
            return None;
        }
        let item = inner.next_entry();
        self.failed = item.is_err();
        Some(item)
    }
}

impl<I: HistoryIterator> Drop for HistoryCursor<I> {
    fn drop(&mut self) {
        if let Err(e) = self.close_inner() {
            tracing::warn!(key = %self.key, error = %e, "history iterator release failed");
        }
    }
}
