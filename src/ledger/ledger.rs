//! Ledger - typed record access over a [`LedgerStore`].

use crate::history;
use crate::record::Record;
use crate::store::LedgerStore;

use super::error::LedgerError;
use super::fixtures::fixtures;

/// Typed accessor for records held in a ledger store.
///
/// Borrowed per call site; holds no state of its own.
pub struct Ledger<'a, S> {
    store: &'a S,
}

impl<'a, S: LedgerStore> Ledger<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Overwrite the current record at `id`. The store appends a history
    /// entry as a side effect. Timestamps are not required to increase.
    pub fn put(&self, id: &str, record: &Record) -> Result<(), LedgerError> {
        let bytes = record
            .serialize()
            .map_err(|e| LedgerError::serialization(id, e.message))?;
        self.store.put_state(id, bytes).map_err(|e| {
            tracing::warn!(id, error = %e, "record write failed");
            LedgerError::from(e)
        })
    }

    /// Current record at `id`.
    pub fn get(&self, id: &str) -> Result<Record, LedgerError> {
        let bytes = self
            .store
            .get_state(id)
            .map_err(|e| {
                tracing::warn!(id, error = %e, "record read failed");
                LedgerError::from(e)
            })?
            .ok_or_else(|| LedgerError::not_found(id))?;
        Record::deserialize(&bytes).map_err(|e| LedgerError::serialization(id, e.message))
    }

    /// Write the fixed demo records, each keyed by its own id.
    pub fn seed_fixtures(&self) -> Result<usize, LedgerError> {
        let records = fixtures();
        for record in &records {
            self.put(&record.id, record)?;
            tracing::debug!(id = %record.id, "seeded fixture");
        }
        tracing::info!(count = records.len(), "ledger seeded with fixtures");
        Ok(records.len())
    }

    /// Commit-ordered history of `id` as a JSON array document.
    pub fn history(&self, id: &str) -> Result<Vec<u8>, LedgerError> {
        history::replay(self.store, id)
    }
}

/// Extension trait for typed record access on any LedgerStore.
pub trait LedgerExt: LedgerStore + Sized {
    fn ledger(&self) -> Ledger<'_, Self> {
        Ledger::new(self)
    }
}

impl<S: LedgerStore> LedgerExt for S {}
