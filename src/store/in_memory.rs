//! InMemoryLedgerStore - HashMap-backed versioned store for tests and demos.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::error::StoreError;
use super::history::HistoryIterator;
use super::store::{CommitTime, HistoryEntry, LedgerStore};

#[derive(Default)]
struct State {
    current: HashMap<String, Vec<u8>>,
    history: HashMap<String, Vec<HistoryEntry>>,
    sequence: u64,
    last_commit: CommitTime,
}

impl State {
    fn next_commit(&mut self) -> (String, CommitTime) {
        self.sequence += 1;
        // Commit times never run backwards, even if the wall clock does.
        let now = CommitTime::now().max(self.last_commit);
        self.last_commit = now;
        (format!("{:064x}", self.sequence), now)
    }
}

/// In-memory versioned store.
///
/// Keeps the current value per key plus an append-only history of every
/// committed value. Clone-friendly via Arc: clones share the same ledger.
#[derive(Clone, Default)]
pub struct InMemoryLedgerStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of commits accepted so far, across all keys.
    pub fn commit_count(&self) -> Result<u64, StoreError> {
        let state = self
            .state
            .read()
            .map_err(|_| StoreError::LockPoisoned("commit count"))?;
        Ok(state.sequence)
    }

    /// Keys with a current value, in no particular order.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        let state = self
            .state
            .read()
            .map_err(|_| StoreError::LockPoisoned("keys"))?;
        Ok(state.current.keys().cloned().collect())
    }
}

impl LedgerStore for InMemoryLedgerStore {
    type History = InMemoryHistory;

    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| StoreError::LockPoisoned("put"))?;

        let (commit_id, commit_time) = state.next_commit();
        state
            .history
            .entry(key.to_string())
            .or_default()
            .push(HistoryEntry::new(commit_id, value.clone(), commit_time));
        state.current.insert(key.to_string(), value);
        Ok(())
    }

    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let state = self
            .state
            .read()
            .map_err(|_| StoreError::LockPoisoned("get"))?;
        Ok(state.current.get(key).cloned())
    }

    fn history_for_key(&self, key: &str) -> Result<Option<InMemoryHistory>, StoreError> {
        let state = self
            .state
            .read()
            .map_err(|_| StoreError::LockPoisoned("history"))?;
        Ok(state
            .history
            .get(key)
            .map(|entries| InMemoryHistory::new(key, entries.clone())))
    }
}

/// Point-in-time snapshot of one key's history.
///
/// Commits made after the iterator was opened are not observed.
pub struct InMemoryHistory {
    key: String,
    entries: std::vec::IntoIter<HistoryEntry>,
    closed: bool,
}

impl InMemoryHistory {
    fn new(key: &str, entries: Vec<HistoryEntry>) -> Self {
        InMemoryHistory {
            key: key.to_string(),
            entries: entries.into_iter(),
            closed: false,
        }
    }
}

impl HistoryIterator for InMemoryHistory {
    fn has_next(&mut self) -> bool {
        !self.closed && !self.entries.as_slice().is_empty()
    }

    fn next_entry(&mut self) -> Result<HistoryEntry, StoreError> {
        if self.closed {
            return Err(StoreError::iteration(&self.key, "iterator already closed"));
        }
        self.entries
            .next()
            .ok_or_else(|| StoreError::iteration(&self.key, "no more entries"))
    }

    fn close(&mut self) -> Result<(), StoreError> {
        if self.closed {
            return Err(StoreError::release(&self.key, "iterator already closed"));
        }
        self.closed = true;
        Ok(())
    }
}
