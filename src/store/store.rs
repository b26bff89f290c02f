use std::time::{SystemTime, UNIX_EPOCH};

use super::error::StoreError;
use super::history::HistoryIterator;

/// Store-assigned commit timestamp: seconds since the Unix epoch plus a
/// sub-second component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CommitTime {
    pub seconds: i64,
    pub nanos: u32,
}

impl CommitTime {
    pub fn new(seconds: i64, nanos: u32) -> Self {
        CommitTime { seconds, nanos }
    }

    pub fn now() -> Self {
        Self::from_system_time(SystemTime::now())
    }

    /// Times before the epoch are clamped to the epoch.
    pub fn from_system_time(time: SystemTime) -> Self {
        let elapsed = time.duration_since(UNIX_EPOCH).unwrap_or_default();
        CommitTime {
            seconds: i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX),
            nanos: elapsed.subsec_nanos(),
        }
    }
}

/// One immutable past value of a key, as committed by the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub commit_id: String,
    pub value: Vec<u8>,
    pub commit_time: CommitTime,
}

impl HistoryEntry {
    pub fn new(commit_id: impl Into<String>, value: Vec<u8>, commit_time: CommitTime) -> Self {
        HistoryEntry {
            commit_id: commit_id.into(),
            value,
            commit_time,
        }
    }
}

/// Versioned key-value substrate the ledger is built on.
///
/// Every successful `put_state` replaces the value returned by `get_state`
/// and appends one entry to the key's history. Ordering, durability and
/// isolation across invocations are the store's responsibility.
pub trait LedgerStore: Send + Sync {
    type History: HistoryIterator;

    /// Overwrite the current value at `key`.
    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Current value at `key`, or `None` if nothing was ever written.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Open the commit-ordered history of `key`.
    ///
    /// Returns `None` when the store knows the key was never written. A
    /// known key may still yield an iterator with no entries.
    fn history_for_key(&self, key: &str) -> Result<Option<Self::History>, StoreError>;
}
