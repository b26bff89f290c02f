//! Ledger store - the versioned key-value collaborator.
//!
//! The core only talks to the store through [`LedgerStore`]: point reads,
//! point writes, and a per-key history iterator that must be released once
//! the caller is done with it.
//!
//! ## Example
//!
//! ```ignore
//! use custody_ledger::{HistoryCursor, InMemoryLedgerStore, LedgerStore};
//!
//! let store = InMemoryLedgerStore::new();
//! store.put_state("A", b"{}".to_vec())?;
//!
//! if let Some(history) = store.history_for_key("A")? {
//!     for entry in HistoryCursor::new("A", history) {
//!         println!("{}", entry?.commit_id);
//!     }
//! }
//! ```

mod error;
mod history;
mod in_memory;
mod store;

pub use error::StoreError;
pub use history::{HistoryCursor, HistoryIterator};
pub use in_memory::{InMemoryHistory, InMemoryLedgerStore};
pub use store::{CommitTime, HistoryEntry, LedgerStore};
