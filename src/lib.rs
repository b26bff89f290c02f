//! Custody tracking over a versioned key-value ledger.
//!
//! Each tracked unit is a [`Record`] stored under its id. Writes replace the
//! current value, while the store keeps every committed value so the full
//! provenance of an id can be replayed with [`replay`].

mod history;
mod ledger;
mod record;
mod router;
mod store;

pub use history::{render_commit_time, replay};
pub use ledger::{fixtures, Ledger, LedgerError, LedgerExt, FIXTURES};
pub use record::{Record, RecordError};
pub use router::{
    HandlerError, Operation, Request, Response, Router, RouterConfig, SeedMode, INIT_ACK,
    RECORD_ACK,
};
pub use store::{
    CommitTime, HistoryCursor, HistoryEntry, HistoryIterator, InMemoryHistory,
    InMemoryLedgerStore, LedgerStore, StoreError,
};
