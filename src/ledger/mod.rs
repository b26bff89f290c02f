//! Ledger access - typed get/put over the record model.
//!
//! ## Example
//!
//! ```ignore
//! use custody_ledger::{InMemoryLedgerStore, LedgerExt, Record};
//!
//! let store = InMemoryLedgerStore::new();
//! store.ledger().put("D", &Record::build("D", "ACME", "WEIGH", "2020-01-01"))?;
//! let current = store.ledger().get("D")?;
//! let history = store.ledger().history("D")?;
//! ```

mod error;
mod fixtures;
mod ledger;

pub use error::LedgerError;
pub use fixtures::{fixtures, FIXTURES};
pub use ledger::{Ledger, LedgerExt};
