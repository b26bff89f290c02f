//! Command routing - maps operation names to ledger operations.
//!
//! Requests carry an operation name and positional string arguments. The
//! router resolves the name to an [`Operation`], checks its arity, and only
//! then touches the store.
//!
//! | Operation | Args                                | Success payload          |
//! |-----------|-------------------------------------|--------------------------|
//! | `init`    | none                                | `Init Success`           |
//! | `query`   | id                                  | serialized record        |
//! | `record`  | id, custodian, action, timestamp    | `Add Success`            |
//! | `history` | id                                  | JSON array of commits    |

mod config;
mod error;
mod operation;
mod request;
mod router;

pub use config::{RouterConfig, SeedMode};
pub use error::HandlerError;
pub use operation::Operation;
pub use request::{Request, Response};
pub use router::{Router, INIT_ACK, RECORD_ACK};
