//! Router - resolves an operation name and dispatches to the ledger.
//!
//! ## Example
//!
//! ```ignore
//! use custody_ledger::{InMemoryLedgerStore, Request, Router};
//!
//! let router = Router::new(InMemoryLedgerStore::new());
//! router.invoke(&Request::new("record", ["D", "ACME", "WEIGH", "2020-01-01"]));
//! let response = router.invoke(&Request::new("history", ["D"]));
//! ```

use crate::ledger::{Ledger, LedgerError};
use crate::record::Record;
use crate::store::LedgerStore;

use super::config::{RouterConfig, SeedMode};
use super::error::HandlerError;
use super::operation::Operation;
use super::request::{Request, Response};

/// Payload returned by a successful `init`.
pub const INIT_ACK: &[u8] = b"Init Success";
/// Payload returned by a successful `record`.
pub const RECORD_ACK: &[u8] = b"Add Success";

/// Routes requests to ledger operations over an injected store.
///
/// Holds no mutable state; every call is an independent unit of work.
pub struct Router<S> {
    store: S,
    config: RouterConfig,
}

impl<S: LedgerStore> Router<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, RouterConfig::default())
    }

    pub fn with_config(store: S, config: RouterConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Resolve `function` and check the argument count. Runs before any
    /// store call.
    pub fn resolve(&self, function: &str, arg_count: usize) -> Result<Operation, HandlerError> {
        let operation = Operation::resolve(function, self.config.legacy_names)
            .ok_or_else(|| HandlerError::UnknownOperation(function.to_string()))?;
        if arg_count != operation.arity() {
            return Err(HandlerError::ArgumentCount {
                operation,
                expected: operation.arity(),
                actual: arg_count,
            });
        }
        Ok(operation)
    }

    /// Dispatch an operation by name.
    pub fn dispatch(&self, function: &str, args: &[String]) -> Result<Vec<u8>, HandlerError> {
        let operation = self.resolve(function, args.len()).map_err(|e| {
            tracing::debug!(function, error = %e, "rejected request");
            e
        })?;
        tracing::debug!(%operation, args = args.len(), "dispatching");

        let ledger = Ledger::new(&self.store);
        let result = match operation {
            Operation::Init => self.init(&ledger),
            Operation::Query => Self::query(&ledger, &args[0]),
            Operation::Record => Self::record(&ledger, &args[0], &args[1], &args[2], &args[3]),
            Operation::History => ledger.history(&args[0]),
        };
        result.map_err(|e| HandlerError::from_ledger(operation, e))
    }

    /// Dispatch a request and fold the outcome into a response.
    pub fn invoke(&self, request: &Request) -> Response {
        match self.dispatch(&request.function, &request.args) {
            Ok(payload) => Response::ok(payload),
            Err(e) => Response::from(e),
        }
    }

    fn init(&self, ledger: &Ledger<'_, S>) -> Result<Vec<u8>, LedgerError> {
        if self.config.seed == SeedMode::Fixtures {
            ledger.seed_fixtures()?;
        }
        Ok(INIT_ACK.to_vec())
    }

    fn query(ledger: &Ledger<'_, S>, id: &str) -> Result<Vec<u8>, LedgerError> {
        ledger
            .get(id)?
            .serialize()
            .map_err(|e| LedgerError::serialization(id, e.message))
    }

    fn record(
        ledger: &Ledger<'_, S>,
        id: &str,
        custodian: &str,
        action: &str,
        timestamp: &str,
    ) -> Result<Vec<u8>, LedgerError> {
        let record = Record::build(id, custodian, action, timestamp);
        ledger.put(id, &record)?;
        Ok(RECORD_ACK.to_vec())
    }
}
