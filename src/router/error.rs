//! Error types for routed operations.

use std::error::Error;
use std::fmt;

use crate::ledger::LedgerError;
use crate::store::StoreError;

use super::operation::Operation;

/// Failure of a routed operation. Every message names the operation and,
/// where there is one, the offending id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// No operation with this name.
    UnknownOperation(String),
    /// Wrong number of arguments; nothing was touched.
    ArgumentCount {
        operation: Operation,
        expected: usize,
        actual: usize,
    },
    /// No record was ever written for this id.
    NotFound { operation: Operation, id: String },
    /// The store failed on read, write or iteration.
    Store {
        operation: Operation,
        source: StoreError,
    },
    /// Stored bytes could not be rendered.
    Serialization {
        operation: Operation,
        id: String,
        message: String,
    },
}

impl HandlerError {
    pub fn from_ledger(operation: Operation, err: LedgerError) -> Self {
        match err {
            LedgerError::NotFound { id } => HandlerError::NotFound { operation, id },
            LedgerError::Store(source) => HandlerError::Store { operation, source },
            LedgerError::Serialization { id, message } => HandlerError::Serialization {
                operation,
                id,
                message,
            },
        }
    }

    /// Shim-style status code for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::UnknownOperation(_) => 400,
            HandlerError::ArgumentCount { .. } => 400,
            HandlerError::NotFound { .. } => 404,
            HandlerError::Store { .. } => 500,
            HandlerError::Serialization { .. } => 500,
        }
    }
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerError::UnknownOperation(name) => {
                write!(f, "unknown operation: {:?}", name)
            }
            HandlerError::ArgumentCount {
                operation,
                expected,
                actual,
            } => write!(
                f,
                "incorrect number of arguments for {}: expecting {}, got {}",
                operation, expected, actual
            ),
            HandlerError::NotFound { operation, id } => {
                write!(f, "{}: could not locate record {}", operation, id)
            }
            HandlerError::Store { operation, source } => {
                write!(f, "{}: {}", operation, source)
            }
            HandlerError::Serialization {
                operation,
                id,
                message,
            } => write!(f, "{}: cannot render record {}: {}", operation, id, message),
        }
    }
}

impl Error for HandlerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HandlerError::Store { source, .. } => Some(source),
            _ => None,
        }
    }
}
