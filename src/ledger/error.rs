use std::fmt;

use crate::store::StoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Nothing was ever written for this id.
    NotFound { id: String },
    /// The store failed on read, write or iteration.
    Store(StoreError),
    /// Stored bytes for this id could not be rendered.
    Serialization { id: String, message: String },
}

impl LedgerError {
    pub fn not_found(id: &str) -> Self {
        LedgerError::NotFound { id: id.to_string() }
    }

    pub fn serialization(id: &str, message: impl Into<String>) -> Self {
        LedgerError::Serialization {
            id: id.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::NotFound { id } => write!(f, "could not locate record {}", id),
            LedgerError::Store(e) => write!(f, "store error: {}", e),
            LedgerError::Serialization { id, message } => {
                write!(f, "serialization error for record {}: {}", id, message)
            }
        }
    }
}

impl std::error::Error for LedgerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LedgerError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for LedgerError {
    fn from(err: StoreError) -> Self {
        LedgerError::Store(err)
    }
}
