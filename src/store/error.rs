use std::fmt;

/// Failure reported by the ledger store collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached at all.
    Unavailable(String),
    /// A point read failed.
    Read { key: String, message: String },
    /// A write was not accepted.
    Write { key: String, message: String },
    /// Advancing a history iterator failed.
    Iteration { key: String, message: String },
    /// Releasing a history iterator failed.
    Release { key: String, message: String },
    LockPoisoned(&'static str),
}

impl StoreError {
    pub fn read(key: &str, message: impl Into<String>) -> Self {
        StoreError::Read {
            key: key.to_string(),
            message: message.into(),
        }
    }

    pub fn write(key: &str, message: impl Into<String>) -> Self {
        StoreError::Write {
            key: key.to_string(),
            message: message.into(),
        }
    }

    pub fn iteration(key: &str, message: impl Into<String>) -> Self {
        StoreError::Iteration {
            key: key.to_string(),
            message: message.into(),
        }
    }

    pub fn release(key: &str, message: impl Into<String>) -> Self {
        StoreError::Release {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(message) => write!(f, "store unavailable: {}", message),
            StoreError::Read { key, message } => {
                write!(f, "failed to read key {}: {}", key, message)
            }
            StoreError::Write { key, message } => {
                write!(f, "failed to write key {}: {}", key, message)
            }
            StoreError::Iteration { key, message } => {
                write!(f, "failed to iterate history of key {}: {}", key, message)
            }
            StoreError::Release { key, message } => {
                write!(f, "failed to release history of key {}: {}", key, message)
            }
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}
