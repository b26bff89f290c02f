use std::fmt;

use serde::{Deserialize, Serialize};

/// Error when stored bytes cannot be read back as a [`Record`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordError {
    pub message: String,
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record error: {}", self.message)
    }
}

impl std::error::Error for RecordError {}

impl From<serde_json::Error> for RecordError {
    fn from(err: serde_json::Error) -> Self {
        RecordError {
            message: err.to_string(),
        }
    }
}

/// Current known state of one tracked unit.
///
/// Field order and the renamed keys are the persisted layout
/// (`pigid`, `timestamp`, `company`, `actionname`) and must stay stable
/// for existing ledger data. Every field, `action` included, is always
/// written. Documents committed without `actionname` still read back,
/// with an empty action.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "pigid")]
    pub id: String,
    pub timestamp: String,
    #[serde(rename = "company")]
    pub custodian: String,
    #[serde(rename = "actionname", default)]
    pub action: String,
}

impl Record {
    /// No validation beyond what the types enforce: empty strings and
    /// free-form timestamps are accepted as given.
    pub fn build(
        id: impl Into<String>,
        custodian: impl Into<String>,
        action: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Record {
            id: id.into(),
            timestamp: timestamp.into(),
            custodian: custodian.into(),
            action: action.into(),
        }
    }

    pub fn serialize(&self) -> Result<Vec<u8>, RecordError> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn deserialize(bytes: &[u8]) -> Result<Self, RecordError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
