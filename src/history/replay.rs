//! History replay - renders a key's full provenance as one JSON document.

use serde::Serialize;
use serde_json::value::RawValue;

use crate::ledger::LedgerError;
use crate::store::{HistoryCursor, HistoryEntry, LedgerStore};

use super::commit_time::render_commit_time;

/// One rendered history entry. `value` is the committed document embedded
/// verbatim.
#[derive(Serialize)]
struct HistoryLine<'a> {
    #[serde(rename = "commitId")]
    commit_id: &'a str,
    value: &'a RawValue,
    #[serde(rename = "commitTime")]
    commit_time: String,
}

/// Accumulates `[e1,e2,...]` one entry at a time. Dropped unfinished on
/// any failure, so a truncated document never escapes.
struct HistoryBuffer {
    bytes: Vec<u8>,
    entries: usize,
}

impl HistoryBuffer {
    fn new() -> Self {
        HistoryBuffer {
            bytes: vec![b'['],
            entries: 0,
        }
    }

    fn push(&mut self, id: &str, entry: &HistoryEntry) -> Result<(), LedgerError> {
        let text = std::str::from_utf8(&entry.value).map_err(|e| {
            LedgerError::serialization(id, format!("commit {}: {}", entry.commit_id, e))
        })?;
        let value: &RawValue = serde_json::from_str(text).map_err(|e| {
            LedgerError::serialization(id, format!("commit {}: {}", entry.commit_id, e))
        })?;
        let commit_time = render_commit_time(entry.commit_time).ok_or_else(|| {
            LedgerError::serialization(
                id,
                format!(
                    "commit {}: commit time {}s {}ns out of range",
                    entry.commit_id, entry.commit_time.seconds, entry.commit_time.nanos
                ),
            )
        })?;

        if self.entries > 0 {
            self.bytes.push(b',');
        }
        let line = HistoryLine {
            commit_id: &entry.commit_id,
            value,
            commit_time,
        };
        serde_json::to_writer(&mut self.bytes, &line)
            .map_err(|e| LedgerError::serialization(id, e.to_string()))?;
        self.entries += 1;
        Ok(())
    }

    fn finish(mut self) -> Vec<u8> {
        self.bytes.push(b']');
        self.bytes
    }
}

/// Replay every committed value of `id`, oldest first, as a JSON array of
/// `{"commitId", "value", "commitTime"}` objects.
///
/// The iterator's order is taken as commit order and is not re-sorted. A
/// key the store has never seen is `NotFound`; a known key with no entries
/// renders `[]`. Any failure while iterating aborts the whole replay. The
/// store iterator is released exactly once on every path.
pub fn replay<S: LedgerStore>(store: &S, id: &str) -> Result<Vec<u8>, LedgerError> {
    let history = store
        .history_for_key(id)
        .map_err(|e| {
            tracing::warn!(id, error = %e, "failed to open history");
            LedgerError::from(e)
        })?
        .ok_or_else(|| LedgerError::not_found(id))?;

    let mut cursor = HistoryCursor::new(id, history);
    let mut buffer = HistoryBuffer::new();

    for entry in cursor.by_ref() {
        let entry = entry.map_err(|e| {
            tracing::warn!(id, error = %e, "history iteration failed");
            LedgerError::from(e)
        })?;
        buffer.push(id, &entry)?;
    }
    cursor.release()?;

    tracing::debug!(id, entries = buffer.entries, "history replayed");
    Ok(buffer.finish())
}
