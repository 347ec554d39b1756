//! Bounded, newest-first log of the translations made during this session.

use super::model::TranslationRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of translations retained in history.
pub const HISTORY_CAPACITY: usize = 10;

/// Stable identifier of a history entry. Positions shift as entries come and
/// go, ids never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: EntryId,
    #[serde(flatten)]
    pub record: TranslationRecord,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
    next_id: u64,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
            next_id: 1,
        }
    }

    /// Insert a record at the front, evicting the oldest entries beyond capacity.
    pub fn append(&mut self, record: TranslationRecord) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;

        self.entries.push_front(HistoryEntry {
            id,
            record,
            created_at: Utc::now(),
        });

        if self.entries.len() > self.capacity {
            let evicted = self.entries.len() - self.capacity;
            self.entries.truncate(self.capacity);
            tracing::debug!(evicted, capacity = self.capacity, "History trimmed");
        }

        id
    }

    /// Remove the entry at a position. Out-of-range positions are a no-op.
    pub fn delete_at(&mut self, index: usize) -> Option<HistoryEntry> {
        self.entries.remove(index)
    }

    /// Remove the entry with the given id. Unknown or already deleted ids are
    /// a no-op.
    pub fn delete(&mut self, id: EntryId) -> Option<HistoryEntry> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        self.entries.remove(index)
    }

    pub fn get(&self, id: EntryId) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Entries in newest-first order.
    pub fn all(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}
