//! Undo history.
//!
//! Every entry is a full copy of the element collection taken before a
//! mutation. Undo restores a snapshot wholesale and never looks inside
//! elements. Memory is bounded by the entry limit and diagrams are small,
//! so no diff log is kept. There is no redo stack.

use std::collections::VecDeque;

use rinkkit_core::constants::HISTORY_LIMIT;

use crate::model::RinkElement;

/// One pre-mutation copy of the element collection.
pub type Snapshot = Vec<RinkElement>;

/// Bounded FIFO of snapshots; the oldest entry is dropped first.
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
    entries: VecDeque<Snapshot>,
    limit: usize,
}

impl SnapshotHistory {
    /// Creates a history holding at most `limit` snapshots (minimum 1).
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Records a snapshot, discarding the oldest one when full.
    pub fn push(&mut self, snapshot: Snapshot) {
        if self.entries.len() == self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(snapshot);
    }

    /// Removes and returns the most recent snapshot.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop_back()
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for SnapshotHistory {
    fn default() -> Self {
        Self::new(HISTORY_LIMIT)
    }
}
