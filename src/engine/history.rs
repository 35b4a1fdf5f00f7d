//! Bounded undo history.
//!
//! A fixed-capacity ring of full-state snapshots with explicit
//! overwrite-oldest semantics. Snapshots are pushed only when a pickup is
//! validated and discarded (not replayed) when the attempted move is
//! cancelled or rejected, so only completed moves are ever undoable.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::zones::{Foundations, StockPile, Tableau};

/// Deep copy of every zone container plus the counters that travel with a
/// move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tableau: Tableau,
    pub foundations: Foundations,
    pub stock: StockPile,
    pub move_count: u32,
}

/// Ring of at most `UndoHistory::DEPTH` snapshots, oldest evicted first.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UndoHistory {
    ring: VecDeque<Snapshot>,
}

impl UndoHistory {
    /// Maximum number of retained snapshots.
    pub const DEPTH: usize = 3;

    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ring: VecDeque::with_capacity(Self::DEPTH),
        }
    }

    /// Number of snapshots currently retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Push a snapshot, evicting the oldest once the ring is full.
    pub fn push(&mut self, snapshot: Snapshot) {
        if self.ring.len() == Self::DEPTH {
            self.ring.pop_front();
        }
        self.ring.push_back(snapshot);
    }

    /// Pop the most recent snapshot.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.ring.pop_back()
    }

    /// Drop the most recent snapshot without restoring it.
    pub fn discard_latest(&mut self) {
        self.ring.pop_back();
    }

    /// Clear all history.
    pub fn clear(&mut self) {
        self.ring.clear();
    }
}
