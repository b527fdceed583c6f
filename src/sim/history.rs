//! Bounded height history feeding the chart (newest first)

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::consts::HISTORY_CAPACITY;

/// Most-recent-first heights, never longer than `capacity`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryBuffer {
    values: VecDeque<f64>,
    capacity: usize,
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl HistoryBuffer {
    /// Empty buffer holding at most `capacity` heights (at least one)
    ///
    /// Storage is reserved for the default history only; larger buffers grow
    /// as heights arrive.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            values: VecDeque::with_capacity(capacity.min(HISTORY_CAPACITY).saturating_add(1)),
            capacity,
        }
    }

    /// Record a new height at the head, dropping the oldest if over capacity
    pub fn push_front(&mut self, value: f64) {
        self.values.push_front(value);
        self.evict_if_over_capacity();
    }

    /// Drop tail entries until the capacity invariant holds
    ///
    /// Pushes add one entry at a time, so this removes at most one entry in
    /// normal operation.
    pub fn evict_if_over_capacity(&mut self) {
        while self.values.len() > self.capacity {
            self.values.pop_back();
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Newest height
    pub fn latest(&self) -> Option<f64> {
        self.values.front().copied()
    }

    /// Heights from newest to oldest
    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}
