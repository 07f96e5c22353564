//! Bounded per-player activity history.

use std::collections::VecDeque;

use raid_core::Timestamp;
use serde::{Deserialize, Serialize};

/// One human-readable history line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub at: Timestamp,
    pub message: String,
}

/// Most-recent-first activity history that keeps at most `capacity` entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLog {
    capacity: usize,
    entries: VecDeque<ActivityEntry>,
}

impl ActivityLog {
    pub const DEFAULT_CAPACITY: usize = 50;

    /// Creates an empty log. A capacity of 0 is treated as 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Records `message` as the newest entry, dropping the oldest if full.
    pub fn push(&mut self, at: Timestamp, message: impl Into<String>) {
        self.entries.push_front(ActivityEntry {
            at,
            message: message.into(),
        });
        self.entries.truncate(self.capacity);
    }

    /// Entries from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&ActivityEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_entry_comes_first() {
        let mut log = ActivityLog::new(5);
        log.push(Timestamp::from_secs(1), "first");
        log.push(Timestamp::from_secs(2), "second");

        let messages: Vec<_> = log.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["second", "first"]);
        assert_eq!(log.latest().map(|e| e.at), Some(Timestamp::from_secs(2)));
    }

    #[test]
    fn oldest_entries_are_dropped_at_capacity() {
        let mut log = ActivityLog::new(3);
        for i in 0..10 {
            log.push(Timestamp::from_secs(i), format!("entry {i}"));
        }

        assert_eq!(log.len(), 3);
        let messages: Vec<_> = log.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["entry 9", "entry 8", "entry 7"]);
    }

    #[test]
    fn zero_capacity_keeps_one_entry() {
        let mut log = ActivityLog::new(0);
        log.push(Timestamp::EPOCH, "a");
        log.push(Timestamp::EPOCH, "b");
        assert_eq!(log.len(), 1);
        assert_eq!(log.capacity(), 1);
    }
}
