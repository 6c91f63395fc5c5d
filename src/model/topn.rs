//! Bounded, key-unique ranking sorted by value.
//!
//! Entries are kept in a `Vec` ordered by value descending. A new key goes on
//! top of the entries that share its value; an incremented key is re-sorted
//! stably and lands below the entries that already held its new value.
//! Trimming drops from the tail.

use serde::Serialize;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankEntry {
    pub key: String,
    pub value: u64,
}

impl RankEntry {
    pub fn new(key: impl Into<String>, value: u64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Ranking table shared between threads. Every call holds the table lock for
/// its whole duration and never takes a second table's lock while holding it.
#[derive(Debug)]
pub struct TopNTable {
    capacity: usize,
    entries: Mutex<Vec<RankEntry>>,
}

impl TopNTable {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(Vec::new()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<u64> {
        self.lock().iter().find(|e| e.key == key).map(|e| e.value)
    }

    /// Increment `key` by `delta`, inserting it if absent, then trim to capacity.
    pub fn add(&self, key: &str, delta: u64) {
        let mut entries = self.lock();
        upsert(&mut entries, key, delta);
        entries.truncate(self.capacity);
    }

    /// Sum `other` into `self` and trim to `self`'s capacity.
    ///
    /// No trimming happens until every entry of `other` is in, so an entry is
    /// never evicted just because the incoming entries have not been summed yet.
    pub fn merge(&self, other: &TopNTable) {
        let incoming = other.snapshot();

        let mut entries = self.lock();
        for entry in &incoming {
            upsert(&mut entries, &entry.key, entry.value);
        }
        entries.truncate(self.capacity);
    }

    /// First `min(k, capacity, len)` entries in rank order.
    pub fn top_k(&self, k: usize) -> Vec<RankEntry> {
        let entries = self.lock();
        let n = k.min(self.capacity).min(entries.len());
        entries[..n].to_vec()
    }

    /// All entries in rank order.
    pub fn snapshot(&self) -> Vec<RankEntry> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RankEntry>> {
        // Entries are valid after every individual step of an update.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn upsert(entries: &mut Vec<RankEntry>, key: &str, delta: u64) {
    match entries.iter().position(|e| e.key == key) {
        Some(pos) => {
            let mut entry = entries.remove(pos);
            entry.value = entry.value.saturating_add(delta);
            // Stable: stays below entries that already had the new value.
            let at = entries.partition_point(|e| e.value >= entry.value);
            entries.insert(at, entry);
        }
        None => {
            // Newest first among equals.
            let at = entries.partition_point(|e| e.value > delta);
            entries.insert(at, RankEntry::new(key, delta));
        }
    }
}
