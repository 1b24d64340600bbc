//! In-memory trend cache.
//!
//! A small LRU with a TTL. News signals go stale within the hour, entries
//! are cheap, and the working set is bounded by the number of distinct
//! main keywords a session touches, so a capped map with a recency tick
//! beats anything fancier.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::TrendSnapshot;

struct CacheEntry {
    snapshot: TrendSnapshot,
    inserted: Instant,
    tick: u64,
}

/// A capacity-bounded, TTL-expiring cache of trend snapshots.
pub struct TrendCache {
    entries: HashMap<String, CacheEntry>,
    capacity: usize,
    ttl: Duration,
    clock: u64,
}

impl TrendCache {
    /// Creates a cache holding at most `capacity` entries, each valid for
    /// `ttl` after insertion.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        TrendCache {
            entries: HashMap::new(),
            capacity,
            ttl,
            clock: 0,
        }
    }

    /// Looks up a fresh snapshot, marking it most recently used.
    ///
    /// An expired entry is removed and reported as a miss.
    pub fn get(&mut self, keyword: &str) -> Option<TrendSnapshot> {
        let expired = self.entries.get(keyword)?.inserted.elapsed() >= self.ttl;
        if expired {
            self.entries.remove(keyword);
            return None;
        }
        self.clock += 1;
        let entry = self.entries.get_mut(keyword)?;
        entry.tick = self.clock;
        Some(entry.snapshot.clone())
    }

    /// Inserts a snapshot, evicting the least recently used entry when at
    /// capacity.
    pub fn insert(&mut self, keyword: String, snapshot: TrendSnapshot) {
        if self.capacity == 0 {
            return;
        }
        if !self.entries.contains_key(&keyword) && self.entries.len() >= self.capacity {
            if let Some(oldest) = self
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.tick)
                .map(|(key, _)| key.clone())
            {
                self.entries.remove(&oldest);
            }
        }
        self.clock += 1;
        self.entries.insert(
            keyword,
            CacheEntry {
                snapshot,
                inserted: Instant::now(),
                tick: self.clock,
            },
        );
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of live entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
