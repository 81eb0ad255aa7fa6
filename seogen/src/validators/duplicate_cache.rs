//! Bounded duplicate-detection caches
//!
//! Fixed-capacity insertion-ordered sets. When full, the oldest entry is
//! evicted before a new one is added, so `len() <= capacity()` always holds.
//! Owned by one quality checker for the duration of one run.

use serde::Serialize;
use std::collections::{HashSet, VecDeque};

/// Fixed-capacity set with oldest-first eviction
#[derive(Debug, Clone)]
pub struct BoundedCache {
    order: VecDeque<String>,
    members: HashSet<String>,
    capacity: usize,
}

impl BoundedCache {
    /// Create an empty cache holding at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            order: VecDeque::with_capacity(capacity.min(1024)),
            members: HashSet::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Exact membership test
    pub fn contains(&self, value: &str) -> bool {
        self.members.contains(value)
    }

    /// Insert `value`, evicting the oldest entry if full
    ///
    /// Re-inserting an existing value keeps its original position. Returns
    /// the evicted entry, if any.
    pub fn insert(&mut self, value: String) -> Option<String> {
        if self.capacity == 0 || self.members.contains(&value) {
            return None;
        }

        let evicted = if self.order.len() >= self.capacity {
            self.order.pop_front()
        } else {
            None
        };
        if let Some(old) = &evicted {
            self.members.remove(old);
        }

        self.members.insert(value.clone());
        self.order.push_back(value);
        evicted
    }

    /// Up to `n` entries, newest first
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &str> {
        self.order.iter().rev().take(n).map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }
}

/// Title and description caches for one checker
#[derive(Debug, Clone)]
pub struct DuplicateCaches {
    pub titles: BoundedCache,
    pub descriptions: BoundedCache,
}

impl DuplicateCaches {
    pub fn new(capacity: usize) -> Self {
        Self {
            titles: BoundedCache::new(capacity),
            descriptions: BoundedCache::new(capacity),
        }
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            titles: self.titles.len(),
            descriptions: self.descriptions.len(),
            capacity: self.titles.capacity(),
        }
    }

    pub fn clear(&mut self) {
        self.titles.clear();
        self.descriptions.clear();
    }
}

/// Cache occupancy snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub titles: usize,
    pub descriptions: usize,
    pub capacity: usize,
}
