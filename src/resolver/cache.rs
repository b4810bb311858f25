//! Bounded lookup cache for resolved suffixes.
//!
//! Thread-safe via DashMap. Each entry records the tick of its last use and
//! the least recently used entry is evicted once capacity is reached.

use crate::resolver::suffixes::Suffixes;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Default number of cached lookups.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Cache key: the domain exactly as queried plus the ICANN-only flag.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct CacheKey {
    domain: String,
    icann_only: bool,
}

impl CacheKey {
    fn new(domain: &str, icann_only: bool) -> Self {
        Self {
            domain: domain.to_string(),
            icann_only,
        }
    }
}

#[derive(Debug)]
struct CacheEntry {
    suffixes: Suffixes,
    last_used: AtomicU64,
}

/// LRU cache of `(domain, icann_only) -> Suffixes`.
#[derive(Debug)]
pub struct SuffixCache {
    entries: DashMap<CacheKey, CacheEntry>,
    capacity: usize,
    clock: AtomicU64,
}

impl Default for SuffixCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl SuffixCache {
    /// Create a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: DashMap::with_capacity(capacity),
            capacity,
            clock: AtomicU64::new(0),
        }
    }

    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::Relaxed)
    }

    /// Look up a cached result, marking it as recently used.
    pub fn get(&self, domain: &str, icann_only: bool) -> Option<Suffixes> {
        let entry = self.entries.get(&CacheKey::new(domain, icann_only))?;
        entry.last_used.store(self.tick(), Ordering::Relaxed);
        Some(entry.suffixes.clone())
    }

    /// Store a result, evicting the least recently used entries if full.
    pub fn insert(&self, domain: &str, icann_only: bool, suffixes: Suffixes) {
        if self.capacity == 0 {
            return;
        }

        let entry = CacheEntry {
            suffixes,
            last_used: AtomicU64::new(self.tick()),
        };
        self.entries.insert(CacheKey::new(domain, icann_only), entry);

        while self.entries.len() > self.capacity {
            if !self.evict_lru() {
                break;
            }
        }
    }

    /// Remove the least recently used entry. Returns false once the cache is
    /// empty. A concurrent eviction of the same entry still counts as progress.
    fn evict_lru(&self) -> bool {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|entry| entry.value().last_used.load(Ordering::Relaxed))
            .map(|entry| entry.key().clone());

        // The iterator guard is dropped before removing to avoid a shard deadlock.
        match oldest {
            Some(key) => {
                tracing::trace!(domain = %key.domain, "evicting cached suffixes");
                self.entries.remove(&key);
                true
            }
            None => false,
        }
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

    pub fn clear(&self) {
        self.entries.clear();
    }
}
