//! Expiry and eviction policies for the session store

use std::time::{Duration, Instant};

/// Bookkeeping the store keeps next to every game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMeta {
    pub last_access: Instant,
}

impl EntryMeta {
    #[must_use]
    pub const fn new(now: Instant) -> Self {
        Self { last_access: now }
    }

    #[must_use]
    pub fn idle(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_access)
    }
}

/// Decides which games a [`GameStore`](super::GameStore) drops
pub trait EvictionPolicy {
    /// Whether an entry should be dropped regardless of capacity
    fn is_expired(&self, meta: &EntryMeta, now: Instant) -> bool;

    /// Pick an entry to drop before inserting a new one
    ///
    /// `entries` are the live entries at insertion time. Returning `None`
    /// means there is room.
    fn select_victim<'a>(&self, entries: &[(&'a str, &'a EntryMeta)]) -> Option<&'a str>;
}

/// Drop entries idle for `ttl`, and the least recently used one when full
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LruTtl {
    pub capacity: usize,
    pub ttl: Duration,
}

impl LruTtl {
    pub const DEFAULT_CAPACITY: usize = 1024;
    pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

    #[must_use]
    pub const fn new(capacity: usize, ttl: Duration) -> Self {
        Self { capacity, ttl }
    }
}

impl Default for LruTtl {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY, Self::DEFAULT_TTL)
    }
}

impl EvictionPolicy for LruTtl {
    fn is_expired(&self, meta: &EntryMeta, now: Instant) -> bool {
        meta.idle(now) >= self.ttl
    }

    fn select_victim<'a>(&self, entries: &[(&'a str, &'a EntryMeta)]) -> Option<&'a str> {
        if entries.len() < self.capacity.max(1) {
            return None;
        }
        entries
            .iter()
            .min_by_key(|(_, meta)| meta.last_access)
            .map(|(key, _)| *key)
    }
}

/// Keep everything forever, like a plain map
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unbounded;

impl EvictionPolicy for Unbounded {
    fn is_expired(&self, _meta: &EntryMeta, _now: Instant) -> bool {
        false
    }

    fn select_victim<'a>(&self, _entries: &[(&'a str, &'a EntryMeta)]) -> Option<&'a str> {
        None
    }
}
