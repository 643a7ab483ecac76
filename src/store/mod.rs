//! In-memory session store for hosts that serve many games
//!
//! The store owns one [`GameState`] per session key and delegates expiry and
//! capacity decisions to an [`EvictionPolicy`]. It does no locking; a host
//! that shares it between threads wraps it in its own mutex.

mod policy;

pub use policy::{EntryMeta, EvictionPolicy, LruTtl, Unbounded};

use crate::game::GameState;
use rustc_hash::FxHashMap;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug)]
struct Entry {
    game: GameState,
    meta: EntryMeta,
}

/// Keyed games with pluggable eviction
#[derive(Debug)]
pub struct GameStore<P: EvictionPolicy = LruTtl> {
    entries: FxHashMap<String, Entry>,
    policy: P,
}

impl<P: EvictionPolicy + Default> Default for GameStore<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<P: EvictionPolicy> GameStore<P> {
    #[must_use]
    pub fn new(policy: P) -> Self {
        Self {
            entries: FxHashMap::default(),
            policy,
        }
    }

    #[must_use]
    pub const fn policy(&self) -> &P {
        &self.policy
    }

    /// Store `game` under `key`, returning the game it replaced
    ///
    /// Expired entries are purged first; if the policy still reports the store
    /// full, its chosen victim is dropped.
    pub fn insert(&mut self, key: impl Into<String>, game: GameState) -> Option<GameState> {
        self.insert_at(key.into(), game, Instant::now())
    }

    /// Look up a game, refreshing its recency
    pub fn get(&mut self, key: &str) -> Option<&GameState> {
        self.get_mut_at(key, Instant::now()).map(|game| &*game)
    }

    /// Look up a game for modification, refreshing its recency
    pub fn get_mut(&mut self, key: &str) -> Option<&mut GameState> {
        self.get_mut_at(key, Instant::now())
    }

    pub fn remove(&mut self, key: &str) -> Option<GameState> {
        self.entries.remove(key).map(|entry| entry.game)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every expired entry, returning how many were dropped
    pub fn purge_expired(&mut self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    fn insert_at(&mut self, key: String, game: GameState, now: Instant) -> Option<GameState> {
        self.purge_expired_at(now);

        if !self.entries.contains_key(&key) {
            let victim = {
                let live: Vec<(&str, &EntryMeta)> = self
                    .entries
                    .iter()
                    .map(|(key, entry)| (key.as_str(), &entry.meta))
                    .collect();
                self.policy.select_victim(&live).map(str::to_string)
            };
            if let Some(victim) = victim {
                info!(session = %victim, "Evicting least recently used session");
                self.entries.remove(&victim);
            }
        }

        debug!(session = %key, stored = self.entries.len() + 1, "Session stored");
        self.entries
            .insert(
                key,
                Entry {
                    game,
                    meta: EntryMeta::new(now),
                },
            )
            .map(|entry| entry.game)
    }

    fn get_mut_at(&mut self, key: &str, now: Instant) -> Option<&mut GameState> {
        let expired = self
            .entries
            .get(key)
            .is_some_and(|entry| self.policy.is_expired(&entry.meta, now));
        if expired {
            debug!(session = %key, "Session expired");
            self.entries.remove(key);
            return None;
        }

        let entry = self.entries.get_mut(key)?;
        entry.meta.last_access = now;
        Some(&mut entry.game)
    }

    fn purge_expired_at(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let policy = &self.policy;
        self.entries
            .retain(|_, entry| !policy.is_expired(&entry.meta, now));
        let purged = before - self.entries.len();
        if purged > 0 {
            debug!(purged, remaining = self.entries.len(), "Expired sessions purged");
        }
        purged
    }
}
