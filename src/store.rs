//! In-memory player store and leaderboard projection
//!
//! Proof-of-concept storage: a process-local map of player records plus a
//! derived leaderboard kept sorted on every write. State is lost on restart.

use crate::models::{LeaderboardEntry, PlayerRecord};
use parking_lot::RwLock;
use std::cmp::Reverse;
use std::collections::HashMap;

#[derive(Default)]
struct StoreInner {
    players: HashMap<i64, PlayerRecord>,
    leaderboard: Vec<LeaderboardEntry>,
}

/// Keyed store of player records with an always-sorted leaderboard view.
///
/// A single lock guards both collections so a `save` is atomic with respect
/// to concurrent readers; the leaderboard user_id set always equals the
/// player map key set.
#[derive(Default)]
pub struct PlayerStore {
    inner: RwLock<StoreInner>,
}

impl PlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a player record, fully replacing any existing record for the
    /// same `user_id`, and refresh the leaderboard projection. The re-sort
    /// is stable: equal-energy entries keep their prior relative order.
    pub fn save(&self, record: PlayerRecord) {
        let mut inner = self.inner.write();

        match inner
            .leaderboard
            .iter_mut()
            .find(|entry| entry.user_id == record.user_id)
        {
            Some(entry) => {
                entry.name = record.name.clone();
                entry.energy = record.energy;
                entry.level = record.level;
            }
            None => inner.leaderboard.push(LeaderboardEntry::from(&record)),
        }
        inner.leaderboard.sort_by_key(|entry| Reverse(entry.energy));

        inner.players.insert(record.user_id, record);
    }

    /// Fetch a player record. Unknown ids are `None`, not an error.
    pub fn get(&self, user_id: i64) -> Option<PlayerRecord> {
        self.inner.read().players.get(&user_id).cloned()
    }

    /// Snapshot of the current leaderboard ordering.
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        self.inner.read().leaderboard.clone()
    }

    pub fn player_count(&self) -> usize {
        self.inner.read().players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.player_count() == 0
    }
}
