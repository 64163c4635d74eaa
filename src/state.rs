//! Application state

use crate::store::PlayerStore;

/// Shared state for all request handlers. Owned by the composition root and
/// passed as `Arc<AppState>`; the store is injectable so it can be swapped
/// for a real database later.
pub struct AppState {
    pub store: PlayerStore,
    /// Shared bot secret used to verify Telegram initData signatures.
    pub bot_token: String,
}

impl AppState {
    pub fn new(bot_token: String) -> Self {
        Self {
            store: PlayerStore::new(),
            bot_token,
        }
    }
}
