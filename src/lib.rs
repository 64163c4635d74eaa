//! Kombat Yoga API server
//!
//! Backend for a Telegram WebApp clicker mini-game:
//! - Verifies Telegram `initData` signed payloads (HMAC-SHA256)
//! - Keeps per-player game state in an in-memory store
//! - Maintains a leaderboard projection sorted by energy
//!
//! Key invariants:
//! - Every mutating request passes signature verification first
//! - The leaderboard always holds exactly one entry per stored player
//! - Store state lives only for the process lifetime (proof of concept)

pub mod api;
pub mod models;
pub mod state;
pub mod store;
pub mod telegram;

pub use state::AppState;
pub use store::PlayerStore;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Build the API router. Static-file services and middleware layers are
/// attached by the composition root; tests drive this router directly.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(api::health::health_check))
        .route(
            "/api/validate-telegram",
            post(api::telegram_auth::validate_telegram),
        )
        .route("/api/player/save", post(api::player::save_player))
        .route("/api/player/:user_id", get(api::player::get_player))
        .route("/api/leaderboard", get(api::leaderboard::get_leaderboard))
        .with_state(state)
}
