//! Leaderboard handler

use crate::models::LeaderboardResponse;
use crate::state::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

pub async fn get_leaderboard(State(state): State<Arc<AppState>>) -> Json<LeaderboardResponse> {
    Json(LeaderboardResponse {
        success: true,
        leaderboard: state.store.leaderboard(),
    })
}
