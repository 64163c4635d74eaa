//! Player state handlers

use crate::models::{ErrorDetail, PlayerResponse, SaveRequest, SaveResponse};
use crate::state::AppState;
use crate::telegram::verify_init_data;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Save a player's full game state. The record replaces any previous one for
/// the same user and the leaderboard is refreshed in the same operation.
pub async fn save_player(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SaveRequest>,
) -> Result<Json<SaveResponse>, (StatusCode, Json<ErrorDetail>)> {
    if let Err(err) = verify_init_data(&req.telegram_data, &state.bot_token) {
        warn!(
            "Rejected save for user {}: {}",
            req.player_data.user_id, err
        );
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorDetail::invalid_authorization()),
        ));
    }

    let user_id = req.player_data.user_id;
    state.store.save(req.player_data);
    info!("Saved player state for user {}", user_id);

    Ok(Json(SaveResponse { success: true }))
}

/// Fetch a player's saved state. An unknown id is a 200 with
/// `success: false`, not an HTTP error.
pub async fn get_player(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Json<PlayerResponse> {
    match state.store.get(user_id) {
        Some(player_data) => Json(PlayerResponse {
            success: true,
            player_data: Some(player_data),
            error: None,
        }),
        None => Json(PlayerResponse {
            success: false,
            player_data: None,
            error: Some("Player not found".to_string()),
        }),
    }
}
