//! Telegram initData validation handler

use crate::models::{ErrorDetail, ValidateRequest, ValidateResponse};
use crate::state::AppState;
use crate::telegram::verify_init_data;
use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use tracing::warn;

pub async fn validate_telegram(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ValidateRequest>,
) -> Result<Json<ValidateResponse>, (StatusCode, Json<ErrorDetail>)> {
    match verify_init_data(&req.telegram_data, &state.bot_token) {
        Ok(user_data) => Ok(Json(ValidateResponse {
            valid: true,
            user_data,
        })),
        Err(err) => {
            warn!("Rejected Telegram init data: {}", err);
            Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorDetail::invalid_authorization()),
            ))
        }
    }
}
