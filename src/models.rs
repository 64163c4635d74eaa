//! Data models for the Kombat Yoga API

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// PLAYER
// ============================================================================

/// Full per-player game state. Saved as a whole on every write; there is no
/// partial update or deletion path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Telegram user id (unique key)
    pub user_id: i64,
    pub name: String,
    pub energy: i64,
    pub level: i32,
    /// IDs of unlocked poses
    pub poses: Vec<i32>,
    /// IDs of purchased upgrades
    pub upgrades: Vec<i32>,
}

/// Projection of `PlayerRecord` shown on the leaderboard. Exactly one entry
/// per stored player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: i64,
    pub name: String,
    pub energy: i64,
    pub level: i32,
}

impl From<&PlayerRecord> for LeaderboardEntry {
    fn from(record: &PlayerRecord) -> Self {
        Self {
            user_id: record.user_id,
            name: record.name.clone(),
            energy: record.energy,
            level: record.level,
        }
    }
}

// ============================================================================
// REQUESTS / RESPONSES
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ValidateRequest {
    pub telegram_data: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub user_data: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaveRequest {
    pub telegram_data: String,
    pub player_data: PlayerRecord,
}

#[derive(Debug, Clone, Serialize)]
pub struct SaveResponse {
    pub success: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_data: Option<PlayerRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardResponse {
    pub success: bool,
    pub leaderboard: Vec<LeaderboardEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Unix epoch seconds, fractional
    pub timestamp: f64,
}

/// Error body for rejected requests, shaped like the frontend expects
/// (`{"detail": "..."}`).
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn invalid_authorization() -> Self {
        Self {
            detail: "Invalid authorization data".to_string(),
        }
    }
}
