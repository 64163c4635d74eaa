//! API handlers

pub mod health;
pub mod leaderboard;
pub mod player;
pub mod telegram_auth;
