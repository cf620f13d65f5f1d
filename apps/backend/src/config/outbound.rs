use std::env;

use crate::error::AppError;

/// Endpoints for the two outbound ports.
#[derive(Debug, Clone)]
pub struct OutboundConfig {
    /// Game-creation service endpoint (receives the completed roster).
    pub game_create_url: String,
    /// Notification endpoint (subscribes a phone to a prompt template).
    pub notify_url: String,
}

impl OutboundConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            game_create_url: must_var("MUSTER_GAME_CREATE_URL")?,
            notify_url: must_var("MUSTER_NOTIFY_URL")?,
        })
    }
}

/// Get required environment variable or return error
pub(crate) fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
