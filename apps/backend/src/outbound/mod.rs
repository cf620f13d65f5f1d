//! Outbound ports: game creation and prompt notification.
//!
//! Both are fire-and-forget boundaries - callers log failures and move
//! on; nothing here is retried or rolled back.

pub mod game_create;
pub mod notify;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutboundError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status: {0}")]
    Status(u16),
}

impl From<reqwest::Error> for OutboundError {
    fn from(e: reqwest::Error) -> Self {
        OutboundError::Transport(e.to_string())
    }
}

pub use game_create::{GameLauncher, HttpGameLauncher};
pub use notify::{HttpNotifier, Notifier};
