//! Game creation port: submits a completed roster to the creation
//! service.

use async_trait::async_trait;
use serde::Serialize;
use tracing::info;

use crate::domain::progress::ConversationProgress;
use crate::outbound::OutboundError;

/// Wire payload for the creation endpoint. Unset beta slots are sent as
/// empty strings - the endpoint expects all three fields present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameCreateRequest {
    pub alpha_phone: String,
    pub alpha_display_name: String,
    pub beta_phone_0: String,
    pub beta_phone_1: String,
    pub beta_phone_2: String,
    pub story_id: String,
    pub story_type: String,
}

impl From<&ConversationProgress> for GameCreateRequest {
    fn from(progress: &ConversationProgress) -> Self {
        let [b0, b1, b2] = progress
            .betas
            .as_array()
            .map(|slot| slot.map_or_else(String::new, |phone| phone.as_str().to_string()));

        Self {
            alpha_phone: progress.alpha_phone.as_str().to_string(),
            alpha_display_name: progress.alpha_display_name.clone(),
            beta_phone_0: b0,
            beta_phone_1: b1,
            beta_phone_2: b2,
            story_id: progress.story_id.clone(),
            story_type: progress.story_type.as_str().to_string(),
        }
    }
}

#[async_trait]
pub trait GameLauncher: Send + Sync {
    /// Ask the creation service to start the game. At-most-once effort:
    /// the caller deletes the progress record whether or not this
    /// succeeds.
    async fn create_game(&self, progress: &ConversationProgress) -> Result<(), OutboundError>;
}

/// HTTP launcher posting to the game-creation endpoint.
pub struct HttpGameLauncher {
    client: reqwest::Client,
    url: String,
}

impl HttpGameLauncher {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl GameLauncher for HttpGameLauncher {
    async fn create_game(&self, progress: &ConversationProgress) -> Result<(), OutboundError> {
        let payload = GameCreateRequest::from(progress);
        let response = self.client.post(&self.url).form(&payload).send().await?;

        let status = response.status();
        info!(status = status.as_u16(), "game creation request posted");
        if !status.is_success() {
            return Err(OutboundError::Status(status.as_u16()));
        }
        Ok(())
    }
}
