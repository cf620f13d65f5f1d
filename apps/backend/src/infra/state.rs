use std::sync::Arc;

use crate::config::db::DbProfile;
use crate::config::outbound::OutboundConfig;
use crate::config::stories::StoryCatalog;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::outbound::{HttpGameLauncher, HttpNotifier};
use crate::repos::progress::SeaProgressStore;
use crate::services::conversation::ConversationService;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances from the environment.
/// Handler tests skip this and assemble AppState from fakes directly.
pub struct StateBuilder {
    db_profile: Option<DbProfile>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self { db_profile: None }
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let profile = self
            .db_profile
            .ok_or_else(|| AppError::config("a database profile is required".to_string()))?;

        let stories = Arc::new(StoryCatalog::from_env()?);
        let outbound = OutboundConfig::from_env()?;

        // single entrypoint: build + migrate
        let conn = bootstrap_db(profile).await?;

        let client = reqwest::Client::new();
        let conversations = Arc::new(ConversationService::new(
            Arc::new(SeaProgressStore::new(conn.clone())),
            Arc::new(HttpNotifier::new(client.clone(), outbound.notify_url)),
            Arc::new(HttpGameLauncher::new(client, outbound.game_create_url)),
        ));

        Ok(AppState::new(Some(conn), stories, conversations))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
