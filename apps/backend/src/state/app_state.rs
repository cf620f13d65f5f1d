use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::stories::StoryCatalog;
use crate::services::conversation::ConversationService;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Database connection (absent in handler tests that run on fakes)
    pub db: Option<DatabaseConnection>,
    pub stories: Arc<StoryCatalog>,
    pub conversations: Arc<ConversationService>,
}

impl AppState {
    pub fn new(
        db: Option<DatabaseConnection>,
        stories: Arc<StoryCatalog>,
        conversations: Arc<ConversationService>,
    ) -> Self {
        Self {
            db,
            stories,
            conversations,
        }
    }
}
