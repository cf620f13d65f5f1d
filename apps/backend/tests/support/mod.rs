//! In-memory fakes and a small harness for conversation-flow tests.
#![allow(dead_code)] // each test binary uses a different subset

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use backend::config::stories::StoryCatalog;
use backend::domain::phone::PhoneNumber;
use backend::domain::progress::{BetaSlots, ConversationProgress};
use backend::errors::domain::{DomainError, InfraErrorKind};
use backend::outbound::game_create::GameCreateRequest;
use backend::outbound::{GameLauncher, Notifier, OutboundError};
use backend::repos::progress::ProgressStore;
use backend::services::conversation::ConversationService;
use backend::services::validation::{self, InboundTurn, ValidTurn};

pub const CATALOG_JSON: &str = r#"{
    "competitive": {
        "101": {
            "name": "Bully Text",
            "mobile_create": {
                "not_enough_players": "oip-1",
                "ask_beta_1": "oip-2",
                "ask_beta_2": "oip-3",
                "invalid_mobile": "oip-4"
            }
        }
    }
}"#;

/// Store fake over a HashMap, with switches to simulate an outage.
#[derive(Default)]
pub struct InMemoryProgressStore {
    rows: Mutex<HashMap<String, ConversationProgress>>,
    pub fail_finds: AtomicBool,
    pub fail_updates: AtomicBool,
}

impl InMemoryProgressStore {
    pub async fn seed(&self, progress: ConversationProgress) {
        self.rows
            .lock()
            .await
            .insert(progress.alpha_phone.as_str().to_string(), progress);
    }

    pub async fn get(&self, alpha: &PhoneNumber) -> Option<ConversationProgress> {
        self.rows.lock().await.get(alpha.as_str()).cloned()
    }

    pub async fn len(&self) -> usize {
        self.rows.lock().await.len()
    }
}

fn unavailable() -> DomainError {
    DomainError::infra(InfraErrorKind::DbUnavailable, "store offline")
}

#[async_trait]
impl ProgressStore for InMemoryProgressStore {
    async fn find_by_alpha(
        &self,
        alpha: &PhoneNumber,
    ) -> Result<Option<ConversationProgress>, DomainError> {
        if self.fail_finds.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        Ok(self.rows.lock().await.get(alpha.as_str()).cloned())
    }

    async fn create(&self, progress: &ConversationProgress) -> Result<(), DomainError> {
        self.rows
            .lock()
            .await
            .insert(progress.alpha_phone.as_str().to_string(), progress.clone());
        Ok(())
    }

    async fn update(&self, progress: &ConversationProgress) -> Result<(), DomainError> {
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        // Idempotent: updating a missing row is converged state.
        let mut rows = self.rows.lock().await;
        if let Some(existing) = rows.get_mut(progress.alpha_phone.as_str()) {
            existing.betas = progress.betas.clone();
        }
        Ok(())
    }

    async fn remove(&self, alpha: &PhoneNumber) -> Result<(), DomainError> {
        self.rows.lock().await.remove(alpha.as_str());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send_prompt(
        &self,
        phone: &PhoneNumber,
        template_id: &str,
    ) -> Result<(), OutboundError> {
        self.sent
            .lock()
            .await
            .push((phone.as_str().to_string(), template_id.to_string()));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingLauncher {
    pub launched: Mutex<Vec<GameCreateRequest>>,
}

#[async_trait]
impl GameLauncher for RecordingLauncher {
    async fn create_game(&self, progress: &ConversationProgress) -> Result<(), OutboundError> {
        self.launched.lock().await.push(GameCreateRequest::from(progress));
        Ok(())
    }
}

/// Everything a conversation-flow test needs, wired over the fakes.
pub struct Harness {
    pub store: Arc<InMemoryProgressStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub launcher: Arc<RecordingLauncher>,
    pub service: Arc<ConversationService>,
    pub catalog: StoryCatalog,
}

impl Harness {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryProgressStore::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let launcher = Arc::new(RecordingLauncher::default());
        let service = Arc::new(ConversationService::new(
            store.clone(),
            notifier.clone(),
            launcher.clone(),
        ));
        let catalog = StoryCatalog::from_json(CATALOG_JSON).unwrap();
        Self {
            store,
            notifier,
            launcher,
            service,
            catalog,
        }
    }

    /// A validated turn from `alpha` carrying `message`, against story 101.
    pub fn turn(&self, alpha: &str, message: &str) -> ValidTurn {
        validation::validate_turn(
            &self.catalog,
            InboundTurn {
                story_id: Some("101".to_string()),
                story_type: Some("competitive-story".to_string()),
                game_mode: None,
                alpha_phone: Some(alpha.to_string()),
                message_text: Some(message.to_string()),
            },
        )
        .unwrap()
    }

    pub async fn sent_templates(&self) -> Vec<String> {
        self.notifier
            .sent
            .lock()
            .await
            .iter()
            .map(|(_, template)| template.clone())
            .collect()
    }
}

pub fn phone(s: &str) -> PhoneNumber {
    PhoneNumber::parse(s).unwrap()
}

/// A stored record for `alpha` with the given betas, seeded from story 101.
pub fn record(alpha: &str, betas: BetaSlots) -> ConversationProgress {
    let mut progress = ConversationProgress::start(&backend::domain::progress::TurnSeed {
        alpha_phone: phone(alpha),
        story_id: "101".to_string(),
        story_type: "competitive-story".parse().unwrap(),
        game_mode: None,
    });
    progress.betas = betas;
    progress
}
