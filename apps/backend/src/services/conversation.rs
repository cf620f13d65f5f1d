//! Conversation orchestration - bridges the pure decision function with
//! the store and the outbound ports.
//!
//! One turn is: store read, synchronous decision, store write and/or
//! creation call, notification send - each awaited in sequence. Nothing
//! here fails the turn: store and downstream errors are logged and the
//! turn simply makes no further progress, which self-heals when the user
//! sends their next message.

use std::sync::Arc;

use tracing::error;

use crate::domain::engine::{self, Action, Prompt};
use crate::logging::pii::Redacted;
use crate::outbound::{GameLauncher, Notifier};
use crate::repos::progress::ProgressStore;
use crate::services::turn_locks::AlphaLocks;
use crate::services::validation::ValidTurn;

pub struct ConversationService {
    store: Arc<dyn ProgressStore>,
    notifier: Arc<dyn Notifier>,
    launcher: Arc<dyn GameLauncher>,
    locks: AlphaLocks,
}

impl ConversationService {
    pub fn new(
        store: Arc<dyn ProgressStore>,
        notifier: Arc<dyn Notifier>,
        launcher: Arc<dyn GameLauncher>,
    ) -> Self {
        Self {
            store,
            notifier,
            launcher,
            locks: AlphaLocks::new(),
        }
    }

    /// Process one validated turn end to end. Turns for the same alpha
    /// are applied strictly in arrival order.
    pub async fn handle_turn(&self, turn: ValidTurn) {
        let key = turn.seed.alpha_phone.as_str().to_string();
        self.locks.serialize(&key, self.process(turn)).await;
    }

    async fn process(&self, turn: ValidTurn) {
        let existing = match self.store.find_by_alpha(&turn.seed.alpha_phone).await {
            Ok(existing) => existing,
            Err(e) => {
                error!(
                    error = %e,
                    alpha = %Redacted(turn.seed.alpha_phone.as_str()),
                    "progress lookup failed; turn dropped"
                );
                return;
            }
        };

        let action = match engine::decide(existing, &turn.message_text, &turn.seed) {
            Action::RecordCreated(created) => {
                if let Err(e) = self.store.create(&created).await {
                    error!(
                        error = %e,
                        alpha = %Redacted(turn.seed.alpha_phone.as_str()),
                        "progress creation failed; turn dropped"
                    );
                    return;
                }
                // The first inbound message is consumed to seed the shell
                // record; evaluate the same message against it so the
                // user does not have to repeat themselves.
                engine::decide(Some(created), &turn.message_text, &turn.seed)
            }
            other => other,
        };

        self.dispatch(action, &turn).await;
    }

    async fn dispatch(&self, action: Action, turn: &ValidTurn) {
        match action {
            // decide() only creates from an absent record, and the
            // re-evaluation above always passes one.
            Action::RecordCreated(_) => {}
            Action::Prompt(prompt) => self.send_prompt(turn, prompt).await,
            Action::UpdateAndPrompt(progress, prompt) => {
                if let Err(e) = self.store.update(&progress).await {
                    error!(
                        error = %e,
                        alpha = %Redacted(progress.alpha_phone.as_str()),
                        "progress update failed; no prompt this turn"
                    );
                    return;
                }
                self.send_prompt(turn, prompt).await;
            }
            Action::CreateGame(progress) => {
                if let Err(e) = self.launcher.create_game(&progress).await {
                    // No rollback: the conversation is resolved either way.
                    error!(
                        error = %e,
                        alpha = %Redacted(progress.alpha_phone.as_str()),
                        "game creation request failed"
                    );
                }
                if let Err(e) = self.store.remove(&progress.alpha_phone).await {
                    error!(
                        error = %e,
                        alpha = %Redacted(progress.alpha_phone.as_str()),
                        "progress removal failed"
                    );
                }
            }
        }
    }

    async fn send_prompt(&self, turn: &ValidTurn, prompt: Prompt) {
        let template = turn.story.mobile_create.template_for(prompt);
        if let Err(e) = self
            .notifier
            .send_prompt(&turn.seed.alpha_phone, template)
            .await
        {
            error!(
                error = %e,
                alpha = %Redacted(turn.seed.alpha_phone.as_str()),
                template,
                "prompt delivery failed"
            );
        }
    }
}
