//! Progress store: the durable per-alpha conversation record.
//!
//! The trait is the seam the conversation service works against; the
//! SeaORM implementation delegates to the `progress_sea` adapter and maps
//! rows to domain values. `update` and `remove` are idempotent: zero
//! rows affected means the record was already gone, which is converged
//! state, logged for observability only.

use std::str::FromStr;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::warn;

use crate::adapters::progress_sea as progress_adapter;
use crate::adapters::progress_sea::{ProgressBetasUpdate, ProgressCreate};
use crate::config::stories::StoryType;
use crate::domain::phone::PhoneNumber;
use crate::domain::progress::{BetaSlots, ConversationProgress};
use crate::entities::conversation_progress;
use crate::errors::domain::DomainError;
use crate::logging::pii::Redacted;

#[async_trait]
pub trait ProgressStore: Send + Sync {
    async fn find_by_alpha(
        &self,
        alpha: &PhoneNumber,
    ) -> Result<Option<ConversationProgress>, DomainError>;

    async fn create(&self, progress: &ConversationProgress) -> Result<(), DomainError>;

    /// Replace the mutable fields of the record keyed by the alpha phone.
    async fn update(&self, progress: &ConversationProgress) -> Result<(), DomainError>;

    async fn remove(&self, alpha: &PhoneNumber) -> Result<(), DomainError>;
}

/// SeaORM-backed store over the `conversation_progress` table.
pub struct SeaProgressStore {
    db: DatabaseConnection,
}

impl SeaProgressStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProgressStore for SeaProgressStore {
    async fn find_by_alpha(
        &self,
        alpha: &PhoneNumber,
    ) -> Result<Option<ConversationProgress>, DomainError> {
        let row = progress_adapter::find_by_alpha(&self.db, alpha.as_str()).await?;
        row.map(to_domain).transpose()
    }

    async fn create(&self, progress: &ConversationProgress) -> Result<(), DomainError> {
        let [b0, b1, b2] = beta_columns(&progress.betas);
        progress_adapter::insert(
            &self.db,
            ProgressCreate {
                alpha_phone: progress.alpha_phone.as_str().to_string(),
                alpha_display_name: progress.alpha_display_name.clone(),
                story_id: progress.story_id.clone(),
                story_type: progress.story_type.as_str().to_string(),
                game_mode: progress.game_mode.clone(),
                beta_phone_0: b0,
                beta_phone_1: b1,
                beta_phone_2: b2,
            },
        )
        .await?;
        Ok(())
    }

    async fn update(&self, progress: &ConversationProgress) -> Result<(), DomainError> {
        let [b0, b1, b2] = beta_columns(&progress.betas);
        let rows = progress_adapter::update_betas(
            &self.db,
            ProgressBetasUpdate {
                alpha_phone: progress.alpha_phone.as_str().to_string(),
                beta_phone_0: b0,
                beta_phone_1: b1,
                beta_phone_2: b2,
            },
        )
        .await?;
        if rows == 0 {
            warn!(
                alpha = %Redacted(progress.alpha_phone.as_str()),
                "progress update matched no record; treating as already resolved"
            );
        }
        Ok(())
    }

    async fn remove(&self, alpha: &PhoneNumber) -> Result<(), DomainError> {
        let rows = progress_adapter::delete_by_alpha(&self.db, alpha.as_str()).await?;
        if rows == 0 {
            warn!(
                alpha = %Redacted(alpha.as_str()),
                "progress removal matched no record; treating as already resolved"
            );
        }
        Ok(())
    }
}

fn beta_columns(betas: &BetaSlots) -> [Option<String>; 3] {
    betas
        .as_array()
        .map(|slot| slot.map(|phone| phone.as_str().to_string()))
}

/// Convert a stored row into the domain record. Rows that fail here were
/// not written by this code path and are surfaced as data corruption.
fn to_domain(model: conversation_progress::Model) -> Result<ConversationProgress, DomainError> {
    let alpha_phone = PhoneNumber::parse(&model.alpha_phone)
        .map_err(|_| DomainError::data_corruption("stored alpha phone is not canonical"))?;
    let story_type = StoryType::from_str(&model.story_type)
        .map_err(|_| DomainError::data_corruption("stored story type is not recognized"))?;

    let parse_beta = |column: Option<String>| -> Result<Option<PhoneNumber>, DomainError> {
        column
            .map(|raw| {
                PhoneNumber::parse(&raw)
                    .map_err(|_| DomainError::data_corruption("stored beta phone is not canonical"))
            })
            .transpose()
    };

    let betas = BetaSlots::from_columns(
        parse_beta(model.beta_phone_0)?,
        parse_beta(model.beta_phone_1)?,
        parse_beta(model.beta_phone_2)?,
    )?;

    Ok(ConversationProgress {
        alpha_phone,
        alpha_display_name: model.alpha_display_name,
        story_id: model.story_id,
        story_type,
        game_mode: model.game_mode,
        betas,
    })
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn row() -> conversation_progress::Model {
        conversation_progress::Model {
            alpha_phone: "+15551230000".to_string(),
            alpha_display_name: "+15551230000".to_string(),
            story_id: "101".to_string(),
            story_type: "competitive-story".to_string(),
            game_mode: None,
            beta_phone_0: Some("+15552340001".to_string()),
            beta_phone_1: None,
            beta_phone_2: None,
            created_at: datetime!(2026-08-06 12:00 UTC),
            updated_at: datetime!(2026-08-06 12:00 UTC),
        }
    }

    #[test]
    fn test_row_converts_to_domain() {
        let progress = to_domain(row()).unwrap();
        assert_eq!(progress.alpha_phone.as_str(), "+15551230000");
        assert_eq!(progress.story_type, StoryType::CompetitiveStory);
        assert_eq!(progress.betas.filled(), 1);
    }

    #[test]
    fn test_row_with_gap_is_corruption() {
        let mut model = row();
        model.beta_phone_0 = None;
        model.beta_phone_1 = Some("+15552340002".to_string());
        assert!(to_domain(model).is_err());
    }

    #[test]
    fn test_row_with_unknown_story_type_is_corruption() {
        let mut model = row();
        model.story_type = "most-likely-to".to_string();
        assert!(to_domain(model).is_err());
    }

    #[test]
    fn test_beta_columns_mirror_slots() {
        let progress = to_domain(row()).unwrap();
        let [b0, b1, b2] = beta_columns(&progress.betas);
        assert_eq!(b0.as_deref(), Some("+15552340001"));
        assert_eq!(b1, None);
        assert_eq!(b2, None);
    }
}
