use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One in-flight creation conversation per alpha; rows exist only between
/// conversation start and resolution.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "conversation_progress")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub alpha_phone: String,
    #[sea_orm(column_name = "alpha_display_name")]
    pub alpha_display_name: String,
    #[sea_orm(column_name = "story_id")]
    pub story_id: String,
    #[sea_orm(column_name = "story_type")]
    pub story_type: String,
    #[sea_orm(column_name = "game_mode")]
    pub game_mode: Option<String>,
    #[sea_orm(column_name = "beta_phone_0")]
    pub beta_phone_0: Option<String>,
    #[sea_orm(column_name = "beta_phone_1")]
    pub beta_phone_1: Option<String>,
    #[sea_orm(column_name = "beta_phone_2")]
    pub beta_phone_2: Option<String>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
