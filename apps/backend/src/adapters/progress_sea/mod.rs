//! SeaORM adapter for the progress store - generic over ConnectionTrait.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

use crate::entities::conversation_progress;

pub mod dto;

pub use dto::{ProgressBetasUpdate, ProgressCreate};

// Adapter functions return DbErr; the repos layer maps to DomainError.

pub async fn find_by_alpha<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    alpha_phone: &str,
) -> Result<Option<conversation_progress::Model>, sea_orm::DbErr> {
    conversation_progress::Entity::find_by_id(alpha_phone.to_string())
        .one(conn)
        .await
}

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ProgressCreate,
) -> Result<conversation_progress::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = conversation_progress::ActiveModel {
        alpha_phone: Set(dto.alpha_phone),
        alpha_display_name: Set(dto.alpha_display_name),
        story_id: Set(dto.story_id),
        story_type: Set(dto.story_type),
        game_mode: Set(dto.game_mode),
        beta_phone_0: Set(dto.beta_phone_0),
        beta_phone_1: Set(dto.beta_phone_1),
        beta_phone_2: Set(dto.beta_phone_2),
        created_at: Set(now),
        updated_at: Set(now),
    };

    active.insert(conn).await
}

/// Replace the beta columns for one alpha. Returns the number of rows
/// matched so the caller can detect an already-removed record.
pub async fn update_betas<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ProgressBetasUpdate,
) -> Result<u64, sea_orm::DbErr> {
    use sea_orm::sea_query::Expr;

    let now = time::OffsetDateTime::now_utc();
    let result = conversation_progress::Entity::update_many()
        .col_expr(
            conversation_progress::Column::BetaPhone0,
            Expr::val(dto.beta_phone_0).into(),
        )
        .col_expr(
            conversation_progress::Column::BetaPhone1,
            Expr::val(dto.beta_phone_1).into(),
        )
        .col_expr(
            conversation_progress::Column::BetaPhone2,
            Expr::val(dto.beta_phone_2).into(),
        )
        .col_expr(
            conversation_progress::Column::UpdatedAt,
            Expr::val(now).into(),
        )
        .filter(conversation_progress::Column::AlphaPhone.eq(dto.alpha_phone))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}

/// Delete the row for one alpha. Returns the number of rows removed;
/// zero is a valid outcome (already resolved).
pub async fn delete_by_alpha<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    alpha_phone: &str,
) -> Result<u64, sea_orm::DbErr> {
    let result = conversation_progress::Entity::delete_many()
        .filter(conversation_progress::Column::AlphaPhone.eq(alpha_phone))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}
