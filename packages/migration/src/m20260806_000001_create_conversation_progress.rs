use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum ConversationProgress {
    Table,
    AlphaPhone,
    AlphaDisplayName,
    StoryId,
    StoryType,
    GameMode,
    BetaPhone0,
    BetaPhone1,
    BetaPhone2,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One row per alpha while a creation conversation is in flight.
        // The alpha's phone number is the natural primary key: the engine
        // allows a single active conversation per alpha at a time.
        manager
            .create_table(
                Table::create()
                    .table(ConversationProgress::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ConversationProgress::AlphaPhone)
                            .string_len(16)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ConversationProgress::AlphaDisplayName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ConversationProgress::StoryId)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ConversationProgress::StoryType)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ConversationProgress::GameMode).string_len(64))
                    .col(ColumnDef::new(ConversationProgress::BetaPhone0).string_len(16))
                    .col(ColumnDef::new(ConversationProgress::BetaPhone1).string_len(16))
                    .col(ColumnDef::new(ConversationProgress::BetaPhone2).string_len(16))
                    .col(
                        ColumnDef::new(ConversationProgress::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ConversationProgress::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ConversationProgress::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}
