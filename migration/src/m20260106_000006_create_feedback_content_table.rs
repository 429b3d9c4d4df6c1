use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000005_create_feedback_table::Feedback;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FeedbackContent::Table)
                    .if_not_exists()
                    .col(string(FeedbackContent::Id).primary_key())
                    .col(string_uniq(FeedbackContent::FeedbackId))
                    .col(text(FeedbackContent::OverallComment))
                    .col(text_null(FeedbackContent::Strengths))
                    .col(text_null(FeedbackContent::Improvements))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_feedback_content_feedback_id")
                            .from(FeedbackContent::Table, FeedbackContent::FeedbackId)
                            .to(Feedback::Table, Feedback::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FeedbackContent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FeedbackContent {
    Table,
    Id,
    FeedbackId,
    OverallComment,
    Strengths,
    Improvements,
}
