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
                    .table(Rating::Table)
                    .if_not_exists()
                    .col(string(Rating::Id).primary_key())
                    .col(string(Rating::FeedbackId))
                    .col(string(Rating::Category))
                    .col(string_null(Rating::Subcategory))
                    .col(double(Rating::Score))
                    .col(double(Rating::MaxScore))
                    .col(double_null(Rating::Weight))
                    .col(text_null(Rating::Comment))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rating_feedback_id")
                            .from(Rating::Table, Rating::FeedbackId)
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
            .drop_table(Table::drop().table(Rating::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Rating {
    Table,
    Id,
    FeedbackId,
    Category,
    Subcategory,
    Score,
    MaxScore,
    Weight,
    Comment,
}
