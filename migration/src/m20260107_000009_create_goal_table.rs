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
                    .table(Goal::Table)
                    .if_not_exists()
                    .col(string(Goal::Id).primary_key())
                    .col(string(Goal::FeedbackId))
                    .col(string(Goal::Title))
                    .col(text_null(Goal::Description))
                    .col(string_null(Goal::Category))
                    .col(string(Goal::Priority).default("medium"))
                    .col(date_null(Goal::TargetDate))
                    .col(string(Goal::Status).default("not_started"))
                    .col(integer(Goal::Progress).default(0))
                    .col(
                        timestamp_with_time_zone(Goal::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Goal::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_goal_feedback_id")
                            .from(Goal::Table, Goal::FeedbackId)
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
            .drop_table(Table::drop().table(Goal::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Goal {
    Table,
    Id,
    FeedbackId,
    Title,
    Description,
    Category,
    Priority,
    TargetDate,
    Status,
    Progress,
    CreatedAt,
    UpdatedAt,
}
