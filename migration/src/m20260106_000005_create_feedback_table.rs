use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000002_create_user_table::User,
    m20260106_000004_create_feedback_cycle_table::FeedbackCycle,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Feedback::Table)
                    .if_not_exists()
                    .col(string(Feedback::Id).primary_key())
                    .col(string(Feedback::CycleId))
                    .col(string(Feedback::FromUserId))
                    .col(string(Feedback::ToUserId))
                    .col(string(Feedback::ReviewType))
                    .col(string(Feedback::Status).default("draft"))
                    .col(
                        timestamp_with_time_zone(Feedback::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Feedback::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_feedback_cycle_id")
                            .from(Feedback::Table, Feedback::CycleId)
                            .to(FeedbackCycle::Table, FeedbackCycle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_feedback_from_user_id")
                            .from(Feedback::Table, Feedback::FromUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_feedback_to_user_id")
                            .from(Feedback::Table, Feedback::ToUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One feedback per (cycle, giver, receiver, review type)
        manager
            .create_index(
                Index::create()
                    .name("idx_feedback_unique_tuple")
                    .table(Feedback::Table)
                    .col(Feedback::CycleId)
                    .col(Feedback::FromUserId)
                    .col(Feedback::ToUserId)
                    .col(Feedback::ReviewType)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Feedback::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Feedback {
    Table,
    Id,
    CycleId,
    FromUserId,
    ToUserId,
    ReviewType,
    Status,
    CreatedAt,
    UpdatedAt,
}
