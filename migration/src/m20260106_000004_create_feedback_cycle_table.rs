use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_organization_table::Organization;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FeedbackCycle::Table)
                    .if_not_exists()
                    .col(string(FeedbackCycle::Id).primary_key())
                    .col(string(FeedbackCycle::OrganizationId))
                    .col(string(FeedbackCycle::Name))
                    .col(text_null(FeedbackCycle::Description))
                    .col(date(FeedbackCycle::StartDate))
                    .col(date(FeedbackCycle::EndDate))
                    .col(string(FeedbackCycle::Status).default("draft"))
                    .col(
                        timestamp_with_time_zone(FeedbackCycle::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(FeedbackCycle::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_feedback_cycle_organization_id")
                            .from(FeedbackCycle::Table, FeedbackCycle::OrganizationId)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FeedbackCycle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FeedbackCycle {
    Table,
    Id,
    OrganizationId,
    Name,
    Description,
    StartDate,
    EndDate,
    Status,
    CreatedAt,
    UpdatedAt,
}
