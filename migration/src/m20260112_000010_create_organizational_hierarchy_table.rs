use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_organization_table::Organization,
    m20260105_000002_create_user_table::User,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrganizationalHierarchy::Table)
                    .if_not_exists()
                    .col(string(OrganizationalHierarchy::Id).primary_key())
                    .col(string(OrganizationalHierarchy::OrganizationId))
                    .col(string(OrganizationalHierarchy::ManagerId))
                    .col(string(OrganizationalHierarchy::EmployeeId))
                    .col(date(OrganizationalHierarchy::EffectiveDate))
                    .col(date_null(OrganizationalHierarchy::EndDate))
                    .col(boolean(OrganizationalHierarchy::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(OrganizationalHierarchy::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hierarchy_organization_id")
                            .from(
                                OrganizationalHierarchy::Table,
                                OrganizationalHierarchy::OrganizationId,
                            )
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hierarchy_manager_id")
                            .from(
                                OrganizationalHierarchy::Table,
                                OrganizationalHierarchy::ManagerId,
                            )
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hierarchy_employee_id")
                            .from(
                                OrganizationalHierarchy::Table,
                                OrganizationalHierarchy::EmployeeId,
                            )
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hierarchy_employee_id")
                    .table(OrganizationalHierarchy::Table)
                    .col(OrganizationalHierarchy::EmployeeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(OrganizationalHierarchy::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrganizationalHierarchy {
    Table,
    Id,
    OrganizationId,
    ManagerId,
    EmployeeId,
    EffectiveDate,
    EndDate,
    IsActive,
    CreatedAt,
}
