use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReviewTemplate::Table)
                    .if_not_exists()
                    .col(string(ReviewTemplate::Id).primary_key())
                    .col(string(ReviewTemplate::Name))
                    .col(string(ReviewTemplate::ReviewType))
                    .col(text_null(ReviewTemplate::Description))
                    .col(text(ReviewTemplate::Questions).default("[]"))
                    .col(
                        timestamp_with_time_zone(ReviewTemplate::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReviewTemplate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReviewTemplate {
    Table,
    Id,
    Name,
    ReviewType,
    Description,
    Questions,
    CreatedAt,
}
