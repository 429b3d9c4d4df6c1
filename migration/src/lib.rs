pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_organization_table;
mod m20260105_000002_create_user_table;
mod m20260105_000003_create_user_role_table;
mod m20260106_000004_create_feedback_cycle_table;
mod m20260106_000005_create_feedback_table;
mod m20260106_000006_create_feedback_content_table;
mod m20260107_000007_create_comment_table;
mod m20260107_000008_create_rating_table;
mod m20260107_000009_create_goal_table;
mod m20260112_000010_create_organizational_hierarchy_table;
mod m20260114_000011_create_review_template_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_organization_table::Migration),
            Box::new(m20260105_000002_create_user_table::Migration),
            Box::new(m20260105_000003_create_user_role_table::Migration),
            Box::new(m20260106_000004_create_feedback_cycle_table::Migration),
            Box::new(m20260106_000005_create_feedback_table::Migration),
            Box::new(m20260106_000006_create_feedback_content_table::Migration),
            Box::new(m20260107_000007_create_comment_table::Migration),
            Box::new(m20260107_000008_create_rating_table::Migration),
            Box::new(m20260107_000009_create_goal_table::Migration),
            Box::new(m20260112_000010_create_organizational_hierarchy_table::Migration),
            Box::new(m20260114_000011_create_review_template_table::Migration),
        ]
    }
}
