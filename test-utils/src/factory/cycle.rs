//! Feedback cycle factory.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating feedback cycles.
///
/// Defaults to an `active` cycle that started a week ago and ends in three weeks.
pub struct CycleFactory<'a> {
    db: &'a DatabaseConnection,
    organization_id: String,
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: String,
}

impl<'a> CycleFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, organization_id: &str) -> Self {
        let today = Utc::now().date_naive();
        Self {
            db,
            organization_id: organization_id.to_string(),
            name: format!("Cycle {}", next_id()),
            start_date: today - Duration::days(7),
            end_date: today + Duration::days(21),
            status: "active".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::feedback_cycle::Model, DbErr> {
        let now = Utc::now();
        entity::feedback_cycle::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            organization_id: ActiveValue::Set(self.organization_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active cycle for the organization with default dates.
pub async fn create_cycle(
    db: &DatabaseConnection,
    organization_id: &str,
) -> Result<entity::feedback_cycle::Model, DbErr> {
    CycleFactory::new(db, organization_id).build().await
}
