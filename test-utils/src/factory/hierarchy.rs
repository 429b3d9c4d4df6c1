//! Reporting-line edge factory.

use crate::factory::helpers::new_uuid;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for manager to employee edges.
///
/// Defaults to an active, open-ended edge effective from 2020-01-01.
pub struct EdgeFactory<'a> {
    db: &'a DatabaseConnection,
    organization_id: String,
    manager_id: String,
    employee_id: String,
    effective_date: NaiveDate,
    end_date: Option<NaiveDate>,
    is_active: bool,
}

impl<'a> EdgeFactory<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        organization_id: &str,
        manager_id: &str,
        employee_id: &str,
    ) -> Self {
        Self {
            db,
            organization_id: organization_id.to_string(),
            manager_id: manager_id.to_string(),
            employee_id: employee_id.to_string(),
            effective_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default(),
            end_date: None,
            is_active: true,
        }
    }

    pub fn effective(mut self, effective_date: NaiveDate, end_date: Option<NaiveDate>) -> Self {
        self.effective_date = effective_date;
        self.end_date = end_date;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::organizational_hierarchy::Model, DbErr> {
        entity::organizational_hierarchy::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            organization_id: ActiveValue::Set(self.organization_id),
            manager_id: ActiveValue::Set(self.manager_id),
            employee_id: ActiveValue::Set(self.employee_id),
            effective_date: ActiveValue::Set(self.effective_date),
            end_date: ActiveValue::Set(self.end_date),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active open-ended edge.
pub async fn create_edge(
    db: &DatabaseConnection,
    organization_id: &str,
    manager_id: &str,
    employee_id: &str,
) -> Result<entity::organizational_hierarchy::Model, DbErr> {
    EdgeFactory::new(db, organization_id, manager_id, employee_id)
        .build()
        .await
}
