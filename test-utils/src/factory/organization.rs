//! Organization factory for creating test organization entities.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test organizations with customizable fields.
pub struct OrganizationFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    domain: Option<String>,
}

impl<'a> OrganizationFactory<'a> {
    /// Creates a new OrganizationFactory with default values.
    ///
    /// Defaults:
    /// - id: random UUID
    /// - name: `"Organization {n}"`
    /// - domain: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: new_uuid(),
            name: format!("Organization {}", n),
            domain: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the email domain that assigns users to this organization.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Builds and inserts the organization entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::organization::Model)` - Created organization entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::organization::Model, DbErr> {
        entity::organization::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            domain: ActiveValue::Set(self.domain),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an organization with default values.
pub async fn create_organization(
    db: &DatabaseConnection,
) -> Result<entity::organization::Model, DbErr> {
    OrganizationFactory::new(db).build().await
}
