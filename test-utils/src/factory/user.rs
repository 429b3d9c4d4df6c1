//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults. Role rows are inserted alongside the user so permission checks see them.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let admin = UserFactory::new(&db)
///     .email("admin@example.com")
///     .roles(&["employee", "admin"])
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    google_id: String,
    email: String,
    name: String,
    organization_id: Option<String>,
    roles: Vec<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - id: random UUID
    /// - google_id: `"google-{n}"`
    /// - email: `"user{n}@example.com"`
    /// - name: `"User {n}"`
    /// - organization_id: `None`
    /// - roles: `["employee"]`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: new_uuid(),
            google_id: format!("google-{}", n),
            email: format!("user{}@example.com", n),
            name: format!("User {}", n),
            organization_id: None,
            roles: vec!["employee".to_string()],
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn google_id(mut self, google_id: impl Into<String>) -> Self {
        self.google_id = google_id.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn organization(mut self, organization_id: &str) -> Self {
        self.organization_id = Some(organization_id.to_string());
        self
    }

    /// Replaces the default role set.
    ///
    /// # Arguments
    /// - `roles` - Role names as stored in the database (`employee`, `admin`, ...)
    pub fn roles(mut self, roles: &[&str]) -> Self {
        self.roles = roles.iter().map(|r| r.to_string()).collect();
        self
    }

    /// Builds and inserts the user entity and its role rows into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(self.id),
            google_id: ActiveValue::Set(self.google_id),
            email: ActiveValue::Set(self.email),
            name: ActiveValue::Set(self.name),
            organization_id: ActiveValue::Set(self.organization_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        for role in self.roles {
            entity::user_role::ActiveModel {
                user_id: ActiveValue::Set(user.id.clone()),
                role: ActiveValue::Set(role),
            }
            .insert(self.db)
            .await?;
        }

        Ok(user)
    }
}

/// Creates an employee with default values and no organization.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

    #[tokio::test]
    async fn creates_user_with_default_role() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        let roles = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.eq(&user.id))
            .all(db)
            .await?;

        assert!(!user.email.is_empty());
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].role, "employee");

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_users() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_user(db).await?;
        let second = create_user(db).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.email, second.email);
        assert_ne!(first.google_id, second.google_id);

        Ok(())
    }
}
