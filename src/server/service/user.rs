//! User service for business logic.
//!
//! This module provides the `UserService` for sign-in upserts, user listing and role
//! management. It works with domain models rather than DTOs.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::Role,
    server::{
        data::{organization::OrganizationRepository, user::UserRepository},
        error::AppError,
        model::user::{PaginatedUsers, UpsertGoogleUserParam, User},
        service::auth::GoogleIdentity,
        util::pagination::total_pages,
    },
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or refreshes the user behind a verified Google identity.
    ///
    /// Returning users get their email and name refreshed. New users receive the `employee`
    /// role and join the organization whose `domain` matches their email domain, if any.
    /// The very first user also receives `super_admin` so the system can be bootstrapped.
    ///
    /// # Arguments
    /// - `identity` - Claims of a verified Google ID token
    ///
    /// # Returns
    /// - `Ok(User)` - The signed-in user with their roles
    /// - `Err(AppError::DbErr)` - Database error during the upsert
    pub async fn sign_in(&self, identity: &GoogleIdentity) -> Result<User, AppError> {
        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        let user = match user_repo.find_by_google_id(&identity.sub).await? {
            Some(existing) => {
                let updated = user_repo
                    .update_profile(existing, identity.email.clone(), identity.display_name())
                    .await?;
                let roles = user_repo.roles_for(&updated.id).await?;
                User::from_entity(updated, roles)?
            }
            None => {
                let is_first_user = user_repo.count().await? == 0;

                let organization_id = match identity.email_domain() {
                    Some(domain) => OrganizationRepository::new(&txn)
                        .find_by_domain(&domain)
                        .await?
                        .map(|org| org.id),
                    None => None,
                };

                let mut roles = vec![Role::Employee];
                if is_first_user {
                    roles.push(Role::SuperAdmin);
                }

                let (user, roles) = user_repo
                    .create(UpsertGoogleUserParam {
                        google_id: identity.sub.clone(),
                        email: identity.email.clone(),
                        name: identity.display_name(),
                        organization_id,
                        roles,
                    })
                    .await?;

                let user = User::from_entity(user, roles)?;
                if is_first_user {
                    dioxus_logger::tracing::info!(
                        "First user {} registered and granted super_admin",
                        user.email
                    );
                }
                user
            }
        };

        txn.commit().await?;

        Ok(user)
    }

    /// Retrieves a user with their roles.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, user_id: &str) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        match user_repo.find_with_roles(user_id).await? {
            Some((user, roles)) => Ok(Some(User::from_entity(user, roles)?)),
            None => Ok(None),
        }
    }

    /// Retrieves the users `viewer` administers with pagination, ordered by name.
    ///
    /// Super admins see every user. Admins see their own organization, or nobody else when
    /// they have none.
    ///
    /// # Arguments
    /// - `viewer` - The admin asking
    /// - `page` - 1-indexed page number
    /// - `limit` - Users per page
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Users for the requested page with pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn get_all_users(
        &self,
        viewer: &User,
        page: u64,
        limit: u64,
    ) -> Result<PaginatedUsers, AppError> {
        let user_repo = UserRepository::new(self.db);

        let (rows, total) = match (&viewer.organization_id, viewer.is_super_admin()) {
            (_, true) => user_repo.get_all_paginated(None, page, limit).await?,
            (Some(organization_id), false) => {
                user_repo
                    .get_all_paginated(Some(organization_id.as_str()), page, limit)
                    .await?
            }
            (None, false) => (Vec::new(), 0),
        };

        let users = rows
            .into_iter()
            .map(|(user, roles)| User::from_entity(user, roles))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PaginatedUsers {
            users,
            total,
            page,
            limit,
            total_pages: total_pages(total, limit),
        })
    }

    /// Replaces a user's role set.
    ///
    /// # Returns
    /// - `Ok(User)` - User with the new roles
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn set_roles(&self, user_id: &str, roles: Vec<Role>) -> Result<User, AppError> {
        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };
        let roles = user_repo.set_roles(&user.id, &roles).await?;

        txn.commit().await?;

        User::from_entity(user, roles)
    }
}
