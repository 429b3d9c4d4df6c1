//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records and their role rows.
//! Roles live in the `user_role` table, one row per granted role.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::{
    model::user::Role,
    server::{data::new_id, model::user::UpsertGoogleUserParam, util::pagination::page_index},
};

/// A user row together with its role rows.
pub type UserWithRoles = (entity::user::Model, Vec<entity::user_role::Model>);

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Connection or transaction to run queries on
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a user and grants the given roles.
    ///
    /// # Arguments
    /// - `param` - Google identity, organization and initial roles
    ///
    /// # Returns
    /// - `Ok(UserWithRoles)` - The created user and role rows
    /// - `Err(DbErr)` - Database error, including a duplicate Google ID or email
    pub async fn create(&self, param: UpsertGoogleUserParam) -> Result<UserWithRoles, DbErr> {
        let now = Utc::now();
        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(new_id()),
            google_id: ActiveValue::Set(param.google_id),
            email: ActiveValue::Set(param.email),
            name: ActiveValue::Set(param.name),
            organization_id: ActiveValue::Set(param.organization_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        let roles = self.set_roles(&user.id, &param.roles).await?;

        Ok((user, roles))
    }

    /// Refreshes the profile fields Google may change between sign-ins.
    pub async fn update_profile(
        &self,
        user: entity::user::Model,
        email: String,
        name: String,
    ) -> Result<entity::user::Model, DbErr> {
        let mut active: entity::user::ActiveModel = user.into();
        active.email = ActiveValue::Set(email);
        active.name = ActiveValue::Set(name);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id.to_string())
            .one(self.db)
            .await
    }

    /// Finds a user and their roles by ID.
    ///
    /// # Returns
    /// - `Ok(Some(UserWithRoles))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_with_roles(&self, id: &str) -> Result<Option<UserWithRoles>, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        let roles = self.roles_for(&user.id).await?;

        Ok(Some((user, roles)))
    }

    pub async fn find_by_google_id(
        &self,
        google_id: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::GoogleId.eq(google_id))
            .one(self.db)
            .await
    }

    pub async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<entity::user::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await
    }

    pub async fn find_by_organization(
        &self,
        organization_id: &str,
    ) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::OrganizationId.eq(organization_id))
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await
    }

    /// Counts all users. Zero means the next sign-in bootstraps the system.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    pub async fn roles_for(&self, user_id: &str) -> Result<Vec<entity::user_role::Model>, DbErr> {
        entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    /// Replaces a user's role set.
    ///
    /// # Returns
    /// - `Ok(Vec<entity::user_role::Model>)` - The new role rows
    /// - `Err(DbErr)` - Database error during delete or insert
    pub async fn set_roles(
        &self,
        user_id: &str,
        roles: &[Role],
    ) -> Result<Vec<entity::user_role::Model>, DbErr> {
        entity::prelude::UserRole::delete_many()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        let mut inserted = Vec::with_capacity(roles.len());
        for role in roles {
            if inserted
                .iter()
                .any(|r: &entity::user_role::Model| r.role == role.as_str())
            {
                continue;
            }

            let row = entity::user_role::ActiveModel {
                user_id: ActiveValue::Set(user_id.to_string()),
                role: ActiveValue::Set(role.as_str().to_string()),
            }
            .insert(self.db)
            .await?;
            inserted.push(row);
        }

        Ok(inserted)
    }

    /// Gets all users with pagination, ordered alphabetically by name.
    ///
    /// # Arguments
    /// - `organization_id` - Only users of this organization when set
    /// - `page` - One-indexed page number
    /// - `limit` - Number of users per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users with roles for the requested page and total user count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        organization_id: Option<&str>,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<UserWithRoles>, u64), DbErr> {
        let mut query = entity::prelude::User::find();
        if let Some(organization_id) = organization_id {
            query = query.filter(entity::user::Column::OrganizationId.eq(organization_id));
        }
        let paginator = query
            .order_by_asc(entity::user::Column::Name)
            .paginate(self.db, limit);

        let total = paginator.num_items().await?;
        let Some(index) = page_index(page, limit) else {
            return Ok((Vec::new(), total));
        };
        let users = paginator.fetch_page(index).await?;

        let ids: Vec<String> = users.iter().map(|u| u.id.clone()).collect();
        let mut roles_by_user: HashMap<String, Vec<entity::user_role::Model>> = HashMap::new();
        if !ids.is_empty() {
            for role in entity::prelude::UserRole::find()
                .filter(entity::user_role::Column::UserId.is_in(ids))
                .all(self.db)
                .await?
            {
                roles_by_user.entry(role.user_id.clone()).or_default().push(role);
            }
        }

        let users = users
            .into_iter()
            .map(|u| {
                let roles = roles_by_user.remove(&u.id).unwrap_or_default();
                (u, roles)
            })
            .collect();

        Ok((users, total))
    }
}
