//! User domain models and parameters.
//!
//! Provides domain models for application users with their Google identity, organization
//! membership and role set. Includes parameter types for user creation during sign-in.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{PaginatedUsersDto, Role, UserDto, UserSummaryDto},
    server::{error::AppError, util::parse::parse_stored},
};

/// User with Google identity, organization and roles.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    /// Google account subject identifier.
    pub google_id: String,
    pub email: String,
    /// Display name of the user.
    pub name: String,
    pub organization_id: Option<String>,
    /// Every role the user holds.
    pub roles: Vec<Role>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model and its role rows to a user domain model.
    ///
    /// # Arguments
    /// - `entity` - The user row
    /// - `roles` - The user's `user_role` rows
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - A role row holds an unknown role
    pub fn from_entity(
        entity: entity::user::Model,
        roles: Vec<entity::user_role::Model>,
    ) -> Result<Self, AppError> {
        let roles = roles
            .iter()
            .map(|r| parse_stored("user_role.role", &r.role, Role::parse))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: entity.id,
            google_id: entity.google_id,
            email: entity.email,
            name: entity.name,
            organization_id: entity.organization_id,
            roles,
            created_at: entity.created_at,
        })
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Super admins pass every admin check.
    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin) || self.is_super_admin()
    }

    pub fn is_super_admin(&self) -> bool {
        self.has_role(Role::SuperAdmin)
    }

    /// Whether the user holds admin rights over `organization_id`.
    ///
    /// Admins only administer their own organization. Super admins administer all of them.
    pub fn administers(&self, organization_id: &str) -> bool {
        self.is_super_admin()
            || (self.has_role(Role::Admin)
                && self.organization_id.as_deref() == Some(organization_id))
    }

    /// Whether the user may see members of `organization_id`.
    pub fn sees_organization(&self, organization_id: Option<&str>) -> bool {
        self.is_super_admin()
            || (organization_id.is_some() && self.organization_id.as_deref() == organization_id)
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            organization_id: self.organization_id,
            roles: self.roles,
        }
    }
}

/// Converts a bare user row into the summary embedded in other payloads.
pub fn summary_from_entity(entity: &entity::user::Model) -> UserSummaryDto {
    UserSummaryDto {
        id: entity.id.clone(),
        name: entity.name.clone(),
        email: entity.email.clone(),
    }
}

/// Parameters for creating or refreshing a user after Google sign-in.
///
/// `organization_id` and `roles` only apply when the user is created; an existing user
/// keeps their organization and roles and only gets their profile refreshed.
#[derive(Debug, Clone)]
pub struct UpsertGoogleUserParam {
    pub google_id: String,
    pub email: String,
    pub name: String,
    pub organization_id: Option<String>,
    pub roles: Vec<Role>,
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    /// Users for this page.
    pub users: Vec<User>,
    /// Total number of users across all pages.
    pub total: u64,
    /// Current page number (one-indexed).
    pub page: u64,
    /// Number of users per page.
    pub limit: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}
