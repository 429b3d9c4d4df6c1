use serde::{Deserialize, Serialize};

/// Role granted to a user. A user holds any number of roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Employee,
    Manager,
    Admin,
    SuperAdmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Manager => "manager",
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "employee" => Some(Self::Employee),
            "manager" => Some(Self::Manager),
            "admin" => Some(Self::Admin),
            "super_admin" => Some(Self::SuperAdmin),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub name: String,
    pub organization_id: Option<String>,
    pub roles: Vec<Role>,
}

impl UserDto {
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
}

/// Minimal user reference embedded in other payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UserSummaryDto {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRolesDto {
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Google Identity Services sign-in payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct GoogleLoginDto {
    #[serde(default)]
    pub credential: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with(roles: Vec<Role>) -> UserDto {
        UserDto {
            id: "u1".to_string(),
            email: "jane@example.com".to_string(),
            name: "Jane".to_string(),
            organization_id: None,
            roles,
        }
    }

    #[test]
    fn super_admin_counts_as_admin() {
        let user = user_with(vec![Role::Employee, Role::SuperAdmin]);

        assert!(user.is_admin());
        assert!(user.is_super_admin());
    }

    #[test]
    fn admin_is_not_super_admin() {
        let user = user_with(vec![Role::Admin]);

        assert!(user.is_admin());
        assert!(!user.is_super_admin());
    }

    #[test]
    fn roles_serialize_as_snake_case() {
        let json = serde_json::to_string(&Role::SuperAdmin).unwrap();

        assert_eq!(json, "\"super_admin\"");
        assert_eq!(Role::parse("super_admin"), Some(Role::SuperAdmin));
        assert_eq!(Role::parse("owner"), None);
    }
}
