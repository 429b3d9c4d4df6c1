use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// A role requirement checked by `AuthGuard`.
pub enum Permission {
    /// Holds `admin` or `super_admin`.
    Admin,
    /// Holds `super_admin`.
    SuperAdmin,
}

/// Resolves the session user and checks their permissions.
///
/// # Example
///
/// ```rust,ignore
/// let user = AuthGuard::new(&state.db, &session)
///     .require(&[Permission::Admin])
///     .await?;
/// ```
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the logged-in user if they satisfy every permission.
    ///
    /// An empty slice only requires a logged-in user.
    ///
    /// # Returns
    /// - `Ok(User)` - The session user with their roles
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - The session user was deleted
    /// - `Err(AuthError::AccessDenied)` - A permission is not satisfied
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some((user, roles)) = user_repo.find_with_roles(&user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };
        let user = User::from_entity(user, roles)?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "admin role required".to_string(),
                        )
                        .into());
                    }
                }
                Permission::SuperAdmin => {
                    if !user.is_super_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "super_admin role required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
