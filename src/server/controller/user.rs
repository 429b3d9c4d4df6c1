use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PageQueryDto},
        user::{PaginatedUsersDto, Role, UpdateUserRolesDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::user::UserService,
        state::AppState,
        validator::{ValidatedJson, ValidatedQuery},
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List users, ordered by name.
///
/// # Access Control
/// - `Admin` - Users of their own organization
/// - `SuperAdmin` - Every user
///
/// # Returns
/// - `200 OK` - Page of users with their roles
/// - `400 Bad Request` - `page < 1` or `limit` outside 1 to 100
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(PageQueryDto),
    responses(
        (status = 200, description = "Page of users", body = PaginatedUsersDto),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    session: Session,
    ValidatedQuery(query): ValidatedQuery<PageQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .get_all_users(&user, query.page(), query.limit())
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Replace a user's roles.
///
/// # Access Control
/// - `SuperAdmin`
#[utoipa::path(
    put,
    path = "/api/users/{id}/roles",
    tag = USER_TAG,
    params(("id" = String, Path, description = "User ID")),
    request_body = UpdateUserRolesDto,
    responses(
        (status = 200, description = "User with updated roles", body = UserDto),
        (status = 400, description = "Empty or unknown roles", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Super admin access required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_roles(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRolesDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    let mut roles: Vec<Role> = Vec::new();
    for role in payload.roles.iter().filter_map(|role| Role::parse(role)) {
        if !roles.contains(&role) {
            roles.push(role);
        }
    }

    let user = UserService::new(&state.db).set_roles(&id, roles).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
