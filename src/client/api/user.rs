use crate::{
    client::{
        api::helper::{get, parse_response, put, send_request, serialize_json},
        model::error::ApiError,
    },
    model::user::{PaginatedUsersDto, UpdateUserRolesDto, UserDto},
};

/// Fetches the session user. A 404 means nobody is logged in.
pub async fn get_user() -> Result<Option<UserDto>, ApiError> {
    let response = send_request(get("/api/auth/user")).await?;

    if response.status() == 404 {
        return Ok(None);
    }

    parse_response(response).await.map(Some)
}

pub async fn get_all_users(page: u64, limit: u64) -> Result<PaginatedUsersDto, ApiError> {
    let url = format!("/api/users?page={}&limit={}", page, limit);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn update_user_roles(user_id: &str, roles: Vec<String>) -> Result<UserDto, ApiError> {
    let url = format!("/api/users/{}/roles", user_id);
    let body = serialize_json(&UpdateUserRolesDto { roles })?;
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}
