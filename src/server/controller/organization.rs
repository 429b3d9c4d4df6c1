use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        organization::{CreateOrganizationDto, OrganizationDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::organization::{CreateOrganizationParams, Organization},
        service::organization::OrganizationService,
        state::AppState,
        validator::ValidatedJson,
    },
};

/// Tag for grouping organization endpoints in OpenAPI documentation
pub static ORGANIZATION_TAG: &str = "organization";

#[utoipa::path(
    get,
    path = "/api/organizations",
    tag = ORGANIZATION_TAG,
    responses(
        (status = 200, description = "All organizations", body = Vec<OrganizationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_organizations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let organizations = OrganizationService::new(&state.db).get_all().await?;
    let organizations: Vec<OrganizationDto> = organizations
        .into_iter()
        .map(Organization::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(organizations)))
}

/// Create an organization. New users whose email domain matches `domain` join it on
/// first sign-in.
///
/// # Access Control
/// - `SuperAdmin`
///
/// # Returns
/// - `201 Created` - New organization
/// - `400 Bad Request` - Missing name or malformed domain
/// - `409 Conflict` - Domain already claimed by another organization
#[utoipa::path(
    post,
    path = "/api/organizations",
    tag = ORGANIZATION_TAG,
    request_body = CreateOrganizationDto,
    responses(
        (status = 201, description = "Organization created", body = OrganizationDto),
        (status = 400, description = "Invalid organization", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Super admin access required", body = ErrorDto),
        (status = 409, description = "Domain already claimed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_organization(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<CreateOrganizationDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    let organization = OrganizationService::new(&state.db)
        .create(CreateOrganizationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(organization.into_dto())))
}
