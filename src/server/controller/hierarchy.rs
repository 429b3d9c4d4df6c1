use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{NaiveDate, Utc};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        hierarchy::{
            CreateHierarchyEdgeDto, EndHierarchyEdgeDto, HierarchyDateQueryDto, HierarchyEdgeDto,
            HierarchyNodeDto,
        },
        user::UserSummaryDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            hierarchy::{CreateEdgeParams, HierarchyNode},
            user::User,
        },
        service::hierarchy::HierarchyService,
        state::AppState,
        validator::{ValidatedJson, ValidatedQuery},
    },
};

/// Tag for grouping hierarchy endpoints in OpenAPI documentation
pub static HIERARCHY_TAG: &str = "hierarchy";

/// Create a manager to employee relationship.
///
/// # Access Control
/// - `Admin`, within their own organization
///
/// # Returns
/// - `201 Created` - New relationship; `effectiveDate` defaults to today
/// - `400 Bad Request` - Self-management, reporting loop, inverted dates, or a user outside
///   the organization
#[utoipa::path(
    post,
    path = "/api/hierarchy",
    tag = HIERARCHY_TAG,
    request_body = CreateHierarchyEdgeDto,
    responses(
        (status = 201, description = "Relationship created", body = HierarchyEdgeDto),
        (status = 400, description = "Invalid relationship", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_edge(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<CreateHierarchyEdgeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;
    let organization_id = require_organization(user)?;

    let params = CreateEdgeParams::from_dto(organization_id, today(), payload);
    let edge = HierarchyService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(edge.into_dto())))
}

/// End a relationship. It stays in effect up to the day before `endDate` (default today).
#[utoipa::path(
    put,
    path = "/api/hierarchy/{id}/end",
    tag = HIERARCHY_TAG,
    params(("id" = String, Path, description = "Relationship ID")),
    request_body = EndHierarchyEdgeDto,
    responses(
        (status = 200, description = "Relationship ended", body = HierarchyEdgeDto),
        (status = 400, description = "End date not after effective date", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Relationship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn end_edge(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<EndHierarchyEdgeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;
    let organization_id = require_organization(user)?;

    let today = today();
    let edge = HierarchyService::new(&state.db)
        .end(
            &organization_id,
            &id,
            payload.end_date.unwrap_or(today),
            today,
        )
        .await?;

    Ok((StatusCode::OK, Json(edge.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/hierarchy/{id}",
    tag = HIERARCHY_TAG,
    params(("id" = String, Path, description = "Relationship ID")),
    responses(
        (status = 204, description = "Relationship deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Relationship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_edge(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;
    let organization_id = require_organization(user)?;

    HierarchyService::new(&state.db)
        .delete(&organization_id, &id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get an employee's manager on `date` (default today).
///
/// Employees outside the caller's organization resolve to 404 unless the caller is a super
/// admin.
#[utoipa::path(
    get,
    path = "/api/hierarchy/{id}/manager",
    tag = HIERARCHY_TAG,
    params(
        ("id" = String, Path, description = "Employee user ID"),
        HierarchyDateQueryDto
    ),
    responses(
        (status = 200, description = "Manager in effect", body = UserSummaryDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "No manager on that date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_manager(
    State(state): State<AppState>,
    session: Session,
    Path(employee_id): Path<String>,
    ValidatedQuery(query): ValidatedQuery<HierarchyDateQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let manager = HierarchyService::new(&state.db)
        .get_manager(&user, &employee_id, query.date.unwrap_or_else(today))
        .await?
        .ok_or_else(|| AppError::NotFound("No manager found".to_string()))?;

    Ok((StatusCode::OK, Json(manager)))
}

/// List a manager's direct reports on `date` (default today), ordered by name.
#[utoipa::path(
    get,
    path = "/api/hierarchy/{id}/reports",
    tag = HIERARCHY_TAG,
    params(
        ("id" = String, Path, description = "Manager user ID"),
        HierarchyDateQueryDto
    ),
    responses(
        (status = 200, description = "Direct reports", body = Vec<UserSummaryDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reports(
    State(state): State<AppState>,
    session: Session,
    Path(manager_id): Path<String>,
    ValidatedQuery(query): ValidatedQuery<HierarchyDateQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reports = HierarchyService::new(&state.db)
        .get_reports(&user, &manager_id, query.date.unwrap_or_else(today))
        .await?;

    Ok((StatusCode::OK, Json(reports)))
}

/// Get the reporting forest of the caller's organization on `date` (default today).
///
/// Roots are members with no manager in effect.
#[utoipa::path(
    get,
    path = "/api/hierarchy/tree",
    tag = HIERARCHY_TAG,
    params(HierarchyDateQueryDto),
    responses(
        (status = 200, description = "Root nodes with nested reports", body = Vec<HierarchyNodeDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tree(
    State(state): State<AppState>,
    session: Session,
    ValidatedQuery(query): ValidatedQuery<HierarchyDateQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let roots = HierarchyService::new(&state.db)
        .get_tree(&user, query.date.unwrap_or_else(today))
        .await?;
    let roots: Vec<HierarchyNodeDto> = roots.into_iter().map(HierarchyNode::into_dto).collect();

    Ok((StatusCode::OK, Json(roots)))
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn require_organization(user: User) -> Result<String, AppError> {
    user.organization_id.ok_or_else(|| {
        AppError::BadRequest("User does not belong to an organization".to_string())
    })
}
