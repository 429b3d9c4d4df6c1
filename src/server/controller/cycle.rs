use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        cycle::{CreateCycleDto, CycleDto, UpdateCycleDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::cycle::{CreateCycleParams, Cycle, UpdateCycleParams},
        service::cycle::CycleService,
        state::AppState,
        validator::ValidatedJson,
    },
};

/// Tag for grouping cycle endpoints in OpenAPI documentation
pub static CYCLE_TAG: &str = "cycle";

/// List review cycles of the caller's organization, newest first.
#[utoipa::path(
    get,
    path = "/api/cycles",
    tag = CYCLE_TAG,
    responses(
        (status = 200, description = "Cycles of the caller's organization", body = Vec<CycleDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cycles(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let cycles = CycleService::new(&state.db).get_for_user(&user).await?;
    let cycles: Vec<CycleDto> = cycles.into_iter().map(Cycle::into_dto).collect();

    Ok((StatusCode::OK, Json(cycles)))
}

#[utoipa::path(
    get,
    path = "/api/cycles/{id}",
    tag = CYCLE_TAG,
    params(("id" = String, Path, description = "Cycle ID")),
    responses(
        (status = 200, description = "Cycle", body = CycleDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Cycle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cycle(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let cycle = CycleService::new(&state.db).get_by_id(&user, &id).await?;

    Ok((StatusCode::OK, Json(cycle.into_dto())))
}

/// Create a review cycle in the caller's organization.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - New cycle, `draft` unless a status is given
/// - `400 Bad Request` - Missing name or dates, end before start, or caller has no organization
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    post,
    path = "/api/cycles",
    tag = CYCLE_TAG,
    request_body = CreateCycleDto,
    responses(
        (status = 201, description = "Cycle created", body = CycleDto),
        (status = 400, description = "Invalid cycle", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_cycle(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<CreateCycleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Some(organization_id) = user.organization_id else {
        return Err(AppError::BadRequest(
            "User does not belong to an organization".to_string(),
        ));
    };

    let params = CreateCycleParams::from_dto(organization_id, payload)?;
    let cycle = CycleService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(cycle.into_dto())))
}

/// Update a review cycle.
///
/// Status moves forward only: `draft` to `active` to `closed`.
#[utoipa::path(
    put,
    path = "/api/cycles/{id}",
    tag = CYCLE_TAG,
    params(("id" = String, Path, description = "Cycle ID")),
    request_body = UpdateCycleDto,
    responses(
        (status = 200, description = "Cycle updated", body = CycleDto),
        (status = 400, description = "Invalid dates or status transition", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Cycle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_cycle(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateCycleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdateCycleParams::from_dto(payload)?;
    let cycle = CycleService::new(&state.db)
        .update(&user, &id, params)
        .await?;

    Ok((StatusCode::OK, Json(cycle.into_dto())))
}

/// Delete a review cycle and all feedback given in it.
#[utoipa::path(
    delete,
    path = "/api/cycles/{id}",
    tag = CYCLE_TAG,
    params(("id" = String, Path, description = "Cycle ID")),
    responses(
        (status = 204, description = "Cycle deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Cycle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_cycle(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    CycleService::new(&state.db).delete(&user, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
