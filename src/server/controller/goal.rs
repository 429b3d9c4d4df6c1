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
        goal::{CreateGoalDto, GoalDto, UpdateGoalDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::goal::{CreateGoalParams, Goal, UpdateGoalParams},
        service::goal::GoalService,
        state::AppState,
        validator::ValidatedJson,
    },
};

/// Tag for grouping goal endpoints in OpenAPI documentation
pub static GOAL_TAG: &str = "goal";

#[utoipa::path(
    get,
    path = "/api/feedback/{id}/goals",
    tag = GOAL_TAG,
    params(("id" = String, Path, description = "Feedback ID")),
    responses(
        (status = 200, description = "Goals on the feedback", body = Vec<GoalDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Feedback not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_goals(
    State(state): State<AppState>,
    session: Session,
    Path(feedback_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let goals = GoalService::new(&state.db)
        .get_by_feedback(&user, &feedback_id)
        .await?;

    let goals: Vec<GoalDto> = goals.into_iter().map(Goal::into_dto).collect();

    Ok((StatusCode::OK, Json(goals)))
}

/// Add a goal to feedback the caller wrote.
///
/// Unset fields are filled in: priority `medium`, status `not_started`, progress 0, and the
/// cycle's end date as target date.
#[utoipa::path(
    post,
    path = "/api/feedback/{id}/goals",
    tag = GOAL_TAG,
    params(("id" = String, Path, description = "Feedback ID")),
    request_body = CreateGoalDto,
    responses(
        (status = 201, description = "Goal created", body = GoalDto),
        (status = 400, description = "Invalid goal or completed feedback", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the giver", body = ErrorDto),
        (status = 404, description = "Feedback not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_goal(
    State(state): State<AppState>,
    session: Session,
    Path(feedback_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<CreateGoalDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let goal = GoalService::new(&state.db)
        .create(&user, CreateGoalParams::from_dto(feedback_id, payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(goal.into_dto())))
}

/// Update a goal. Setting status `completed` forces progress to 100.
#[utoipa::path(
    put,
    path = "/api/goals/{id}",
    tag = GOAL_TAG,
    params(("id" = String, Path, description = "Goal ID")),
    request_body = UpdateGoalDto,
    responses(
        (status = 200, description = "Goal updated", body = GoalDto),
        (status = 400, description = "Invalid goal or completed feedback", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the giver", body = ErrorDto),
        (status = 404, description = "Goal not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_goal(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateGoalDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let goal = GoalService::new(&state.db)
        .update(&user, &id, UpdateGoalParams::from_dto(payload)?)
        .await?;

    Ok((StatusCode::OK, Json(goal.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/goals/{id}",
    tag = GOAL_TAG,
    params(("id" = String, Path, description = "Goal ID")),
    responses(
        (status = 204, description = "Goal deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the giver", body = ErrorDto),
        (status = 404, description = "Goal not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_goal(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    GoalService::new(&state.db).delete(&user, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
