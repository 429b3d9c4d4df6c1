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
        feedback::{
            CreateFeedbackDto, FeedbackDetailDto, FeedbackDto, FeedbackQueryDto,
            PaginatedFeedbackDto, UpdateFeedbackDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::feedback::{CreateFeedbackParams, FeedbackFilter, UpdateFeedbackParams},
        service::feedback::FeedbackService,
        state::AppState,
        validator::{ValidatedJson, ValidatedQuery},
    },
};

/// Tag for grouping feedback endpoints in OpenAPI documentation
pub static FEEDBACK_TAG: &str = "feedback";

/// Create feedback.
///
/// Creates a draft feedback record from the session user to `toUserId` within an active
/// cycle, together with its written content.
///
/// # Access Control
/// - Logged in
///
/// # Returns
/// - `201 Created` - New draft feedback
/// - `400 Bad Request` - Invalid payload, unknown receiver, or cycle not active
/// - `401 Unauthorized` - Not logged in
/// - `409 Conflict` - Same giver, receiver, cycle and review type already exist
#[utoipa::path(
    post,
    path = "/api/feedback",
    tag = FEEDBACK_TAG,
    request_body = CreateFeedbackDto,
    responses(
        (status = 201, description = "Feedback created", body = FeedbackDto),
        (status = 400, description = "Invalid feedback", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Duplicate feedback", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_feedback(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<CreateFeedbackDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = CreateFeedbackParams::from_dto(user.id.clone(), payload)?;
    let feedback = FeedbackService::new(&state.db).create(&user, params).await?;

    Ok((StatusCode::CREATED, Json(feedback.into_dto())))
}

/// List feedback.
///
/// Returns a page of feedback, newest first. Admins see every record in their organization's
/// cycles and super admins see all of them. Other users see only feedback they gave or
/// received.
///
/// # Returns
/// - `200 OK` - Page of feedback with `total`, `page`, `limit` and `total_pages`
/// - `400 Bad Request` - Unknown filter value, `page < 1`, or `limit` outside 1 to 100
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/feedback",
    tag = FEEDBACK_TAG,
    params(FeedbackQueryDto),
    responses(
        (status = 200, description = "Page of feedback", body = PaginatedFeedbackDto),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_feedback_list(
    State(state): State<AppState>,
    session: Session,
    ValidatedQuery(query): ValidatedQuery<FeedbackQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let filter = FeedbackFilter::from_query(&query)?;
    let pagination = query.pagination();

    let page = FeedbackService::new(&state.db)
        .get_paginated(&user, filter, pagination.page(), pagination.limit())
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Get one feedback record with its ratings and goals.
#[utoipa::path(
    get,
    path = "/api/feedback/{id}",
    tag = FEEDBACK_TAG,
    params(("id" = String, Path, description = "Feedback ID")),
    responses(
        (status = 200, description = "Feedback with ratings and goals", body = FeedbackDetailDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Feedback not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_feedback(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let detail = FeedbackService::new(&state.db).get_detail(&user, &id).await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Update feedback status or content.
///
/// Only the giver may edit, and only until the record is completed. Status may move from
/// draft to submitted; completion goes through `POST /api/reviews/{id}/complete`.
#[utoipa::path(
    put,
    path = "/api/feedback/{id}",
    tag = FEEDBACK_TAG,
    params(("id" = String, Path, description = "Feedback ID")),
    request_body = UpdateFeedbackDto,
    responses(
        (status = 200, description = "Feedback updated", body = FeedbackDto),
        (status = 400, description = "Invalid update or completed feedback", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the giver", body = ErrorDto),
        (status = 404, description = "Feedback not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_feedback(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateFeedbackDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = UpdateFeedbackParams::from_dto(payload)?;
    let feedback = FeedbackService::new(&state.db)
        .update(&user, &id, params)
        .await?;

    Ok((StatusCode::OK, Json(feedback.into_dto())))
}

/// Delete feedback with its content, comments, ratings and goals. Giver or admin.
#[utoipa::path(
    delete,
    path = "/api/feedback/{id}",
    tag = FEEDBACK_TAG,
    params(("id" = String, Path, description = "Feedback ID")),
    responses(
        (status = 204, description = "Feedback deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the giver", body = ErrorDto),
        (status = 404, description = "Feedback not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_feedback(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    FeedbackService::new(&state.db).delete(&user, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
