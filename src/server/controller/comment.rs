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
        comment::{CommentDto, CreateCommentDto, UpdateCommentDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::comment::{Comment, CreateCommentParams, UpdateCommentParams},
        service::comment::CommentService,
        state::AppState,
        validator::ValidatedJson,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Get the comments on a feedback record.
///
/// Returns comments oldest first. Private comments are left out unless the caller wrote
/// them, is the record's giver or receiver, or is an admin.
///
/// # Access Control
/// - Logged in, and able to see the feedback
///
/// # Returns
/// - `200 OK` - Visible comments
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Feedback missing or not visible
#[utoipa::path(
    get,
    path = "/api/feedback/{id}/comments",
    tag = COMMENT_TAG,
    params(("id" = String, Path, description = "Feedback ID")),
    responses(
        (status = 200, description = "Visible comments", body = Vec<CommentDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Feedback not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    session: Session,
    Path(feedback_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let comments = CommentService::new(&state.db)
        .get_by_feedback(&user, &feedback_id)
        .await?;

    let comments: Vec<CommentDto> = comments.into_iter().map(Comment::into_dto).collect();

    Ok((StatusCode::OK, Json(comments)))
}

/// Add a comment to a feedback record.
///
/// The author is the session user. `parentCommentId` makes the comment a reply and must
/// name a comment on the same record.
///
/// # Returns
/// - `201 Created` - The new comment
/// - `400 Bad Request` - Empty content or foreign parent comment
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Feedback missing or not visible
#[utoipa::path(
    post,
    path = "/api/feedback/{id}/comments",
    tag = COMMENT_TAG,
    params(("id" = String, Path, description = "Feedback ID")),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 400, description = "Invalid comment", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Feedback not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    session: Session,
    Path(feedback_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = CreateCommentParams::from_dto(feedback_id, user.id.clone(), payload);
    let comment = CommentService::new(&state.db).create(&user, params).await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// Edit a comment. Only its author may do this.
#[utoipa::path(
    put,
    path = "/api/feedback/{id}/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("id" = String, Path, description = "Feedback ID"),
        ("comment_id" = String, Path, description = "Comment ID")
    ),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Comment updated", body = CommentDto),
        (status = 400, description = "Invalid comment", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Feedback or comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    session: Session,
    Path((feedback_id, comment_id)): Path<(String, String)>,
    ValidatedJson(payload): ValidatedJson<UpdateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let comment = CommentService::new(&state.db)
        .update(
            &user,
            &feedback_id,
            &comment_id,
            UpdateCommentParams::from_dto(payload),
        )
        .await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

/// Delete a comment and its replies. Author or admin.
#[utoipa::path(
    delete,
    path = "/api/feedback/{id}/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("id" = String, Path, description = "Feedback ID"),
        ("comment_id" = String, Path, description = "Comment ID")
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Feedback or comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    session: Session,
    Path((feedback_id, comment_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    CommentService::new(&state.db)
        .delete(&user, &feedback_id, &comment_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
