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
        rating::{CreateRatingDto, RatingDto, UpdateRatingDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::rating::{CreateRatingParams, Rating, UpdateRatingParams},
        service::rating::RatingService,
        state::AppState,
        validator::ValidatedJson,
    },
};

/// Tag for grouping rating endpoints in OpenAPI documentation
pub static RATING_TAG: &str = "rating";

#[utoipa::path(
    get,
    path = "/api/feedback/{id}/ratings",
    tag = RATING_TAG,
    params(("id" = String, Path, description = "Feedback ID")),
    responses(
        (status = 200, description = "Ratings on the feedback", body = Vec<RatingDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Feedback not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ratings(
    State(state): State<AppState>,
    session: Session,
    Path(feedback_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let ratings = RatingService::new(&state.db)
        .get_by_feedback(&user, &feedback_id)
        .await?;

    let ratings: Vec<RatingDto> = ratings.into_iter().map(Rating::into_dto).collect();

    Ok((StatusCode::OK, Json(ratings)))
}

/// Add a rating to feedback the caller wrote.
///
/// `maxScore` defaults to 5 and `score` must lie between 0 and `maxScore`.
#[utoipa::path(
    post,
    path = "/api/feedback/{id}/ratings",
    tag = RATING_TAG,
    params(("id" = String, Path, description = "Feedback ID")),
    request_body = CreateRatingDto,
    responses(
        (status = 201, description = "Rating created", body = RatingDto),
        (status = 400, description = "Invalid rating or completed feedback", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the giver", body = ErrorDto),
        (status = 404, description = "Feedback not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_rating(
    State(state): State<AppState>,
    session: Session,
    Path(feedback_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<CreateRatingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let rating = RatingService::new(&state.db)
        .create(&user, CreateRatingParams::from_dto(feedback_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(rating.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/ratings/{id}",
    tag = RATING_TAG,
    params(("id" = String, Path, description = "Rating ID")),
    request_body = UpdateRatingDto,
    responses(
        (status = 200, description = "Rating updated", body = RatingDto),
        (status = 400, description = "Invalid rating or completed feedback", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the giver", body = ErrorDto),
        (status = 404, description = "Rating not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_rating(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateRatingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let rating = RatingService::new(&state.db)
        .update(&user, &id, UpdateRatingParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(rating.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/ratings/{id}",
    tag = RATING_TAG,
    params(("id" = String, Path, description = "Rating ID")),
    responses(
        (status = 204, description = "Rating deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the giver", body = ErrorDto),
        (status = 404, description = "Rating not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_rating(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    RatingService::new(&state.db).delete(&user, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
