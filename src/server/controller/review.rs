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
        feedback::{FeedbackDto, ReviewType},
        review::{CreateReviewTemplateDto, DashboardDto, ReviewTemplateDto, TemplateQueryDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            feedback::Feedback,
            review::{CreateTemplateParams, ReviewTemplate},
        },
        service::{feedback::FeedbackService, review::ReviewService},
        state::AppState,
        validator::{ValidatedJson, ValidatedQuery},
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

/// Draft reviews the caller still has to write.
#[utoipa::path(
    get,
    path = "/api/reviews/assigned",
    tag = REVIEW_TAG,
    responses(
        (status = 200, description = "Draft feedback from the caller", body = Vec<FeedbackDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_assigned(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reviews = ReviewService::new(&state.db).assigned(&user).await?;

    Ok((StatusCode::OK, Json(into_dtos(reviews))))
}

/// Reviews the caller has submitted or completed.
#[utoipa::path(
    get,
    path = "/api/reviews/given",
    tag = REVIEW_TAG,
    responses(
        (status = 200, description = "Non-draft feedback from the caller", body = Vec<FeedbackDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_given(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reviews = ReviewService::new(&state.db).given(&user).await?;

    Ok((StatusCode::OK, Json(into_dtos(reviews))))
}

/// Reviews about the caller. Drafts stay hidden until submitted.
#[utoipa::path(
    get,
    path = "/api/reviews/received",
    tag = REVIEW_TAG,
    responses(
        (status = 200, description = "Non-draft feedback to the caller", body = Vec<FeedbackDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_received(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reviews = ReviewService::new(&state.db).received(&user).await?;

    Ok((StatusCode::OK, Json(into_dtos(reviews))))
}

#[utoipa::path(
    get,
    path = "/api/reviews/dashboard",
    tag = REVIEW_TAG,
    responses(
        (status = 200, description = "Review counts for the caller", body = DashboardDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let dashboard = ReviewService::new(&state.db).dashboard(&user).await?;

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}

/// Mark a draft or submitted review as completed.
///
/// # Access Control
/// - The giver of the review
///
/// # Returns
/// - `200 OK` - Completed feedback
/// - `400 Bad Request` - Already completed
/// - `403 Forbidden` - Caller is not the giver
/// - `404 Not Found` - Feedback missing or not visible
#[utoipa::path(
    post,
    path = "/api/reviews/{id}/complete",
    tag = REVIEW_TAG,
    params(("id" = String, Path, description = "Feedback ID")),
    responses(
        (status = 200, description = "Feedback completed", body = FeedbackDto),
        (status = 400, description = "Already completed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the giver", body = ErrorDto),
        (status = 404, description = "Feedback not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn complete_review(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let feedback = FeedbackService::new(&state.db).complete(&user, &id).await?;

    Ok((StatusCode::OK, Json(feedback.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/reviews/templates",
    tag = REVIEW_TAG,
    params(TemplateQueryDto),
    responses(
        (status = 200, description = "Review templates", body = Vec<ReviewTemplateDto>),
        (status = 400, description = "Unknown review type", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_templates(
    State(state): State<AppState>,
    session: Session,
    ValidatedQuery(query): ValidatedQuery<TemplateQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let review_type = query.review_type.as_deref().and_then(ReviewType::parse);
    let templates = ReviewService::new(&state.db)
        .get_templates(review_type)
        .await?;
    let templates: Vec<ReviewTemplateDto> = templates
        .into_iter()
        .map(ReviewTemplate::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(templates)))
}

#[utoipa::path(
    get,
    path = "/api/reviews/templates/{id}",
    tag = REVIEW_TAG,
    params(("id" = String, Path, description = "Template ID")),
    responses(
        (status = 200, description = "Review template", body = ReviewTemplateDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Template not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_template(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let template = ReviewService::new(&state.db).get_template(&id).await?;

    Ok((StatusCode::OK, Json(template.into_dto())))
}

/// Create a review template.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/reviews/templates",
    tag = REVIEW_TAG,
    request_body = CreateReviewTemplateDto,
    responses(
        (status = 201, description = "Template created", body = ReviewTemplateDto),
        (status = 400, description = "Invalid template", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_template(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<CreateReviewTemplateDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateTemplateParams::from_dto(payload)?;
    let template = ReviewService::new(&state.db)
        .create_template(params)
        .await?;

    Ok((StatusCode::CREATED, Json(template.into_dto())))
}

fn into_dtos(reviews: Vec<Feedback>) -> Vec<FeedbackDto> {
    reviews.into_iter().map(Feedback::into_dto).collect()
}
