use crate::{
    client::{
        api::helper::{get, parse_response, post, send_request},
        model::error::ApiError,
    },
    model::{feedback::FeedbackDto, review::DashboardDto},
};

pub async fn get_dashboard() -> Result<DashboardDto, ApiError> {
    let response = send_request(get("/api/reviews/dashboard")).await?;
    parse_response(response).await
}

pub async fn get_assigned_reviews() -> Result<Vec<FeedbackDto>, ApiError> {
    let response = send_request(get("/api/reviews/assigned")).await?;
    parse_response(response).await
}

pub async fn get_received_reviews() -> Result<Vec<FeedbackDto>, ApiError> {
    let response = send_request(get("/api/reviews/received")).await?;
    parse_response(response).await
}

pub async fn complete_review(feedback_id: &str) -> Result<FeedbackDto, ApiError> {
    let url = format!("/api/reviews/{}/complete", feedback_id);
    let response = send_request(post(&url)).await?;
    parse_response(response).await
}
