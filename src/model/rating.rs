use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_SCORE: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RatingDto {
    pub id: String,
    pub feedback_id: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub score: f64,
    pub max_score: f64,
    pub weight: Option<f64>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateRatingDto {
    #[serde(default)]
    pub category: String,
    pub subcategory: Option<String>,
    pub score: Option<f64>,
    pub max_score: Option<f64>,
    pub weight: Option<f64>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateRatingDto {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub score: Option<f64>,
    pub max_score: Option<f64>,
    pub weight: Option<f64>,
    pub comment: Option<String>,
}
