use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::feedback::ReviewType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ReviewTemplateDto {
    pub id: String,
    pub name: String,
    pub review_type: ReviewType,
    pub description: Option<String>,
    pub questions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewTemplateDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub review_type: String,
    pub description: Option<String>,
    #[serde(default)]
    pub questions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
#[serde(rename_all = "camelCase")]
pub struct TemplateQueryDto {
    pub review_type: Option<String>,
}

/// Review counts for the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DashboardDto {
    /// Drafts the user still has to write.
    pub assigned: u64,
    /// Submitted or completed feedback written by the user.
    pub given: u64,
    /// Submitted or completed feedback about the user.
    pub received: u64,
    /// Completed feedback about the user.
    pub completed: u64,
    pub active_cycles: u64,
}
