use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{api::PageQueryDto, goal::GoalDto, rating::RatingDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum ReviewType {
    #[serde(rename = "self")]
    SelfReview,
    #[serde(rename = "peer")]
    Peer,
    #[serde(rename = "manager")]
    Manager,
    #[serde(rename = "upward")]
    Upward,
}

impl ReviewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelfReview => "self",
            Self::Peer => "peer",
            Self::Manager => "manager",
            Self::Upward => "upward",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "self" => Some(Self::SelfReview),
            "peer" => Some(Self::Peer),
            "manager" => Some(Self::Manager),
            "upward" => Some(Self::Upward),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum FeedbackStatus {
    Draft,
    Submitted,
    Completed,
}

impl FeedbackStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "draft" => Some(Self::Draft),
            "submitted" => Some(Self::Submitted),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FeedbackContentDto {
    pub overall_comment: String,
    pub strengths: Option<String>,
    pub improvements: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FeedbackDto {
    pub id: String,
    pub cycle_id: String,
    pub from_user_id: String,
    pub to_user_id: String,
    pub review_type: ReviewType,
    pub status: FeedbackStatus,
    pub content: Option<FeedbackContentDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A feedback record with everything attached to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FeedbackDetailDto {
    pub feedback: FeedbackDto,
    pub ratings: Vec<RatingDto>,
    pub goals: Vec<GoalDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PaginatedFeedbackDto {
    pub feedback: Vec<FeedbackDto>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedbackContentDto {
    #[serde(default)]
    pub overall_comment: String,
    pub strengths: Option<String>,
    pub improvements: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedbackDto {
    #[serde(default)]
    pub cycle_id: String,
    #[serde(default)]
    pub to_user_id: String,
    #[serde(default)]
    pub review_type: String,
    pub content: Option<CreateFeedbackContentDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeedbackContentDto {
    pub overall_comment: Option<String>,
    pub strengths: Option<String>,
    pub improvements: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeedbackDto {
    pub status: Option<String>,
    pub content: Option<UpdateFeedbackContentDto>,
}

/// Filters for `GET /api/feedback`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
#[serde(rename_all = "camelCase")]
pub struct FeedbackQueryDto {
    pub cycle_id: Option<String>,
    pub status: Option<String>,
    pub review_type: Option<String>,
    pub from_user_id: Option<String>,
    pub to_user_id: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl FeedbackQueryDto {
    pub fn pagination(&self) -> PageQueryDto {
        PageQueryDto {
            page: self.page,
            limit: self.limit,
        }
    }
}
