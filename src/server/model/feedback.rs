//! Feedback domain models and parameters.
//!
//! A feedback record is one person's review of another within a cycle. Its written
//! content lives in a separate 1:1 row; ratings, goals and comments hang off the record.

use chrono::{DateTime, Utc};

use crate::{
    model::feedback::{
        CreateFeedbackDto, FeedbackContentDto, FeedbackDetailDto, FeedbackDto, FeedbackQueryDto,
        FeedbackStatus, PaginatedFeedbackDto, ReviewType, UpdateFeedbackDto,
    },
    server::{
        error::AppError,
        model::{goal::Goal, rating::Rating},
        util::parse::{parse_input, parse_stored},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackContent {
    pub overall_comment: String,
    pub strengths: Option<String>,
    pub improvements: Option<String>,
}

impl FeedbackContent {
    pub fn from_entity(entity: entity::feedback_content::Model) -> Self {
        Self {
            overall_comment: entity.overall_comment,
            strengths: entity.strengths,
            improvements: entity.improvements,
        }
    }

    pub fn into_dto(self) -> FeedbackContentDto {
        FeedbackContentDto {
            overall_comment: self.overall_comment,
            strengths: self.strengths,
            improvements: self.improvements,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub id: String,
    pub cycle_id: String,
    /// The user who wrote the feedback.
    pub from_user_id: String,
    /// The user the feedback is about.
    pub to_user_id: String,
    pub review_type: ReviewType,
    pub status: FeedbackStatus,
    pub content: Option<FeedbackContent>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Feedback {
    /// Converts a feedback row and its optional content row to a domain model.
    ///
    /// # Returns
    /// - `Ok(Feedback)` - The converted feedback
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - Unknown stored type or status
    pub fn from_entity(
        entity: entity::feedback::Model,
        content: Option<entity::feedback_content::Model>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            review_type: parse_stored("feedback.review_type", &entity.review_type, ReviewType::parse)?,
            status: parse_stored("feedback.status", &entity.status, FeedbackStatus::parse)?,
            id: entity.id,
            cycle_id: entity.cycle_id,
            from_user_id: entity.from_user_id,
            to_user_id: entity.to_user_id,
            content: content.map(FeedbackContent::from_entity),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Whether `user_id` wrote or received this feedback.
    pub fn involves(&self, user_id: &str) -> bool {
        self.from_user_id == user_id || self.to_user_id == user_id
    }

    pub fn into_dto(self) -> FeedbackDto {
        FeedbackDto {
            id: self.id,
            cycle_id: self.cycle_id,
            from_user_id: self.from_user_id,
            to_user_id: self.to_user_id,
            review_type: self.review_type,
            status: self.status,
            content: self.content.map(FeedbackContent::into_dto),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Feedback with its ratings and goals.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackDetail {
    pub feedback: Feedback,
    pub ratings: Vec<Rating>,
    pub goals: Vec<Goal>,
}

impl FeedbackDetail {
    pub fn into_dto(self) -> FeedbackDetailDto {
        FeedbackDetailDto {
            feedback: self.feedback.into_dto(),
            ratings: self.ratings.into_iter().map(Rating::into_dto).collect(),
            goals: self.goals.into_iter().map(Goal::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateFeedbackParams {
    pub cycle_id: String,
    pub from_user_id: String,
    pub to_user_id: String,
    pub review_type: ReviewType,
    pub content: FeedbackContent,
}

impl CreateFeedbackParams {
    /// Converts a validated creation payload, authored by `from_user_id`.
    pub fn from_dto(from_user_id: String, dto: CreateFeedbackDto) -> Result<Self, AppError> {
        let review_type = parse_input("reviewType", &dto.review_type, ReviewType::parse)?;
        let content = dto.content.unwrap_or_default();

        Ok(Self {
            cycle_id: dto.cycle_id,
            from_user_id,
            to_user_id: dto.to_user_id,
            review_type,
            content: FeedbackContent {
                overall_comment: content.overall_comment,
                strengths: content.strengths,
                improvements: content.improvements,
            },
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateFeedbackParams {
    pub status: Option<FeedbackStatus>,
    pub overall_comment: Option<String>,
    pub strengths: Option<String>,
    pub improvements: Option<String>,
}

impl UpdateFeedbackParams {
    pub fn from_dto(dto: UpdateFeedbackDto) -> Result<Self, AppError> {
        let content = dto.content.unwrap_or_default();

        Ok(Self {
            status: dto
                .status
                .map(|s| parse_input("status", &s, FeedbackStatus::parse))
                .transpose()?,
            overall_comment: content.overall_comment,
            strengths: content.strengths,
            improvements: content.improvements,
        })
    }

    pub fn has_content_changes(&self) -> bool {
        self.overall_comment.is_some() || self.strengths.is_some() || self.improvements.is_some()
    }
}

/// Filters for listing feedback.
#[derive(Debug, Clone, Default)]
pub struct FeedbackFilter {
    pub cycle_id: Option<String>,
    pub status: Option<FeedbackStatus>,
    /// Excludes this status; used for "everything but drafts".
    pub status_not: Option<FeedbackStatus>,
    pub review_type: Option<ReviewType>,
    pub from_user_id: Option<String>,
    pub to_user_id: Option<String>,
    /// Restricts results to feedback this user wrote or received.
    pub involving_user_id: Option<String>,
    /// Restricts results to cycles of this organization.
    pub organization_id: Option<String>,
}

impl FeedbackFilter {
    pub fn from_query(query: &FeedbackQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            cycle_id: query.cycle_id.clone(),
            status: query
                .status
                .as_deref()
                .map(|s| parse_input("status", s, FeedbackStatus::parse))
                .transpose()?,
            status_not: None,
            review_type: query
                .review_type
                .as_deref()
                .map(|s| parse_input("reviewType", s, ReviewType::parse))
                .transpose()?,
            from_user_id: query.from_user_id.clone(),
            to_user_id: query.to_user_id.clone(),
            involving_user_id: None,
            organization_id: None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedFeedback {
    pub feedback: Vec<Feedback>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl PaginatedFeedback {
    pub fn into_dto(self) -> PaginatedFeedbackDto {
        PaginatedFeedbackDto {
            feedback: self.feedback.into_iter().map(Feedback::into_dto).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}
