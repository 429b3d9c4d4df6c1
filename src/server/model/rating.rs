use crate::model::rating::{CreateRatingDto, RatingDto, UpdateRatingDto, DEFAULT_MAX_SCORE};

#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub id: String,
    pub feedback_id: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub score: f64,
    pub max_score: f64,
    pub weight: Option<f64>,
    pub comment: Option<String>,
}

impl Rating {
    pub fn from_entity(entity: entity::rating::Model) -> Self {
        Self {
            id: entity.id,
            feedback_id: entity.feedback_id,
            category: entity.category,
            subcategory: entity.subcategory,
            score: entity.score,
            max_score: entity.max_score,
            weight: entity.weight,
            comment: entity.comment,
        }
    }

    pub fn into_dto(self) -> RatingDto {
        RatingDto {
            id: self.id,
            feedback_id: self.feedback_id,
            category: self.category,
            subcategory: self.subcategory,
            score: self.score,
            max_score: self.max_score,
            weight: self.weight,
            comment: self.comment,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRatingParams {
    pub feedback_id: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub score: f64,
    pub max_score: f64,
    pub weight: Option<f64>,
    pub comment: Option<String>,
}

impl CreateRatingParams {
    /// Converts a validated payload. A missing `maxScore` means a five-point scale.
    pub fn from_dto(feedback_id: String, dto: CreateRatingDto) -> Self {
        Self {
            feedback_id,
            category: dto.category.trim().to_string(),
            subcategory: dto.subcategory,
            score: dto.score.unwrap_or_default(),
            max_score: dto.max_score.unwrap_or(DEFAULT_MAX_SCORE),
            weight: dto.weight,
            comment: dto.comment,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateRatingParams {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub score: Option<f64>,
    pub max_score: Option<f64>,
    pub weight: Option<f64>,
    pub comment: Option<String>,
}

impl UpdateRatingParams {
    pub fn from_dto(dto: UpdateRatingDto) -> Self {
        Self {
            category: dto.category.map(|c| c.trim().to_string()),
            subcategory: dto.subcategory,
            score: dto.score,
            max_score: dto.max_score,
            weight: dto.weight,
            comment: dto.comment,
        }
    }
}
