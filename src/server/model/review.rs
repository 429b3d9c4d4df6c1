use chrono::{DateTime, Utc};

use crate::{
    model::{
        feedback::ReviewType,
        review::{CreateReviewTemplateDto, DashboardDto, ReviewTemplateDto},
    },
    server::{
        error::{internal::InternalError, AppError},
        util::parse::{parse_input, parse_stored},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewTemplate {
    pub id: String,
    pub name: String,
    pub review_type: ReviewType,
    pub description: Option<String>,
    pub questions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl ReviewTemplate {
    /// Converts a template row, decoding the stored JSON question list.
    pub fn from_entity(entity: entity::review_template::Model) -> Result<Self, AppError> {
        let review_type = parse_stored(
            "review_template.review_type",
            &entity.review_type,
            ReviewType::parse,
        )?;
        let questions = serde_json::from_str::<Vec<String>>(&entity.questions).map_err(|e| {
            InternalError::InvalidTemplateQuestions {
                template_id: entity.id.clone(),
                source: e,
            }
        })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            review_type,
            description: entity.description,
            questions,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> ReviewTemplateDto {
        ReviewTemplateDto {
            id: self.id,
            name: self.name,
            review_type: self.review_type,
            description: self.description,
            questions: self.questions,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTemplateParams {
    pub name: String,
    pub review_type: ReviewType,
    pub description: Option<String>,
    pub questions: Vec<String>,
}

impl CreateTemplateParams {
    pub fn from_dto(dto: CreateReviewTemplateDto) -> Result<Self, AppError> {
        Ok(Self {
            name: dto.name.trim().to_string(),
            review_type: parse_input("reviewType", &dto.review_type, ReviewType::parse)?,
            description: dto.description,
            questions: dto.questions,
        })
    }
}

/// Review counts for one user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    pub assigned: u64,
    pub given: u64,
    pub received: u64,
    pub completed: u64,
    pub active_cycles: u64,
}

impl Dashboard {
    pub fn into_dto(self) -> DashboardDto {
        DashboardDto {
            assigned: self.assigned,
            given: self.given,
            received: self.received,
            completed: self.completed,
            active_cycles: self.active_cycles,
        }
    }
}
