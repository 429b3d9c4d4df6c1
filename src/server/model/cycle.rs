//! Review cycle domain models.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::cycle::{CreateCycleDto, CycleDto, CycleStatus, UpdateCycleDto},
    server::{
        error::AppError,
        util::parse::{parse_input, parse_stored},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Cycle {
    pub id: String,
    pub organization_id: String,
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: CycleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cycle {
    pub fn from_entity(entity: entity::feedback_cycle::Model) -> Result<Self, AppError> {
        let status = parse_stored("feedback_cycle.status", &entity.status, CycleStatus::parse)?;

        Ok(Self {
            id: entity.id,
            organization_id: entity.organization_id,
            name: entity.name,
            description: entity.description,
            start_date: entity.start_date,
            end_date: entity.end_date,
            status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> CycleDto {
        CycleDto {
            id: self.id,
            organization_id: self.organization_id,
            name: self.name,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCycleParams {
    pub organization_id: String,
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: CycleStatus,
}

impl CreateCycleParams {
    /// Converts a validated creation payload. New cycles start as drafts unless a status is
    /// given.
    pub fn from_dto(organization_id: String, dto: CreateCycleDto) -> Result<Self, AppError> {
        let (Some(start_date), Some(end_date)) = (dto.start_date, dto.end_date) else {
            return Err(AppError::BadRequest(
                "startDate and endDate are required".to_string(),
            ));
        };
        let status = match dto.status {
            Some(status) => parse_input("status", &status, CycleStatus::parse)?,
            None => CycleStatus::Draft,
        };

        Ok(Self {
            organization_id,
            name: dto.name.trim().to_string(),
            description: dto.description,
            start_date,
            end_date,
            status,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCycleParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<CycleStatus>,
}

impl UpdateCycleParams {
    pub fn from_dto(dto: UpdateCycleDto) -> Result<Self, AppError> {
        Ok(Self {
            name: dto.name.map(|n| n.trim().to_string()),
            description: dto.description,
            start_date: dto.start_date,
            end_date: dto.end_date,
            status: dto
                .status
                .map(|s| parse_input("status", &s, CycleStatus::parse))
                .transpose()?,
        })
    }
}
