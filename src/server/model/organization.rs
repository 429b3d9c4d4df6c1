use chrono::{DateTime, Utc};

use crate::model::organization::{CreateOrganizationDto, OrganizationDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Organization {
    pub id: String,
    pub name: String,
    /// Lowercase email domain, without the `@`.
    pub domain: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Organization {
    pub fn from_entity(entity: entity::organization::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            domain: entity.domain,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> OrganizationDto {
        OrganizationDto {
            id: self.id,
            name: self.name,
            domain: self.domain,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateOrganizationParams {
    pub name: String,
    pub domain: Option<String>,
}

impl CreateOrganizationParams {
    /// Normalizes the domain to lowercase without a leading `@`.
    pub fn from_dto(dto: CreateOrganizationDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            domain: dto
                .domain
                .map(|d| d.trim().trim_start_matches('@').to_ascii_lowercase())
                .filter(|d| !d.is_empty()),
        }
    }
}
