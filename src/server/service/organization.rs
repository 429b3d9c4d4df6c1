use sea_orm::DatabaseConnection;

use crate::server::{
    data::organization::OrganizationRepository,
    error::AppError,
    model::organization::{CreateOrganizationParams, Organization},
};

pub struct OrganizationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrganizationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Organization>, AppError> {
        Ok(OrganizationRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(Organization::from_entity)
            .collect())
    }

    /// Creates an organization. A domain already claimed by another one is a 409.
    pub async fn create(&self, params: CreateOrganizationParams) -> Result<Organization, AppError> {
        let repo = OrganizationRepository::new(self.db);

        if let Some(domain) = &params.domain {
            if repo.find_by_domain(domain).await?.is_some() {
                return Err(AppError::Conflict(format!(
                    "Domain {} already belongs to an organization",
                    domain
                )));
            }
        }

        Ok(Organization::from_entity(repo.create(params).await?))
    }
}
