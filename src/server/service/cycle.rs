//! Review cycle service.
//!
//! Cycles belong to an organization and are only visible inside it; super admins see every
//! organization's cycles. Status only moves forward: draft, active, closed.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{cycle::CycleRepository, feedback::FeedbackRepository},
    error::AppError,
    model::{
        cycle::{CreateCycleParams, Cycle, UpdateCycleParams},
        feedback::FeedbackFilter,
        user::User,
    },
};

pub struct CycleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CycleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the cycles of the viewer's organization, newest first.
    pub async fn get_for_user(&self, viewer: &User) -> Result<Vec<Cycle>, AppError> {
        let Some(organization_id) = &viewer.organization_id else {
            return Ok(Vec::new());
        };

        CycleRepository::new(self.db)
            .find_by_organization(organization_id)
            .await?
            .into_iter()
            .map(Cycle::from_entity)
            .collect()
    }

    /// # Returns
    /// - `Ok(Cycle)` - Cycle in the viewer's organization
    /// - `Err(AppError::NotFound)` - Missing, or in another organization
    pub async fn get_by_id(&self, viewer: &User, id: &str) -> Result<Cycle, AppError> {
        let Some(cycle) = CycleRepository::new(self.db).find_by_id(id).await? else {
            return Err(not_found());
        };
        let cycle = Cycle::from_entity(cycle)?;
        ensure_same_organization(viewer, &cycle)?;

        Ok(cycle)
    }

    /// Creates a cycle.
    ///
    /// # Returns
    /// - `Ok(Cycle)` - New cycle
    /// - `Err(AppError::BadRequest)` - The dates are inverted
    pub async fn create(&self, params: CreateCycleParams) -> Result<Cycle, AppError> {
        check_dates(params.start_date, params.end_date)?;

        let cycle = CycleRepository::new(self.db).create(params).await?;

        Cycle::from_entity(cycle)
    }

    /// Applies changes, checking the resulting date range and the status transition.
    pub async fn update(
        &self,
        actor: &User,
        id: &str,
        params: UpdateCycleParams,
    ) -> Result<Cycle, AppError> {
        let txn = self.db.begin().await?;
        let cycle_repo = CycleRepository::new(&txn);

        let Some(current) = cycle_repo.find_by_id(id).await? else {
            return Err(not_found());
        };
        let current = Cycle::from_entity(current)?;
        ensure_same_organization(actor, &current)?;

        check_dates(
            params.start_date.unwrap_or(current.start_date),
            params.end_date.unwrap_or(current.end_date),
        )?;
        if let Some(next) = params.status {
            if !current.status.can_transition_to(next) {
                return Err(AppError::BadRequest(format!(
                    "Cycle cannot move from {} to {}",
                    current.status.as_str(),
                    next.as_str()
                )));
            }
        }

        let Some(updated) = cycle_repo.update(id, params).await? else {
            return Err(not_found());
        };
        txn.commit().await?;

        Cycle::from_entity(updated)
    }

    /// Deletes a cycle with all feedback given in it.
    pub async fn delete(&self, actor: &User, id: &str) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let cycle_repo = CycleRepository::new(&txn);

        let Some(cycle) = cycle_repo.find_by_id(id).await? else {
            return Err(not_found());
        };
        ensure_same_organization(actor, &Cycle::from_entity(cycle)?)?;

        let feedback_repo = FeedbackRepository::new(&txn);
        let filter = FeedbackFilter {
            cycle_id: Some(id.to_string()),
            ..Default::default()
        };
        for (feedback, _) in feedback_repo.find_all(&filter).await? {
            feedback_repo.delete(&feedback.id).await?;
        }
        cycle_repo.delete(id).await?;

        txn.commit().await?;

        Ok(())
    }
}

fn check_dates(start: chrono::NaiveDate, end: chrono::NaiveDate) -> Result<(), AppError> {
    if start > end {
        return Err(AppError::BadRequest(
            "startDate must not be after endDate".to_string(),
        ));
    }
    Ok(())
}

fn ensure_same_organization(user: &User, cycle: &Cycle) -> Result<(), AppError> {
    if user.is_super_admin() || user.organization_id.as_deref() == Some(&cycle.organization_id) {
        Ok(())
    } else {
        Err(not_found())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Cycle not found".to_string())
}
