use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::cycle::CycleStatus,
    server::{
        data::new_id,
        model::cycle::{CreateCycleParams, UpdateCycleParams},
    },
};

pub struct CycleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CycleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateCycleParams,
    ) -> Result<entity::feedback_cycle::Model, DbErr> {
        let now = Utc::now();
        entity::feedback_cycle::ActiveModel {
            id: ActiveValue::Set(new_id()),
            organization_id: ActiveValue::Set(params.organization_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: &str,
    ) -> Result<Option<entity::feedback_cycle::Model>, DbErr> {
        entity::prelude::FeedbackCycle::find_by_id(id.to_string())
            .one(self.db)
            .await
    }

    /// Gets an organization's cycles, most recent start first.
    pub async fn find_by_organization(
        &self,
        organization_id: &str,
    ) -> Result<Vec<entity::feedback_cycle::Model>, DbErr> {
        entity::prelude::FeedbackCycle::find()
            .filter(entity::feedback_cycle::Column::OrganizationId.eq(organization_id))
            .order_by_desc(entity::feedback_cycle::Column::StartDate)
            .all(self.db)
            .await
    }

    /// Applies the provided fields to a cycle.
    ///
    /// # Returns
    /// - `Ok(Some(model))` - Updated cycle
    /// - `Ok(None)` - No cycle with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        id: &str,
        params: UpdateCycleParams,
    ) -> Result<Option<entity::feedback_cycle::Model>, DbErr> {
        let Some(cycle) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::feedback_cycle::ActiveModel = cycle.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(start_date) = params.start_date {
            active.start_date = ActiveValue::Set(start_date);
        }
        if let Some(end_date) = params.end_date {
            active.end_date = ActiveValue::Set(end_date);
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a cycle and, through foreign keys, its feedback.
    ///
    /// # Returns
    /// - `Ok(true)` - Cycle deleted
    /// - `Ok(false)` - No cycle with that ID
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::FeedbackCycle::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts active cycles, optionally within one organization.
    pub async fn count_active(&self, organization_id: Option<&str>) -> Result<u64, DbErr> {
        let mut query = entity::prelude::FeedbackCycle::find().filter(
            entity::feedback_cycle::Column::Status.eq(CycleStatus::Active.as_str()),
        );
        if let Some(organization_id) = organization_id {
            query = query.filter(entity::feedback_cycle::Column::OrganizationId.eq(organization_id));
        }

        query.count(self.db).await
    }

    /// Closes active cycles whose end date is before `today`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of cycles closed
    pub async fn close_expired(&self, today: NaiveDate) -> Result<u64, DbErr> {
        let result = entity::prelude::FeedbackCycle::update_many()
            .col_expr(
                entity::feedback_cycle::Column::Status,
                sea_orm::sea_query::Expr::value(CycleStatus::Closed.as_str()),
            )
            .col_expr(
                entity::feedback_cycle::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .filter(entity::feedback_cycle::Column::Status.eq(CycleStatus::Active.as_str()))
            .filter(entity::feedback_cycle::Column::EndDate.lt(today))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
