//! Reporting-line repository.
//!
//! An edge is in effect on a date when it has started and has not reached its exclusive end
//! date. Ending an edge deactivates it, but its end date keeps bounding the history, so past
//! dates still resolve it. An inactive edge without an end date is never in effect. Every
//! point-in-time query here applies that rule in SQL.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{data::new_id, model::hierarchy::CreateEdgeParams};

use entity::organizational_hierarchy::Column;

pub struct HierarchyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HierarchyRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateEdgeParams,
    ) -> Result<entity::organizational_hierarchy::Model, DbErr> {
        entity::organizational_hierarchy::ActiveModel {
            id: ActiveValue::Set(new_id()),
            organization_id: ActiveValue::Set(params.organization_id),
            manager_id: ActiveValue::Set(params.manager_id),
            employee_id: ActiveValue::Set(params.employee_id),
            effective_date: ActiveValue::Set(params.effective_date),
            end_date: ActiveValue::Set(params.end_date),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: &str,
    ) -> Result<Option<entity::organizational_hierarchy::Model>, DbErr> {
        entity::prelude::OrganizationalHierarchy::find_by_id(id.to_string())
            .one(self.db)
            .await
    }

    /// Gets every edge of an organization in effect on `date`.
    pub async fn find_in_effect(
        &self,
        organization_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<entity::organizational_hierarchy::Model>, DbErr> {
        entity::prelude::OrganizationalHierarchy::find()
            .filter(Column::OrganizationId.eq(organization_id))
            .filter(in_effect_on(date))
            .order_by_asc(Column::EffectiveDate)
            .all(self.db)
            .await
    }

    /// Gets every edge of an organization in effect at any point of `[from, until)`.
    ///
    /// An open `until` reaches into the future.
    pub async fn find_overlapping(
        &self,
        organization_id: &str,
        from: NaiveDate,
        until: Option<NaiveDate>,
    ) -> Result<Vec<entity::organizational_hierarchy::Model>, DbErr> {
        let mut condition = Condition::all()
            .add(Column::OrganizationId.eq(organization_id))
            .add(still_running_after(from));
        if let Some(until) = until {
            condition = condition.add(Column::EffectiveDate.lt(until));
        }

        entity::prelude::OrganizationalHierarchy::find()
            .filter(condition)
            .order_by_asc(Column::EffectiveDate)
            .all(self.db)
            .await
    }

    /// Gets the edge naming an employee's manager on `date`.
    ///
    /// When overlapping edges exist the most recently effective one wins.
    pub async fn find_manager_edge(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> Result<Option<entity::organizational_hierarchy::Model>, DbErr> {
        entity::prelude::OrganizationalHierarchy::find()
            .filter(Column::EmployeeId.eq(employee_id))
            .filter(in_effect_on(date))
            .order_by_desc(Column::EffectiveDate)
            .order_by_desc(Column::CreatedAt)
            .one(self.db)
            .await
    }

    /// Gets the edges to a manager's direct reports on `date`.
    pub async fn find_report_edges(
        &self,
        manager_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<entity::organizational_hierarchy::Model>, DbErr> {
        entity::prelude::OrganizationalHierarchy::find()
            .filter(Column::ManagerId.eq(manager_id))
            .filter(in_effect_on(date))
            .order_by_asc(Column::EffectiveDate)
            .all(self.db)
            .await
    }

    /// Ends an edge on `end_date`. The edge stays active until that date has passed.
    ///
    /// # Returns
    /// - `Ok(Some(model))` - Updated edge
    /// - `Ok(None)` - No edge with that ID
    pub async fn end(
        &self,
        id: &str,
        end_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<Option<entity::organizational_hierarchy::Model>, DbErr> {
        let Some(edge) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::organizational_hierarchy::ActiveModel = edge.into();
        active.end_date = ActiveValue::Set(Some(end_date));
        active.is_active = ActiveValue::Set(end_date > today);

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::OrganizationalHierarchy::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deactivates active edges whose end date is on or before `today`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of edges deactivated
    pub async fn deactivate_ended(&self, today: NaiveDate) -> Result<u64, DbErr> {
        let result = entity::prelude::OrganizationalHierarchy::update_many()
            .col_expr(Column::IsActive, sea_orm::sea_query::Expr::value(false))
            .filter(Column::IsActive.eq(true))
            .filter(Column::EndDate.is_not_null())
            .filter(Column::EndDate.lte(today))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn in_effect_on(date: NaiveDate) -> Condition {
    Condition::all()
        .add(Column::EffectiveDate.lte(date))
        .add(still_running_after(date))
}

/// Open edges that are still active, or edges ending after `date`.
fn still_running_after(date: NaiveDate) -> Condition {
    Condition::any()
        .add(
            Condition::all()
                .add(Column::EndDate.is_null())
                .add(Column::IsActive.eq(true)),
        )
        .add(Column::EndDate.gt(date))
}
