use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::new_id,
    model::goal::{NewGoal, UpdateGoalParams},
};

pub struct GoalRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GoalRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a goal whose defaults have already been resolved.
    pub async fn create(&self, goal: NewGoal) -> Result<entity::goal::Model, DbErr> {
        let now = Utc::now();
        entity::goal::ActiveModel {
            id: ActiveValue::Set(new_id()),
            feedback_id: ActiveValue::Set(goal.feedback_id),
            title: ActiveValue::Set(goal.title),
            description: ActiveValue::Set(goal.description),
            category: ActiveValue::Set(goal.category),
            priority: ActiveValue::Set(goal.priority.as_str().to_string()),
            target_date: ActiveValue::Set(goal.target_date),
            status: ActiveValue::Set(goal.status.as_str().to_string()),
            progress: ActiveValue::Set(goal.progress),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<entity::goal::Model>, DbErr> {
        entity::prelude::Goal::find_by_id(id.to_string())
            .one(self.db)
            .await
    }

    pub async fn find_by_feedback(
        &self,
        feedback_id: &str,
    ) -> Result<Vec<entity::goal::Model>, DbErr> {
        entity::prelude::Goal::find()
            .filter(entity::goal::Column::FeedbackId.eq(feedback_id))
            .order_by_asc(entity::goal::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        goal: entity::goal::Model,
        params: UpdateGoalParams,
    ) -> Result<entity::goal::Model, DbErr> {
        let mut active: entity::goal::ActiveModel = goal.into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(category) = params.category {
            active.category = ActiveValue::Set(Some(category));
        }
        if let Some(priority) = params.priority {
            active.priority = ActiveValue::Set(priority.as_str().to_string());
        }
        if let Some(target_date) = params.target_date {
            active.target_date = ActiveValue::Set(Some(target_date));
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(progress) = params.progress {
            active.progress = ActiveValue::Set(progress);
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Goal::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
