//! Feedback data repository.
//!
//! Feedback rows are always written together with their content row, so callers that create
//! or update feedback should pass a transaction.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select, sea_query::Query,
};

use crate::{
    model::feedback::FeedbackStatus,
    server::{
        data::new_id,
        model::feedback::{CreateFeedbackParams, FeedbackFilter, UpdateFeedbackParams},
        util::pagination::page_index,
    },
};

/// A feedback row with its content row, when one exists.
pub type FeedbackWithContent = (
    entity::feedback::Model,
    Option<entity::feedback_content::Model>,
);

pub struct FeedbackRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FeedbackRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a feedback row in `draft` status and its content row.
    ///
    /// # Arguments
    /// - `params` - Cycle, participants, review type and written content
    ///
    /// # Returns
    /// - `Ok(FeedbackWithContent)` - The inserted rows
    /// - `Err(DbErr)` - Database error, including the unique tuple violation
    pub async fn create(&self, params: CreateFeedbackParams) -> Result<FeedbackWithContent, DbErr> {
        let now = Utc::now();
        let feedback = entity::feedback::ActiveModel {
            id: ActiveValue::Set(new_id()),
            cycle_id: ActiveValue::Set(params.cycle_id),
            from_user_id: ActiveValue::Set(params.from_user_id),
            to_user_id: ActiveValue::Set(params.to_user_id),
            review_type: ActiveValue::Set(params.review_type.as_str().to_string()),
            status: ActiveValue::Set(FeedbackStatus::Draft.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        let content = entity::feedback_content::ActiveModel {
            id: ActiveValue::Set(new_id()),
            feedback_id: ActiveValue::Set(feedback.id.clone()),
            overall_comment: ActiveValue::Set(params.content.overall_comment),
            strengths: ActiveValue::Set(params.content.strengths),
            improvements: ActiveValue::Set(params.content.improvements),
        }
        .insert(self.db)
        .await?;

        Ok((feedback, Some(content)))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<FeedbackWithContent>, DbErr> {
        entity::prelude::Feedback::find_by_id(id.to_string())
            .find_also_related(entity::prelude::FeedbackContent)
            .one(self.db)
            .await
    }

    /// Finds existing feedback for the same cycle, giver, receiver and review type.
    pub async fn find_duplicate(
        &self,
        params: &CreateFeedbackParams,
    ) -> Result<Option<entity::feedback::Model>, DbErr> {
        entity::prelude::Feedback::find()
            .filter(entity::feedback::Column::CycleId.eq(&params.cycle_id))
            .filter(entity::feedback::Column::FromUserId.eq(&params.from_user_id))
            .filter(entity::feedback::Column::ToUserId.eq(&params.to_user_id))
            .filter(entity::feedback::Column::ReviewType.eq(params.review_type.as_str()))
            .one(self.db)
            .await
    }

    /// Gets one page of feedback matching `filter`, newest first.
    ///
    /// # Arguments
    /// - `filter` - Column filters
    /// - `page` - One-indexed page number
    /// - `limit` - Page size
    ///
    /// # Returns
    /// - `Ok((rows, total))` - Rows for the page and total number of matching rows. A page
    ///   whose offset cannot be expressed is empty.
    pub async fn get_paginated(
        &self,
        filter: &FeedbackFilter,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<FeedbackWithContent>, u64), DbErr> {
        let total = Self::filtered(filter).count(self.db).await?;

        let Some(index) = page_index(page, limit) else {
            return Ok((Vec::new(), total));
        };

        let rows = Self::filtered(filter)
            .order_by_desc(entity::feedback::Column::CreatedAt)
            .find_also_related(entity::prelude::FeedbackContent)
            .paginate(self.db, limit)
            .fetch_page(index)
            .await?;

        Ok((rows, total))
    }

    /// Gets all feedback matching `filter`, newest first.
    pub async fn find_all(&self, filter: &FeedbackFilter) -> Result<Vec<FeedbackWithContent>, DbErr> {
        Self::filtered(filter)
            .order_by_desc(entity::feedback::Column::CreatedAt)
            .find_also_related(entity::prelude::FeedbackContent)
            .all(self.db)
            .await
    }

    pub async fn count(&self, filter: &FeedbackFilter) -> Result<u64, DbErr> {
        Self::filtered(filter).count(self.db).await
    }

    /// Applies status and content changes.
    ///
    /// # Returns
    /// - `Ok(Some(FeedbackWithContent))` - Updated rows
    /// - `Ok(None)` - No feedback with that ID
    pub async fn update(
        &self,
        id: &str,
        params: UpdateFeedbackParams,
    ) -> Result<Option<FeedbackWithContent>, DbErr> {
        let Some((feedback, content)) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::feedback::ActiveModel = feedback.into();
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        let feedback = active.update(self.db).await?;

        let content = match content {
            Some(content) if params.has_content_changes() => {
                let mut active: entity::feedback_content::ActiveModel = content.into();
                if let Some(overall_comment) = params.overall_comment {
                    active.overall_comment = ActiveValue::Set(overall_comment);
                }
                if let Some(strengths) = params.strengths {
                    active.strengths = ActiveValue::Set(Some(strengths));
                }
                if let Some(improvements) = params.improvements {
                    active.improvements = ActiveValue::Set(Some(improvements));
                }
                Some(active.update(self.db).await?)
            }
            Some(content) => Some(content),
            None if params.has_content_changes() => Some(
                entity::feedback_content::ActiveModel {
                    id: ActiveValue::Set(new_id()),
                    feedback_id: ActiveValue::Set(feedback.id.clone()),
                    overall_comment: ActiveValue::Set(
                        params.overall_comment.unwrap_or_default(),
                    ),
                    strengths: ActiveValue::Set(params.strengths),
                    improvements: ActiveValue::Set(params.improvements),
                }
                .insert(self.db)
                .await?,
            ),
            None => None,
        };

        Ok(Some((feedback, content)))
    }

    /// Deletes feedback together with its content, comments, ratings and goals.
    ///
    /// # Returns
    /// - `Ok(true)` - Feedback deleted
    /// - `Ok(false)` - No feedback with that ID
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::FeedbackId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::Rating::delete_many()
            .filter(entity::rating::Column::FeedbackId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::Goal::delete_many()
            .filter(entity::goal::Column::FeedbackId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::FeedbackContent::delete_many()
            .filter(entity::feedback_content::Column::FeedbackId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Feedback::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    fn filtered(filter: &FeedbackFilter) -> Select<entity::feedback::Entity> {
        use entity::feedback::Column;

        let mut condition = Condition::all();
        if let Some(cycle_id) = &filter.cycle_id {
            condition = condition.add(Column::CycleId.eq(cycle_id));
        }
        if let Some(status) = filter.status {
            condition = condition.add(Column::Status.eq(status.as_str()));
        }
        if let Some(status) = filter.status_not {
            condition = condition.add(Column::Status.ne(status.as_str()));
        }
        if let Some(review_type) = filter.review_type {
            condition = condition.add(Column::ReviewType.eq(review_type.as_str()));
        }
        if let Some(from_user_id) = &filter.from_user_id {
            condition = condition.add(Column::FromUserId.eq(from_user_id));
        }
        if let Some(to_user_id) = &filter.to_user_id {
            condition = condition.add(Column::ToUserId.eq(to_user_id));
        }
        if let Some(user_id) = &filter.involving_user_id {
            condition = condition.add(
                Condition::any()
                    .add(Column::FromUserId.eq(user_id))
                    .add(Column::ToUserId.eq(user_id)),
            );
        }
        if let Some(organization_id) = &filter.organization_id {
            condition = condition.add(
                Column::CycleId.in_subquery(
                    Query::select()
                        .column(entity::feedback_cycle::Column::Id)
                        .from(entity::feedback_cycle::Entity)
                        .and_where(entity::feedback_cycle::Column::OrganizationId.eq(organization_id))
                        .to_owned(),
                ),
            );
        }

        entity::prelude::Feedback::find().filter(condition)
    }
}
