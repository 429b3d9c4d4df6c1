use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::new_id,
    model::comment::{CreateCommentParams, UpdateCommentParams},
};

pub struct CommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCommentParams) -> Result<entity::comment::Model, DbErr> {
        let now = Utc::now();
        entity::comment::ActiveModel {
            id: ActiveValue::Set(new_id()),
            feedback_id: ActiveValue::Set(params.feedback_id),
            parent_comment_id: ActiveValue::Set(params.parent_comment_id),
            author_id: ActiveValue::Set(params.author_id),
            content: ActiveValue::Set(params.content),
            is_private: ActiveValue::Set(params.is_private),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find_by_id(id.to_string())
            .one(self.db)
            .await
    }

    /// Gets all comments on a feedback record, oldest first.
    pub async fn find_by_feedback(
        &self,
        feedback_id: &str,
    ) -> Result<Vec<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::FeedbackId.eq(feedback_id))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        comment: entity::comment::Model,
        params: UpdateCommentParams,
    ) -> Result<entity::comment::Model, DbErr> {
        let mut active: entity::comment::ActiveModel = comment.into();
        if let Some(content) = params.content {
            active.content = ActiveValue::Set(content);
        }
        if let Some(is_private) = params.is_private {
            active.is_private = ActiveValue::Set(is_private);
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await
    }

    /// Deletes a comment and every reply beneath it.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of comments deleted, zero when the comment does not exist
    pub async fn delete(&self, id: &str) -> Result<u64, DbErr> {
        let mut doomed = vec![id.to_string()];
        let mut frontier = vec![id.to_string()];

        while !frontier.is_empty() {
            let replies: Vec<String> = entity::prelude::Comment::find()
                .filter(entity::comment::Column::ParentCommentId.is_in(frontier))
                .all(self.db)
                .await?
                .into_iter()
                .map(|c| c.id)
                .filter(|reply_id| !doomed.contains(reply_id))
                .collect();

            doomed.extend(replies.iter().cloned());
            frontier = replies;
        }

        let result = entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::Id.is_in(doomed))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
