//! Comment service.
//!
//! Comments hang off a feedback record. Anyone who can see the record can read its public
//! comments and add new ones; private comments are limited to their author, the record's
//! giver and receiver, and admins.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::comment::CommentRepository,
    error::AppError,
    model::{
        comment::{Comment, CreateCommentParams, UpdateCommentParams},
        user::User,
    },
    service::feedback::{administers, find_visible, sees_private_comments},
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the comments on a feedback record visible to `viewer`, oldest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Visible comments
    /// - `Err(AppError::NotFound)` - Feedback is missing or hidden from `viewer`
    pub async fn get_by_feedback(
        &self,
        viewer: &User,
        feedback_id: &str,
    ) -> Result<Vec<Comment>, AppError> {
        let feedback = find_visible(self.db, feedback_id, viewer).await?;
        let sees_private = sees_private_comments(self.db, &feedback, viewer).await?;

        let comments = CommentRepository::new(self.db)
            .find_by_feedback(&feedback.id)
            .await?
            .into_iter()
            .map(Comment::from_entity)
            .filter(|c| !c.is_private || sees_private || c.author_id == viewer.id)
            .collect();

        Ok(comments)
    }

    /// Adds a comment, optionally as a reply to another comment on the same record.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The new comment
    /// - `Err(AppError::NotFound)` - Feedback is missing or hidden from the author
    /// - `Err(AppError::BadRequest)` - Parent comment belongs to another record
    pub async fn create(&self, author: &User, params: CreateCommentParams) -> Result<Comment, AppError> {
        let txn = self.db.begin().await?;

        find_visible(&txn, &params.feedback_id, author).await?;

        let comment_repo = CommentRepository::new(&txn);
        if let Some(parent_id) = &params.parent_comment_id {
            let parent = comment_repo.find_by_id(parent_id).await?;
            if parent.is_none_or(|p| p.feedback_id != params.feedback_id) {
                return Err(AppError::BadRequest(
                    "Parent comment does not belong to this feedback".to_string(),
                ));
            }
        }

        let comment = comment_repo.create(params).await?;
        txn.commit().await?;

        Ok(Comment::from_entity(comment))
    }

    /// Edits a comment. Only its author may do this.
    pub async fn update(
        &self,
        actor: &User,
        feedback_id: &str,
        comment_id: &str,
        params: UpdateCommentParams,
    ) -> Result<Comment, AppError> {
        let txn = self.db.begin().await?;

        find_visible(&txn, feedback_id, actor).await?;

        let comment_repo = CommentRepository::new(&txn);
        let comment = find_on_feedback(&comment_repo, feedback_id, comment_id).await?;
        if comment.author_id != actor.id {
            return Err(AppError::Forbidden(
                "Only the author of a comment can edit it".to_string(),
            ));
        }

        let comment = comment_repo.update(comment, params).await?;
        txn.commit().await?;

        Ok(Comment::from_entity(comment))
    }

    /// Deletes a comment and its replies. Author or admin.
    pub async fn delete(
        &self,
        actor: &User,
        feedback_id: &str,
        comment_id: &str,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let feedback = find_visible(&txn, feedback_id, actor).await?;

        let comment_repo = CommentRepository::new(&txn);
        let comment = find_on_feedback(&comment_repo, feedback_id, comment_id).await?;
        if comment.author_id != actor.id && !administers(&txn, &feedback, actor).await? {
            return Err(AppError::Forbidden(
                "Only the author of a comment can delete it".to_string(),
            ));
        }

        comment_repo.delete(&comment.id).await?;
        txn.commit().await?;

        Ok(())
    }
}

async fn find_on_feedback<C: sea_orm::ConnectionTrait>(
    repo: &CommentRepository<'_, C>,
    feedback_id: &str,
    comment_id: &str,
) -> Result<entity::comment::Model, AppError> {
    match repo.find_by_id(comment_id).await? {
        Some(comment) if comment.feedback_id == feedback_id => Ok(comment),
        _ => Err(AppError::NotFound("Comment not found".to_string())),
    }
}
