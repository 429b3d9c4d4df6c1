//! Comment factory.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating comments on a feedback record.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    feedback_id: String,
    author_id: String,
    parent_comment_id: Option<String>,
    content: String,
    is_private: bool,
}

impl<'a> CommentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, feedback_id: &str, author_id: &str) -> Self {
        Self {
            db,
            feedback_id: feedback_id.to_string(),
            author_id: author_id.to_string(),
            parent_comment_id: None,
            content: format!("Comment {}", next_id()),
            is_private: false,
        }
    }

    pub fn parent(mut self, parent_comment_id: &str) -> Self {
        self.parent_comment_id = Some(parent_comment_id.to_string());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn private(mut self, is_private: bool) -> Self {
        self.is_private = is_private;
        self
    }

    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        let now = Utc::now();
        entity::comment::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            feedback_id: ActiveValue::Set(self.feedback_id),
            parent_comment_id: ActiveValue::Set(self.parent_comment_id),
            author_id: ActiveValue::Set(self.author_id),
            content: ActiveValue::Set(self.content),
            is_private: ActiveValue::Set(self.is_private),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a public top-level comment.
pub async fn create_comment(
    db: &DatabaseConnection,
    feedback_id: &str,
    author_id: &str,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, feedback_id, author_id).build().await
}
