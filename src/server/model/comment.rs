use chrono::{DateTime, Utc};

use crate::model::comment::{CommentDto, CreateCommentDto, UpdateCommentDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: String,
    pub feedback_id: String,
    pub parent_comment_id: Option<String>,
    pub author_id: String,
    pub content: String,
    /// Hidden from everyone but the author, the feedback's giver and receiver, and admins.
    pub is_private: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            feedback_id: entity.feedback_id,
            parent_comment_id: entity.parent_comment_id,
            author_id: entity.author_id,
            content: entity.content,
            is_private: entity.is_private,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            feedback_id: self.feedback_id,
            parent_comment_id: self.parent_comment_id,
            author_id: self.author_id,
            content: self.content,
            is_private: self.is_private,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub feedback_id: String,
    pub author_id: String,
    pub parent_comment_id: Option<String>,
    pub content: String,
    pub is_private: bool,
}

impl CreateCommentParams {
    pub fn from_dto(feedback_id: String, author_id: String, dto: CreateCommentDto) -> Self {
        Self {
            feedback_id,
            author_id,
            parent_comment_id: dto.parent_comment_id,
            content: dto.content.trim().to_string(),
            is_private: dto.is_private.unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCommentParams {
    pub content: Option<String>,
    pub is_private: Option<bool>,
}

impl UpdateCommentParams {
    pub fn from_dto(dto: UpdateCommentDto) -> Self {
        Self {
            content: dto.content.map(|c| c.trim().to_string()),
            is_private: dto.is_private,
        }
    }
}
