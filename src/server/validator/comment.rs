use crate::{
    model::{
        api::FieldErrorDto,
        comment::{CreateCommentDto, UpdateCommentDto},
    },
    server::validator::{FieldErrors, Validate},
};

pub const MAX_COMMENT_LENGTH: usize = 5_000;

impl Validate for CreateCommentDto {
    fn validate(&self) -> Result<(), Vec<FieldErrorDto>> {
        let mut errors = FieldErrors::new();

        errors.require("content", &self.content);
        errors.max_len("content", &self.content, MAX_COMMENT_LENGTH);
        if let Some(parent_comment_id) = &self.parent_comment_id {
            errors.require("parentCommentId", parent_comment_id);
        }

        errors.finish()
    }
}

impl Validate for UpdateCommentDto {
    fn validate(&self) -> Result<(), Vec<FieldErrorDto>> {
        let mut errors = FieldErrors::new();

        if let Some(content) = &self.content {
            errors.require("content", content);
            errors.max_len("content", content, MAX_COMMENT_LENGTH);
        }
        if self.content.is_none() && self.is_private.is_none() {
            errors.add("content", "nothing to update");
        }

        errors.finish()
    }
}
