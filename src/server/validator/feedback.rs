//! Feedback payload rules: creation, updates and list filters.

use crate::{
    model::{
        api::FieldErrorDto,
        feedback::{
            CreateFeedbackDto, FeedbackQueryDto, FeedbackStatus, ReviewType, UpdateFeedbackDto,
        },
    },
    server::validator::{FieldErrors, Validate},
};

pub const MAX_FEEDBACK_TEXT: usize = 10_000;

impl Validate for CreateFeedbackDto {
    fn validate(&self) -> Result<(), Vec<FieldErrorDto>> {
        let mut errors = FieldErrors::new();

        errors.require("cycleId", &self.cycle_id);
        errors.require("toUserId", &self.to_user_id);
        errors.require("reviewType", &self.review_type);
        if !self.review_type.trim().is_empty() {
            errors.one_of("reviewType", Some(&self.review_type), ReviewType::parse);
        }

        match &self.content {
            Some(content) => {
                errors.require("content.overallComment", &content.overall_comment);
                errors.max_len("content.overallComment", &content.overall_comment, MAX_FEEDBACK_TEXT);
                if let Some(strengths) = &content.strengths {
                    errors.max_len("content.strengths", strengths, MAX_FEEDBACK_TEXT);
                }
                if let Some(improvements) = &content.improvements {
                    errors.max_len("content.improvements", improvements, MAX_FEEDBACK_TEXT);
                }
            }
            None => errors.add("content.overallComment", "is required"),
        }

        errors.finish()
    }
}

impl Validate for UpdateFeedbackDto {
    fn validate(&self) -> Result<(), Vec<FieldErrorDto>> {
        let mut errors = FieldErrors::new();

        if let Some(status) = &self.status {
            match FeedbackStatus::parse(status) {
                None => errors.add("status", &format!("'{}' is not a valid value", status)),
                Some(FeedbackStatus::Completed) => {
                    errors.add("status", "use the complete endpoint to complete feedback")
                }
                Some(_) => {}
            }
        }

        if let Some(content) = &self.content {
            if let Some(overall_comment) = &content.overall_comment {
                errors.require("content.overallComment", overall_comment);
                errors.max_len("content.overallComment", overall_comment, MAX_FEEDBACK_TEXT);
            }
            if let Some(strengths) = &content.strengths {
                errors.max_len("content.strengths", strengths, MAX_FEEDBACK_TEXT);
            }
            if let Some(improvements) = &content.improvements {
                errors.max_len("content.improvements", improvements, MAX_FEEDBACK_TEXT);
            }
        }

        errors.finish()
    }
}

impl Validate for FeedbackQueryDto {
    fn validate(&self) -> Result<(), Vec<FieldErrorDto>> {
        let mut errors = FieldErrors::new();

        errors.one_of("status", self.status.as_deref(), FeedbackStatus::parse);
        errors.one_of("reviewType", self.review_type.as_deref(), ReviewType::parse);
        errors.pagination(self.page, self.limit);

        errors.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_payload(value: serde_json::Value) -> CreateFeedbackDto {
        serde_json::from_value(value).unwrap()
    }

    fn query(value: &str) -> FeedbackQueryDto {
        serde_json::from_value(json!({ "limit": value.parse::<i64>().unwrap() })).unwrap()
    }

    #[test]
    fn accepts_complete_payload() {
        let dto = create_payload(json!({
            "cycleId": "c1",
            "toUserId": "u2",
            "reviewType": "peer",
            "content": { "overallComment": "Consistently unblocks the team" }
        }));

        assert!(dto.validate().is_ok());
    }

    #[test]
    fn rejects_missing_overall_comment() {
        let dto = create_payload(json!({
            "cycleId": "c1",
            "toUserId": "u2",
            "reviewType": "peer",
            "content": { "strengths": "Communication" }
        }));

        let errors = dto.validate().unwrap_err();

        assert!(errors.iter().any(|e| e.field == "content.overallComment"));
    }

    #[test]
    fn rejects_missing_content() {
        let dto = create_payload(json!({
            "cycleId": "c1",
            "toUserId": "u2",
            "reviewType": "peer"
        }));

        let errors = dto.validate().unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "content.overallComment");
    }

    #[test]
    fn rejects_unknown_review_type() {
        let dto = create_payload(json!({
            "cycleId": "c1",
            "toUserId": "u2",
            "reviewType": "360",
            "content": { "overallComment": "Good" }
        }));

        let errors = dto.validate().unwrap_err();

        assert_eq!(errors[0].field, "reviewType");
    }

    #[test]
    fn limit_of_101_is_rejected() {
        let errors = query("101").validate().unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "limit");
    }

    #[test]
    fn limit_of_100_is_accepted() {
        assert!(query("100").validate().is_ok());
    }

    #[test]
    fn empty_query_uses_defaults() {
        let dto = FeedbackQueryDto::default();

        assert!(dto.validate().is_ok());
        assert_eq!(dto.pagination().page(), 1);
        assert_eq!(dto.pagination().limit(), 20);
    }

    #[test]
    fn update_cannot_complete_feedback() {
        let dto = UpdateFeedbackDto {
            status: Some("completed".to_string()),
            content: None,
        };

        assert!(dto.validate().is_err());
    }
}
