use crate::{
    model::{
        api::FieldErrorDto,
        feedback::ReviewType,
        review::{CreateReviewTemplateDto, TemplateQueryDto},
    },
    server::validator::{FieldErrors, Validate},
};

impl Validate for CreateReviewTemplateDto {
    fn validate(&self) -> Result<(), Vec<FieldErrorDto>> {
        let mut errors = FieldErrors::new();

        errors.require("name", &self.name);
        errors.require("reviewType", &self.review_type);
        if !self.review_type.trim().is_empty() {
            errors.one_of("reviewType", Some(&self.review_type), ReviewType::parse);
        }
        if self.questions.is_empty() {
            errors.add("questions", "at least one question is required");
        }
        if self.questions.iter().any(|q| q.trim().is_empty()) {
            errors.add("questions", "questions must not be blank");
        }

        errors.finish()
    }
}

impl Validate for TemplateQueryDto {
    fn validate(&self) -> Result<(), Vec<FieldErrorDto>> {
        let mut errors = FieldErrors::new();
        errors.one_of("reviewType", self.review_type.as_deref(), ReviewType::parse);
        errors.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_needs_questions() {
        let dto = CreateReviewTemplateDto {
            name: "Peer review".to_string(),
            review_type: "peer".to_string(),
            ..Default::default()
        };

        let errors = dto.validate().unwrap_err();

        assert_eq!(errors[0].field, "questions");
    }
}
