use crate::{
    model::{
        api::FieldErrorDto,
        goal::{CreateGoalDto, GoalPriority, GoalStatus, UpdateGoalDto},
    },
    server::validator::{FieldErrors, Validate},
};

pub const MAX_TITLE_LENGTH: usize = 200;

fn check_progress(errors: &mut FieldErrors, progress: Option<i32>) {
    if progress.is_some_and(|p| !(0..=100).contains(&p)) {
        errors.add("progress", "must be between 0 and 100");
    }
}

impl Validate for CreateGoalDto {
    fn validate(&self) -> Result<(), Vec<FieldErrorDto>> {
        let mut errors = FieldErrors::new();

        errors.require("title", &self.title);
        errors.max_len("title", &self.title, MAX_TITLE_LENGTH);
        errors.one_of("priority", self.priority.as_deref(), GoalPriority::parse);
        errors.one_of("status", self.status.as_deref(), GoalStatus::parse);
        check_progress(&mut errors, self.progress);

        errors.finish()
    }
}

impl Validate for UpdateGoalDto {
    fn validate(&self) -> Result<(), Vec<FieldErrorDto>> {
        let mut errors = FieldErrors::new();

        if let Some(title) = &self.title {
            errors.require("title", title);
            errors.max_len("title", title, MAX_TITLE_LENGTH);
        }
        errors.one_of("priority", self.priority.as_deref(), GoalPriority::parse);
        errors.one_of("status", self.status.as_deref(), GoalStatus::parse);
        check_progress(&mut errors, self.progress);

        errors.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_must_be_a_percentage() {
        let dto = CreateGoalDto {
            title: "Ship onboarding revamp".to_string(),
            progress: Some(120),
            ..Default::default()
        };

        let errors = dto.validate().unwrap_err();

        assert_eq!(errors[0].field, "progress");
    }

    #[test]
    fn unknown_priority_is_rejected() {
        let dto = UpdateGoalDto {
            priority: Some("urgent".to_string()),
            ..Default::default()
        };

        assert!(dto.validate().is_err());
    }
}
