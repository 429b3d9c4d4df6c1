use crate::{
    model::{
        api::FieldErrorDto,
        cycle::{CreateCycleDto, CycleStatus, UpdateCycleDto},
    },
    server::validator::{FieldErrors, Validate},
};

impl Validate for CreateCycleDto {
    fn validate(&self) -> Result<(), Vec<FieldErrorDto>> {
        let mut errors = FieldErrors::new();

        errors.require("name", &self.name);
        if self.start_date.is_none() {
            errors.add("startDate", "is required");
        }
        if self.end_date.is_none() {
            errors.add("endDate", "is required");
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                errors.add("endDate", "must not be before startDate");
            }
        }
        errors.one_of("status", self.status.as_deref(), CycleStatus::parse);

        errors.finish()
    }
}

impl Validate for UpdateCycleDto {
    fn validate(&self) -> Result<(), Vec<FieldErrorDto>> {
        let mut errors = FieldErrors::new();

        if let Some(name) = &self.name {
            errors.require("name", name);
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                errors.add("endDate", "must not be before startDate");
            }
        }
        errors.one_of("status", self.status.as_deref(), CycleStatus::parse);

        errors.finish()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn end_before_start_is_rejected() {
        let dto = CreateCycleDto {
            name: "H1 2026".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 6, 30),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 1),
            ..Default::default()
        };

        let errors = dto.validate().unwrap_err();

        assert_eq!(errors[0].field, "endDate");
    }

    #[test]
    fn dates_are_required() {
        let dto = CreateCycleDto {
            name: "H1 2026".to_string(),
            ..Default::default()
        };

        let errors = dto.validate().unwrap_err();

        assert_eq!(errors.len(), 2);
    }
}
