use crate::{
    model::{
        api::FieldErrorDto,
        hierarchy::{CreateHierarchyEdgeDto, EndHierarchyEdgeDto, HierarchyDateQueryDto},
    },
    server::validator::{FieldErrors, Validate},
};

impl Validate for CreateHierarchyEdgeDto {
    fn validate(&self) -> Result<(), Vec<FieldErrorDto>> {
        let mut errors = FieldErrors::new();

        errors.require("managerId", &self.manager_id);
        errors.require("employeeId", &self.employee_id);
        if !self.manager_id.is_empty() && self.manager_id == self.employee_id {
            errors.add("managerId", "an employee cannot manage themselves");
        }
        if let (Some(effective), Some(end)) = (self.effective_date, self.end_date) {
            if end <= effective {
                errors.add("endDate", "must be after effectiveDate");
            }
        }

        errors.finish()
    }
}

impl Validate for EndHierarchyEdgeDto {
    fn validate(&self) -> Result<(), Vec<FieldErrorDto>> {
        Ok(())
    }
}

impl Validate for HierarchyDateQueryDto {
    fn validate(&self) -> Result<(), Vec<FieldErrorDto>> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_management_is_rejected() {
        let dto = CreateHierarchyEdgeDto {
            manager_id: "u1".to_string(),
            employee_id: "u1".to_string(),
            ..Default::default()
        };

        let errors = dto.validate().unwrap_err();

        assert_eq!(errors[0].field, "managerId");
    }
}
