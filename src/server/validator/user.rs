use crate::{
    model::{
        api::FieldErrorDto,
        organization::CreateOrganizationDto,
        user::{GoogleLoginDto, Role, UpdateUserRolesDto},
    },
    server::validator::{FieldErrors, Validate},
};

impl Validate for UpdateUserRolesDto {
    fn validate(&self) -> Result<(), Vec<FieldErrorDto>> {
        let mut errors = FieldErrors::new();

        if self.roles.is_empty() {
            errors.add("roles", "at least one role is required");
        }
        for role in &self.roles {
            errors.one_of("roles", Some(role), Role::parse);
        }

        errors.finish()
    }
}

impl Validate for GoogleLoginDto {
    fn validate(&self) -> Result<(), Vec<FieldErrorDto>> {
        let mut errors = FieldErrors::new();
        errors.require("credential", &self.credential);
        errors.finish()
    }
}

impl Validate for CreateOrganizationDto {
    fn validate(&self) -> Result<(), Vec<FieldErrorDto>> {
        let mut errors = FieldErrors::new();

        errors.require("name", &self.name);
        if let Some(domain) = &self.domain {
            if domain.trim().is_empty() || !domain.contains('.') {
                errors.add("domain", "must be a domain such as example.com");
            }
        }

        errors.finish()
    }
}
