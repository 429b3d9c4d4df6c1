//! Request validation.
//!
//! Request DTOs implement `Validate`, and handlers receive them through the
//! `ValidatedJson` and `ValidatedQuery` extractors. A payload that fails to deserialize is a
//! 400 `BadRequest`; one that deserializes but breaks a rule is a 400 `Validation` error
//! listing every rejected field.

pub mod comment;
pub mod cycle;
pub mod feedback;
pub mod goal;
pub mod hierarchy;
pub mod rating;
pub mod review;
pub mod user;

use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::{
    model::api::{FieldErrorDto, PageQueryDto, MAX_LIMIT, MAX_PAGE},
    server::error::AppError,
};

/// Field-level validation rules for a request payload.
pub trait Validate {
    /// Checks the payload.
    ///
    /// # Returns
    /// - `Ok(())` - Payload is acceptable
    /// - `Err(errors)` - One entry per rejected field
    fn validate(&self) -> Result<(), Vec<FieldErrorDto>>;
}

/// JSON body extractor that runs `Validate` after deserializing.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value.validate().map_err(AppError::Validation)?;

        Ok(Self(value))
    }
}

/// Query string extractor that runs `Validate` after deserializing.
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value.validate().map_err(AppError::Validation)?;

        Ok(Self(value))
    }
}

/// Accumulates field errors so a single response reports all of them.
#[derive(Default)]
pub struct FieldErrors(Vec<FieldErrorDto>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: &str) {
        self.0.push(FieldErrorDto::new(field, message));
    }

    /// Rejects empty or whitespace-only strings.
    pub fn require(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, "is required");
        }
    }

    /// Rejects strings longer than `max` characters.
    pub fn max_len(&mut self, field: &str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.add(field, &format!("must be at most {} characters", max));
        }
    }

    /// Rejects a present value that `parse` does not recognize.
    pub fn one_of<T>(&mut self, field: &str, value: Option<&str>, parse: fn(&str) -> Option<T>) {
        if let Some(value) = value {
            if parse(value).is_none() {
                self.add(field, &format!("'{}' is not a valid value", value));
            }
        }
    }

    /// Checks the shared `page` and `limit` bounds.
    pub fn pagination(&mut self, page: Option<i64>, limit: Option<i64>) {
        if page.is_some_and(|p| !(1..=MAX_PAGE).contains(&p)) {
            self.add("page", &format!("must be between 1 and {}", MAX_PAGE));
        }
        if limit.is_some_and(|l| !(1..=MAX_LIMIT).contains(&l)) {
            self.add("limit", &format!("must be between 1 and {}", MAX_LIMIT));
        }
    }

    pub fn finish(self) -> Result<(), Vec<FieldErrorDto>> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self.0)
        }
    }
}

impl Validate for PageQueryDto {
    fn validate(&self) -> Result<(), Vec<FieldErrorDto>> {
        let mut errors = FieldErrors::new();
        errors.pagination(self.page, self.limit);
        errors.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_bounds() {
        let ok = PageQueryDto {
            page: Some(1),
            limit: Some(100),
        };
        let bad = PageQueryDto {
            page: Some(0),
            limit: Some(0),
        };

        assert!(ok.validate().is_ok());
        let errors = bad.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "page");
        assert_eq!(errors[1].field, "limit");
    }

    #[test]
    fn page_is_capped_so_offsets_fit() {
        let last = PageQueryDto {
            page: Some(MAX_PAGE),
            limit: Some(MAX_LIMIT),
        };
        let huge = PageQueryDto {
            page: Some(i64::MAX),
            limit: Some(MAX_LIMIT),
        };

        assert!(last.validate().is_ok());
        let errors = huge.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "page");
    }
}
