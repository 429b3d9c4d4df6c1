use crate::{
    model::{
        api::FieldErrorDto,
        rating::{CreateRatingDto, UpdateRatingDto, DEFAULT_MAX_SCORE},
    },
    server::validator::{FieldErrors, Validate},
};

fn check_scores(errors: &mut FieldErrors, score: Option<f64>, max_score: Option<f64>) {
    if let Some(max_score) = max_score {
        if !(max_score > 0.0) {
            errors.add("maxScore", "must be greater than 0");
        }
    }
    if let Some(score) = score {
        let max_score = max_score.unwrap_or(DEFAULT_MAX_SCORE);
        if !(0.0..=max_score).contains(&score) {
            errors.add("score", &format!("must be between 0 and {}", max_score));
        }
    }
}

impl Validate for CreateRatingDto {
    fn validate(&self) -> Result<(), Vec<FieldErrorDto>> {
        let mut errors = FieldErrors::new();

        errors.require("category", &self.category);
        if self.score.is_none() {
            errors.add("score", "is required");
        }
        check_scores(&mut errors, self.score, self.max_score);
        if self.weight.is_some_and(|w| w < 0.0) {
            errors.add("weight", "must not be negative");
        }

        errors.finish()
    }
}

impl Validate for UpdateRatingDto {
    fn validate(&self) -> Result<(), Vec<FieldErrorDto>> {
        let mut errors = FieldErrors::new();

        if let Some(category) = &self.category {
            errors.require("category", category);
        }
        // Without a max score in the payload the stored one applies, checked by the service.
        if self.max_score.is_some() {
            check_scores(&mut errors, self.score, self.max_score);
        } else if self.score.is_some_and(|s| s < 0.0) {
            errors.add("score", "must not be negative");
        }
        if self.weight.is_some_and(|w| w < 0.0) {
            errors.add("weight", "must not be negative");
        }

        errors.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(score: f64, max_score: Option<f64>) -> CreateRatingDto {
        CreateRatingDto {
            category: "communication".to_string(),
            score: Some(score),
            max_score,
            ..Default::default()
        }
    }

    #[test]
    fn score_is_bounded_by_default_max() {
        assert!(rating(5.0, None).validate().is_ok());
        assert!(rating(5.5, None).validate().is_err());
    }

    #[test]
    fn score_is_bounded_by_given_max() {
        assert!(rating(9.0, Some(10.0)).validate().is_ok());
        assert!(rating(11.0, Some(10.0)).validate().is_err());
    }

    #[test]
    fn missing_score_is_rejected() {
        let dto = CreateRatingDto {
            category: "delivery".to_string(),
            ..Default::default()
        };

        let errors = dto.validate().unwrap_err();

        assert_eq!(errors[0].field, "score");
    }
}
