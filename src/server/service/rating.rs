use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::rating::RatingRepository,
    error::AppError,
    model::{
        rating::{CreateRatingParams, Rating, UpdateRatingParams},
        user::User,
    },
    service::feedback::{find_editable, find_visible},
};

pub struct RatingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RatingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_feedback(
        &self,
        viewer: &User,
        feedback_id: &str,
    ) -> Result<Vec<Rating>, AppError> {
        let feedback = find_visible(self.db, feedback_id, viewer).await?;

        Ok(RatingRepository::new(self.db)
            .find_by_feedback(&feedback.id)
            .await?
            .into_iter()
            .map(Rating::from_entity)
            .collect())
    }

    /// Adds a rating to a feedback record the actor wrote.
    pub async fn create(&self, actor: &User, params: CreateRatingParams) -> Result<Rating, AppError> {
        let txn = self.db.begin().await?;

        find_editable(&txn, &params.feedback_id, actor).await?;
        check_score(params.score, params.max_score)?;

        let rating = RatingRepository::new(&txn).create(params).await?;
        txn.commit().await?;

        Ok(Rating::from_entity(rating))
    }

    /// Updates a rating; the score is checked against the resulting max score.
    pub async fn update(
        &self,
        actor: &User,
        id: &str,
        params: UpdateRatingParams,
    ) -> Result<Rating, AppError> {
        let txn = self.db.begin().await?;

        let rating_repo = RatingRepository::new(&txn);
        let Some(rating) = rating_repo.find_by_id(id).await? else {
            return Err(not_found());
        };
        find_editable(&txn, &rating.feedback_id, actor)
            .await
            .map_err(hide_parent)?;
        check_score(
            params.score.unwrap_or(rating.score),
            params.max_score.unwrap_or(rating.max_score),
        )?;

        let rating = rating_repo.update(rating, params).await?;
        txn.commit().await?;

        Ok(Rating::from_entity(rating))
    }

    pub async fn delete(&self, actor: &User, id: &str) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let rating_repo = RatingRepository::new(&txn);
        let Some(rating) = rating_repo.find_by_id(id).await? else {
            return Err(not_found());
        };
        find_editable(&txn, &rating.feedback_id, actor)
            .await
            .map_err(hide_parent)?;

        rating_repo.delete(id).await?;
        txn.commit().await?;

        Ok(())
    }
}

fn check_score(score: f64, max_score: f64) -> Result<(), AppError> {
    if max_score <= 0.0 {
        return Err(AppError::BadRequest("maxScore must be greater than 0".to_string()));
    }
    if !(0.0..=max_score).contains(&score) {
        return Err(AppError::BadRequest(format!(
            "score must be between 0 and {}",
            max_score
        )));
    }
    Ok(())
}

fn not_found() -> AppError {
    AppError::NotFound("Rating not found".to_string())
}

/// A hidden parent record reads as a missing rating.
fn hide_parent(error: AppError) -> AppError {
    match error {
        AppError::NotFound(_) => not_found(),
        other => other,
    }
}
