//! Feedback factory. Inserts the feedback row and its 1:1 content row.

use crate::factory::helpers::new_uuid;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating feedback records.
///
/// Defaults: `peer` review, `draft` status, overall comment `"Great collaborator"`.
pub struct FeedbackFactory<'a> {
    db: &'a DatabaseConnection,
    cycle_id: String,
    from_user_id: String,
    to_user_id: String,
    review_type: String,
    status: String,
    overall_comment: String,
}

impl<'a> FeedbackFactory<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        cycle_id: &str,
        from_user_id: &str,
        to_user_id: &str,
    ) -> Self {
        Self {
            db,
            cycle_id: cycle_id.to_string(),
            from_user_id: from_user_id.to_string(),
            to_user_id: to_user_id.to_string(),
            review_type: "peer".to_string(),
            status: "draft".to_string(),
            overall_comment: "Great collaborator".to_string(),
        }
    }

    pub fn review_type(mut self, review_type: impl Into<String>) -> Self {
        self.review_type = review_type.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn overall_comment(mut self, comment: impl Into<String>) -> Self {
        self.overall_comment = comment.into();
        self
    }

    pub async fn build(self) -> Result<entity::feedback::Model, DbErr> {
        let now = Utc::now();
        let feedback = entity::feedback::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            cycle_id: ActiveValue::Set(self.cycle_id),
            from_user_id: ActiveValue::Set(self.from_user_id),
            to_user_id: ActiveValue::Set(self.to_user_id),
            review_type: ActiveValue::Set(self.review_type),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        entity::feedback_content::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            feedback_id: ActiveValue::Set(feedback.id.clone()),
            overall_comment: ActiveValue::Set(self.overall_comment),
            strengths: ActiveValue::Set(None),
            improvements: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        Ok(feedback)
    }
}

/// Creates a draft peer feedback from `from_user_id` to `to_user_id`.
pub async fn create_feedback(
    db: &DatabaseConnection,
    cycle_id: &str,
    from_user_id: &str,
    to_user_id: &str,
) -> Result<entity::feedback::Model, DbErr> {
    FeedbackFactory::new(db, cycle_id, from_user_id, to_user_id)
        .build()
        .await
}
