//! Review template factory.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a review template of the given type with two default questions.
pub async fn create_template(
    db: &DatabaseConnection,
    review_type: &str,
) -> Result<entity::review_template::Model, DbErr> {
    let questions = serde_json::json!(["What went well?", "What could improve?"]).to_string();

    entity::review_template::ActiveModel {
        id: ActiveValue::Set(new_uuid()),
        name: ActiveValue::Set(format!("Template {}", next_id())),
        review_type: ActiveValue::Set(review_type.to_string()),
        description: ActiveValue::Set(None),
        questions: ActiveValue::Set(questions),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
