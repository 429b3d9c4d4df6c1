use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    model::feedback::ReviewType,
    server::{data::new_id, model::review::CreateTemplateParams},
};

pub struct ReviewTemplateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewTemplateRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a template, storing its questions as a JSON array.
    pub async fn create(
        &self,
        params: CreateTemplateParams,
    ) -> Result<entity::review_template::Model, DbErr> {
        let questions = serde_json::to_string(&params.questions)
            .map_err(|e| DbErr::Custom(format!("Failed to encode template questions: {}", e)))?;

        entity::review_template::ActiveModel {
            id: ActiveValue::Set(new_id()),
            name: ActiveValue::Set(params.name),
            review_type: ActiveValue::Set(params.review_type.as_str().to_string()),
            description: ActiveValue::Set(params.description),
            questions: ActiveValue::Set(questions),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: &str,
    ) -> Result<Option<entity::review_template::Model>, DbErr> {
        entity::prelude::ReviewTemplate::find_by_id(id.to_string())
            .one(self.db)
            .await
    }

    /// Gets all templates ordered by name, optionally of one review type.
    pub async fn find_all(
        &self,
        review_type: Option<ReviewType>,
    ) -> Result<Vec<entity::review_template::Model>, DbErr> {
        let mut query = entity::prelude::ReviewTemplate::find();
        if let Some(review_type) = review_type {
            query = query.filter(entity::review_template::Column::ReviewType.eq(review_type.as_str()));
        }

        query
            .order_by_asc(entity::review_template::Column::Name)
            .all(self.db)
            .await
    }
}
