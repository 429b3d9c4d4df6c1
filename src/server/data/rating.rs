use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::new_id,
    model::rating::{CreateRatingParams, UpdateRatingParams},
};

pub struct RatingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RatingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateRatingParams) -> Result<entity::rating::Model, DbErr> {
        entity::rating::ActiveModel {
            id: ActiveValue::Set(new_id()),
            feedback_id: ActiveValue::Set(params.feedback_id),
            category: ActiveValue::Set(params.category),
            subcategory: ActiveValue::Set(params.subcategory),
            score: ActiveValue::Set(params.score),
            max_score: ActiveValue::Set(params.max_score),
            weight: ActiveValue::Set(params.weight),
            comment: ActiveValue::Set(params.comment),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<entity::rating::Model>, DbErr> {
        entity::prelude::Rating::find_by_id(id.to_string())
            .one(self.db)
            .await
    }

    pub async fn find_by_feedback(
        &self,
        feedback_id: &str,
    ) -> Result<Vec<entity::rating::Model>, DbErr> {
        entity::prelude::Rating::find()
            .filter(entity::rating::Column::FeedbackId.eq(feedback_id))
            .order_by_asc(entity::rating::Column::Category)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        rating: entity::rating::Model,
        params: UpdateRatingParams,
    ) -> Result<entity::rating::Model, DbErr> {
        let mut active: entity::rating::ActiveModel = rating.into();
        if let Some(category) = params.category {
            active.category = ActiveValue::Set(category);
        }
        if let Some(subcategory) = params.subcategory {
            active.subcategory = ActiveValue::Set(Some(subcategory));
        }
        if let Some(score) = params.score {
            active.score = ActiveValue::Set(score);
        }
        if let Some(max_score) = params.max_score {
            active.max_score = ActiveValue::Set(max_score);
        }
        if let Some(weight) = params.weight {
            active.weight = ActiveValue::Set(Some(weight));
        }
        if let Some(comment) = params.comment {
            active.comment = ActiveValue::Set(Some(comment));
        }
        active.update(self.db).await
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Rating::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
