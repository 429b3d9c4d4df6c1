use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{data::new_id, model::organization::CreateOrganizationParams};

pub struct OrganizationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrganizationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateOrganizationParams,
    ) -> Result<entity::organization::Model, DbErr> {
        entity::organization::ActiveModel {
            id: ActiveValue::Set(new_id()),
            name: ActiveValue::Set(params.name),
            domain: ActiveValue::Set(params.domain),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<entity::organization::Model>, DbErr> {
        entity::prelude::Organization::find_by_id(id.to_string())
            .one(self.db)
            .await
    }

    /// Finds the organization that owns an email domain.
    ///
    /// # Arguments
    /// - `domain` - Lowercase domain without `@`
    pub async fn find_by_domain(
        &self,
        domain: &str,
    ) -> Result<Option<entity::organization::Model>, DbErr> {
        entity::prelude::Organization::find()
            .filter(entity::organization::Column::Domain.eq(domain))
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::organization::Model>, DbErr> {
        entity::prelude::Organization::find()
            .order_by_asc(entity::organization::Column::Name)
            .all(self.db)
            .await
    }
}
