use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "feedback")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub cycle_id: String,
    pub from_user_id: String,
    pub to_user_id: String,
    /// One of `self`, `peer`, `manager`, `upward`.
    pub review_type: String,
    /// One of `draft`, `submitted`, `completed`.
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::feedback_cycle::Entity",
        from = "Column::CycleId",
        to = "super::feedback_cycle::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    FeedbackCycle,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::FromUserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    FromUser,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ToUserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ToUser,
    #[sea_orm(has_one = "super::feedback_content::Entity")]
    FeedbackContent,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::rating::Entity")]
    Rating,
    #[sea_orm(has_many = "super::goal::Entity")]
    Goal,
}

impl Related<super::feedback_cycle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeedbackCycle.def()
    }
}

impl Related<super::feedback_content::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeedbackContent.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rating.def()
    }
}

impl Related<super::goal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Goal.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
