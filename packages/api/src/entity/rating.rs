//! `SeaORM` Entity for Rating
//!
//! The (userId, foodId) pair is unique in the schema; the review engine
//! relies on that constraint for its one-rating-per-user guarantee.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(schema_name = "public", table_name = "Rating")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// 1..=5, validated at the route boundary.
    pub value: i32,

    #[sea_orm(column_name = "userId")]
    pub user_id: i32,
    #[sea_orm(column_name = "foodId")]
    pub food_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::food::Entity",
        from = "Column::FoodId",
        to = "super::food::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Food,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::food::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Food.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
