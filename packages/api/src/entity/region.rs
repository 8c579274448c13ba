//! `SeaORM` Entity for Region

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(schema_name = "public", table_name = "Region")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    // snake_case in the schema and in the JSON contract, unlike the rest
    #[sea_orm(column_type = "Text", nullable)]
    #[serde(rename = "cuisine_characteristics")]
    pub cuisine_characteristics: Option<String>,

    #[sea_orm(column_name = "profileContent", column_type = "Text", nullable)]
    pub profile_content: Option<String>,
    #[sea_orm(column_name = "profileImageUrl", column_type = "Text", nullable)]
    pub profile_image_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable, unique)]
    pub slug: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::food::Entity")]
    Food,
    #[sea_orm(has_many = "super::restaurant::Entity")]
    Restaurant,
    #[sea_orm(has_many = "super::article::Entity")]
    Article,
}

impl Related<super::food::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Food.def()
    }
}

impl Related<super::restaurant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Restaurant.def()
    }
}

impl Related<super::article::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Article.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
