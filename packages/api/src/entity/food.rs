//! `SeaORM` Entity for Food

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(schema_name = "public", table_name = "Food")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_name = "regionId")]
    pub region_id: i32,

    #[sea_orm(column_name = "cityName", column_type = "Text", nullable)]
    pub city_name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub intro: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub body: Option<String>,
    #[sea_orm(column_name = "imageUrl", column_type = "Text", nullable)]
    pub image_url: Option<String>,

    #[sea_orm(column_name = "articleId", nullable)]
    pub article_id: Option<i32>,

    #[sea_orm(nullable)]
    pub latitude: Option<f64>,
    #[sea_orm(nullable)]
    pub longitude: Option<f64>,

    #[sea_orm(column_name = "historyAndMeaning", column_type = "Text", nullable)]
    pub history_and_meaning: Option<String>,
    #[sea_orm(column_name = "cookingMethod", column_type = "Text", nullable)]
    pub cooking_method: Option<String>,
    #[sea_orm(column_name = "quickFacts", column_type = "Text", nullable)]
    pub quick_facts: Option<String>,
    #[sea_orm(column_name = "influencerComment", column_type = "Text", nullable)]
    pub influencer_comment: Option<String>,
    #[sea_orm(column_name = "commentSource", column_type = "Text", nullable)]
    pub comment_source: Option<String>,

    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTime,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::region::Entity",
        from = "Column::RegionId",
        to = "super::region::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Region,
    #[sea_orm(
        belongs_to = "super::article::Entity",
        from = "Column::ArticleId",
        to = "super::article::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Article,
    #[sea_orm(has_many = "super::rating::Entity")]
    Rating,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::food_on_restaurant::Entity")]
    FoodOnRestaurant,
}

impl Related<super::region::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Region.def()
    }
}

impl Related<super::article::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Article.def()
    }
}

impl Related<super::rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rating.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::restaurant::Entity> for Entity {
    fn to() -> RelationDef {
        super::food_on_restaurant::Relation::Restaurant.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::food_on_restaurant::Relation::Food.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
