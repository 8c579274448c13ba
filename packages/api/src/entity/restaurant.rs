//! `SeaORM` Entity for Restaurant

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(schema_name = "public", table_name = "Restaurant")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    #[sea_orm(column_name = "googleMapsLink", column_type = "Text", nullable)]
    pub google_maps_link: Option<String>,

    #[sea_orm(column_name = "regionId")]
    pub region_id: i32,

    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTime,
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
    #[sea_orm(has_many = "super::food_on_restaurant::Entity")]
    FoodOnRestaurant,
}

impl Related<super::region::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Region.def()
    }
}

impl Related<super::food::Entity> for Entity {
    fn to() -> RelationDef {
        super::food_on_restaurant::Relation::Food.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::food_on_restaurant::Relation::Restaurant.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
