use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "ArticleType")]
pub enum ArticleType {
    #[sea_orm(string_value = "STORY")]
    #[serde(rename = "STORY")]
    Story,
    #[sea_orm(string_value = "REGION_PROFILE")]
    #[serde(rename = "REGION_PROFILE")]
    RegionProfile,
}
