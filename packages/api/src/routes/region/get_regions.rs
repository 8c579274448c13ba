use axum::{
    Json,
    extract::{Query, State},
};
use sea_orm::{
    EntityTrait, QueryFilter, QueryOrder,
    sea_query::{Expr, extension::postgres::PgExpr},
};
use serde::{Deserialize, Serialize};

use crate::{
    entity::{prelude::*, region},
    error::ApiError,
    state::AppState,
};

#[derive(Clone, Deserialize, Debug)]
pub struct RegionsQuery {
    pub q: Option<String>,
    #[serde(rename = "withProfile")]
    pub with_profile: Option<String>,
}

#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegionListItem {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "cuisine_characteristics")]
    pub cuisine_characteristics: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

#[tracing::instrument(name = "GET /regions", skip(state))]
pub async fn get_regions(
    State(state): State<AppState>,
    Query(query): Query<RegionsQuery>,
) -> Result<Json<Vec<RegionListItem>>, ApiError> {
    let with_profile = query.with_profile.as_deref() == Some("true");

    let mut select = Region::find();
    if let Some(q) = query.q.as_deref().filter(|q| !q.is_empty()) {
        select = select
            .filter(Expr::col((region::Entity, region::Column::Name)).ilike(format!("%{}%", q)));
    }
    let regions = select
        .order_by_asc(region::Column::Name)
        .all(&state.db)
        .await?;

    let items = regions
        .into_iter()
        .map(|r| RegionListItem {
            id: r.id,
            name: r.name,
            description: r.description,
            cuisine_characteristics: r.cuisine_characteristics,
            profile_content: with_profile.then_some(r.profile_content).flatten(),
            profile_image_url: with_profile.then_some(r.profile_image_url).flatten(),
            slug: with_profile.then_some(r.slug).flatten(),
        })
        .collect();

    Ok(Json(items))
}
