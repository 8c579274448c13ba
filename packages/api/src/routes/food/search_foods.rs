use axum::{
    Json,
    extract::{Query, State},
};
use sea_orm::{
    EntityTrait, LoaderTrait, QueryFilter, QueryOrder,
    sea_query::{Expr, extension::postgres::PgExpr},
};
use serde::{Deserialize, Serialize};

use crate::{
    entity::{food, prelude::*},
    error::ApiError,
    routes::food::list_foods::RegionRef,
    state::AppState,
};

#[derive(Clone, Deserialize, Debug)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: i32,
    pub name: String,
    pub image_url: Option<String>,
    pub region: Option<RegionRef>,
}

#[tracing::instrument(name = "GET /foods/search", skip(state))]
pub async fn search_foods(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<SearchResult>>, ApiError> {
    let q = query
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::bad_request("Search query must not be empty"))?;

    let foods = Food::find()
        .filter(Expr::col((food::Entity, food::Column::Name)).ilike(format!("%{}%", q)))
        .order_by_asc(food::Column::Name)
        .all(&state.db)
        .await?;

    let regions = foods.load_one(Region, &state.db).await?;

    let results = foods
        .into_iter()
        .zip(regions)
        .map(|(food, region)| SearchResult {
            id: food.id,
            name: food.name,
            image_url: food.image_url,
            region: region.map(|r| RegionRef {
                id: r.id,
                name: r.name,
            }),
        })
        .collect();

    Ok(Json(results))
}
