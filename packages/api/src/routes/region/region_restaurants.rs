use axum::{
    Json,
    extract::{Path, Query, State},
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use serde::{Deserialize, Serialize};

use crate::{
    entity::{prelude::*, restaurant},
    error::ApiError,
    routes::region::get_region::RestaurantItem,
    state::AppState,
};

#[derive(Clone, Deserialize, Debug)]
pub struct RestaurantsQuery {
    pub limit: Option<u64>,
}

#[derive(Clone, Serialize, Debug)]
pub struct RegionRestaurants {
    pub data: Vec<RestaurantItem>,
}

#[tracing::instrument(name = "GET /regions/{region_id}/restaurants", skip(state))]
pub async fn region_restaurants(
    State(state): State<AppState>,
    Path(region_id): Path<i32>,
    Query(query): Query<RestaurantsQuery>,
) -> Result<Json<RegionRestaurants>, ApiError> {
    let limit = query.limit.unwrap_or(20).min(100);

    let rows = Restaurant::find()
        .filter(restaurant::Column::RegionId.eq(region_id))
        .order_by_desc(restaurant::Column::CreatedAt)
        .limit(limit)
        .all(&state.db)
        .await?;

    let data = rows
        .into_iter()
        .map(|r| RestaurantItem {
            id: r.id,
            name: r.name,
            address: r.address,
            google_maps_link: r.google_maps_link,
        })
        .collect();

    Ok(Json(RegionRestaurants { data }))
}
