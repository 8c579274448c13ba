use axum::{
    Json,
    extract::{Path, Query, State},
};
use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};

use crate::{
    aggregate,
    entity::prelude::*,
    error::ApiError,
    routes::region::{RatedFood, foods_with_average},
    state::AppState,
};

#[derive(Clone, Deserialize, Debug)]
pub struct TopDishesQuery {
    pub limit: Option<u64>,
}

#[derive(Clone, Serialize, Debug)]
pub struct TopDishes {
    pub data: Vec<RatedFood>,
}

/// "Must try" ranking for one region: aggregate every food's ratings, then
/// order by average desc, count desc, name asc.
#[tracing::instrument(name = "GET /regions/{region_id}/top-dishes", skip(state))]
pub async fn top_dishes(
    State(state): State<AppState>,
    Path(region_id): Path<i32>,
    Query(query): Query<TopDishesQuery>,
) -> Result<Json<TopDishes>, ApiError> {
    let limit = query.limit.unwrap_or(4).min(50) as usize;

    Region::find_by_id(region_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Region not found"))?;

    let mut foods = foods_with_average(&state.db, region_id).await?;
    aggregate::rank_by_rating(&mut foods);
    foods.truncate(limit);

    Ok(Json(TopDishes { data: foods }))
}
