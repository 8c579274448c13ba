use axum::{Json, extract::State};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::Serialize;

use crate::{
    entity::{food, prelude::*},
    error::ApiError,
    state::AppState,
};

#[derive(Clone, Serialize, Debug)]
pub struct FoodPin {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Map pins: every food with a geocoordinate.
#[tracing::instrument(name = "GET /foods/pins", skip(state))]
pub async fn food_pins(State(state): State<AppState>) -> Result<Json<Vec<FoodPin>>, ApiError> {
    let foods = Food::find()
        .filter(food::Column::Latitude.is_not_null())
        .filter(food::Column::Longitude.is_not_null())
        .all(&state.db)
        .await?;

    let pins = foods
        .into_iter()
        .filter_map(|f| match (f.latitude, f.longitude) {
            (Some(latitude), Some(longitude)) => Some(FoodPin {
                id: f.id,
                name: f.name,
                latitude,
                longitude,
            }),
            _ => None,
        })
        .collect();

    Ok(Json(pins))
}
