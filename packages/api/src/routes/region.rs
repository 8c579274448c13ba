use axum::{
    Router,
    routing::{get, put},
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryFilter};
use serde::Serialize;

use crate::{
    aggregate::{LIST_PRECISION, RatedItem, RatingSummary},
    entity::{food, prelude::*},
    error::ApiError,
    state::AppState,
};

pub mod get_region;
pub mod get_regions;
pub mod region_restaurants;
pub mod top_dishes;
pub mod update_profile;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_regions::get_regions))
        .route("/{region_id}", get(get_region::get_region))
        .route(
            "/{region_id}/profile",
            put(update_profile::update_profile),
        )
        .route("/{region_id}/top-dishes", get(top_dishes::top_dishes))
        .route(
            "/{region_id}/restaurants",
            get(region_restaurants::region_restaurants),
        )
}

/// A region's food with its computed aggregate, the shape shared by the
/// region detail and the top-dishes ranking.
#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RatedFood {
    #[serde(flatten)]
    pub food: food::Model,
    pub average_rating: Option<f64>,
    pub ratings_count: u64,
}

impl RatedItem for RatedFood {
    fn average(&self) -> Option<f64> {
        self.average_rating
    }
    fn ratings_count(&self) -> u64 {
        self.ratings_count
    }
    fn name(&self) -> &str {
        &self.food.name
    }
}

pub(crate) async fn foods_with_average(
    db: &DatabaseConnection,
    region_id: i32,
) -> Result<Vec<RatedFood>, ApiError> {
    let foods = Food::find()
        .filter(food::Column::RegionId.eq(region_id))
        .all(db)
        .await?;
    let ratings = foods.load_many(Rating, db).await?;

    let rated = foods
        .into_iter()
        .zip(ratings)
        .map(|(food, ratings)| {
            let values: Vec<i32> = ratings.iter().map(|r| r.value).collect();
            let summary = RatingSummary::from_values(&values, LIST_PRECISION);
            RatedFood {
                food,
                average_rating: summary.average,
                ratings_count: summary.count,
            }
        })
        .collect();
    Ok(rated)
}
