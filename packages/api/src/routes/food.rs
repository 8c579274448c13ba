use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub mod create_food;
pub mod create_review;
pub mod featured_foods;
pub mod food_pins;
pub mod get_food;
pub mod list_foods;
pub mod my_review;
pub mod search_foods;
pub mod update_food;
pub mod update_review;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_foods::list_foods).post(create_food::create_food),
        )
        .route("/featured", get(featured_foods::featured_foods))
        .route("/pins", get(food_pins::food_pins))
        .route("/search", get(search_foods::search_foods))
        .route(
            "/{food_id}",
            get(get_food::get_food).put(update_food::update_food),
        )
        .route(
            "/{food_id}/reviews",
            post(create_review::create_review).put(update_review::update_review),
        )
        .route("/{food_id}/reviews/me", get(my_review::my_review))
}
