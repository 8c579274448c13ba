use axum::{Router, routing::get};

use crate::state::AppState;

pub mod get_me;
pub mod my_reviews;
pub mod update_me;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(get_me::get_me).put(update_me::update_me))
        .route("/me/reviews", get(my_reviews::my_reviews))
}
