use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

pub mod create_article;
pub mod create_review;
pub mod get_article;
pub mod list_articles;
pub mod list_reviews;
pub mod review_average;
pub mod update_article;
pub mod update_my_review;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_articles::list_articles).post(create_article::create_article),
        )
        .route(
            "/{article_id}",
            get(get_article::get_article).put(update_article::update_article),
        )
        .route(
            "/{article_id}/reviews",
            get(list_reviews::list_reviews).post(create_review::create_review),
        )
        .route(
            "/{article_id}/reviews/me",
            put(update_my_review::update_my_review),
        )
        .route(
            "/{article_id}/reviews/average",
            get(review_average::review_average),
        )
}
