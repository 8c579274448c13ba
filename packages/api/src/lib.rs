//! Jelajah Rasa API: a regional-cuisine catalog with ratings, comments
//! and article reviews over a Prisma-managed Postgres schema.

use std::sync::Arc;

use axum::{Router, middleware::from_fn_with_state, routing::get};
use middleware::jwt::jwt_middleware;
use state::{AppState, State};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, decompression::RequestDecompressionLayer,
};

pub mod aggregate;
pub mod entity;
pub mod error;
mod middleware;
mod routes;
pub mod slug;
pub mod state;

pub use axum;
pub use sea_orm;

pub mod auth {
    pub use crate::middleware::jwt::{AppUser, Claims};
}

pub fn construct_router(state: Arc<State>) -> Router {
    let router = Router::new()
        .route("/", get(root))
        .nest("/health", routes::health::routes())
        .nest("/foods", routes::food::routes())
        .nest("/regions", routes::region::routes())
        .nest("/articles", routes::article::routes())
        .nest("/users", routes::user::routes())
        .nest("/suggestions", routes::suggestion::routes())
        .with_state(state.clone())
        .layer(from_fn_with_state(state, jwt_middleware))
        .layer(CorsLayer::permissive())
        .layer(
            ServiceBuilder::new()
                .layer(RequestDecompressionLayer::new())
                .layer(CompressionLayer::new()),
        );

    Router::new().nest("/api", router)
}

#[tracing::instrument(name = "GET /")]
async fn root() -> &'static str {
    "Jelajah Rasa API ready"
}
