use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, SqlErr};
use serde::Deserialize;

use crate::{
    entity::{prelude::*, review},
    error::ApiError,
    middleware::jwt::AppUser,
    state::AppState,
};

#[derive(Clone, Deserialize, Debug)]
pub struct CreateArticleReviewBody {
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

/// One review per (article, user), enforced by the store's unique pair:
/// a duplicate submission loses with 409 and is pointed at the edit
/// endpoint.
#[tracing::instrument(name = "POST /articles/{article_id}/reviews", skip(state, user, body))]
pub async fn create_review(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(article_id): Path<i32>,
    Json(body): Json<CreateArticleReviewBody>,
) -> Result<(StatusCode, Json<review::Model>), ApiError> {
    let user_id = user.user_id()?;
    let rating = body
        .rating
        .filter(|r| (1..=5).contains(r))
        .ok_or_else(|| ApiError::bad_request("rating must be an integer from 1 to 5"))?;

    Article::find_by_id(article_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Article not found"))?;

    let created = review::ActiveModel {
        rating: Set(rating),
        comment: Set(body.comment),
        article_id: Set(article_id),
        user_id: Set(user_id),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .map_err(|err| match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            ApiError::conflict("You already reviewed this article, use the edit endpoint")
        }
        _ => err.into(),
    })?;

    Ok((StatusCode::CREATED, Json(created)))
}
