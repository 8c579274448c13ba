use axum::{
    Extension, Json,
    extract::{Path, State},
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::Serialize;

use crate::{
    entity::{comment, prelude::*, rating},
    error::ApiError,
    middleware::jwt::AppUser,
    state::AppState,
};

#[derive(Clone, Serialize, Debug)]
pub struct MyReview {
    pub rating: Option<rating::Model>,
    pub comment: Option<comment::Model>,
}

/// The caller's own rating/comment pair for one food.
#[tracing::instrument(name = "GET /foods/{food_id}/reviews/me", skip(state, user))]
pub async fn my_review(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(food_id): Path<i32>,
) -> Result<Json<MyReview>, ApiError> {
    let user_id = user.user_id()?;

    let rating = Rating::find()
        .filter(rating::Column::UserId.eq(user_id))
        .filter(rating::Column::FoodId.eq(food_id))
        .one(&state.db)
        .await?;
    let comment = Comment::find()
        .filter(comment::Column::UserId.eq(user_id))
        .filter(comment::Column::FoodId.eq(food_id))
        .one(&state.db)
        .await?;

    if rating.is_none() && comment.is_none() {
        return Err(ApiError::not_found("You have not reviewed this food yet"));
    }

    Ok(Json(MyReview { rating, comment }))
}
