use axum::{Extension, Json, extract::State};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;
use std::collections::HashMap;

use crate::{
    entity::{comment, food, prelude::*, rating},
    error::ApiError,
    middleware::jwt::AppUser,
    state::AppState,
};

#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MyReviewEntry {
    pub food_id: i32,
    pub food_name: String,
    pub user_rating: i32,
    pub user_comment: Option<String>,
}

/// Everything the caller has rated, joined with their own comment per
/// food. The (userId, foodId) uniqueness means at most one comment each.
#[tracing::instrument(name = "GET /users/me/reviews", skip(state, user))]
pub async fn my_reviews(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
) -> Result<Json<Vec<MyReviewEntry>>, ApiError> {
    let user_id = user.user_id()?;

    let rated: Vec<(rating::Model, Option<food::Model>)> = Rating::find()
        .filter(rating::Column::UserId.eq(user_id))
        .find_also_related(Food)
        .order_by_asc(food::Column::Name)
        .all(&state.db)
        .await?;

    let mut comments: HashMap<i32, String> = Comment::find()
        .filter(comment::Column::UserId.eq(user_id))
        .all(&state.db)
        .await?
        .into_iter()
        .map(|c| (c.food_id, c.content))
        .collect();

    let entries = rated
        .into_iter()
        .filter_map(|(rating, food)| {
            let food = food?;
            Some(MyReviewEntry {
                food_id: food.id,
                food_name: food.name,
                user_rating: rating.value,
                user_comment: comments.remove(&rating.food_id),
            })
        })
        .collect();

    Ok(Json(entries))
}
